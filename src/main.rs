use led_toggle::backend::simulated::SimulatedLines;
use led_toggle::{LINE_OFFSETS, LineProvider, LineSet, Prompt, Session, SessionEnd};
use tokio_util::sync::CancellationToken;

mod cli;
mod logging;

fn main() -> color_eyre::eyre::Result<()> {
    setup_panic();
    color_eyre::install()?;
    let cli = <crate::cli::Cli as clap::Parser>::parse();
    crate::logging::setup(cli.verbosity)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(cli.backend));

    // A blocking stdin read may still be parked after cancellation.
    runtime.shutdown_background();

    let end = result?;
    tracing::info!(?end, "Session ended");
    Ok(())
}

fn setup_panic() {
    human_panic::setup_panic!(human_panic::Metadata::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
}

async fn run(backend: crate::cli::Backend) -> Result<SessionEnd, led_toggle::Error> {
    let cancel = CancellationToken::new();
    led_toggle::signal::cancel_on_shutdown(cancel.clone())?;

    match backend {
        #[cfg(feature = "rpi")]
        crate::cli::Backend::Rpi => {
            let mut provider = led_toggle::backend::rpi::RpiLines::new()?;
            drive(&mut provider, cancel).await
        }
        crate::cli::Backend::Simulated => drive(&mut SimulatedLines, cancel).await,
    }
}

async fn drive<P: LineProvider>(
    provider: &mut P,
    cancel: CancellationToken,
) -> Result<SessionEnd, led_toggle::Error> {
    let lines = LineSet::acquire(provider, &LINE_OFFSETS)?;
    tracing::info!(?lines, "Output lines ready");

    Session::new(lines, Prompt::stdio(), std::io::stdout(), cancel)
        .run()
        .await
}
