use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;

pub fn setup<Level>(
    verbosity: clap_verbosity_flag::Verbosity<Level>,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError>
where
    Level: clap_verbosity_flag::LogLevel,
{
    let directive = tracing_subscriber::filter::Directive::from(verbosity.tracing_level_filter());
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy();

    // stdout carries the menu and step reports
    let subscriber = tracing_subscriber::registry::Registry::default().with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(env_filter),
    );

    tracing::subscriber::set_global_default(subscriber)
}
