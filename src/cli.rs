use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    /// Where the output lines live
    #[arg(long, short, value_enum, default_value_t = Backend::default())]
    pub backend: Backend,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum Backend {
    /// Raspberry Pi GPIO
    #[cfg(feature = "rpi")]
    #[default]
    Rpi,

    /// In-memory lines, logged at trace level
    #[cfg_attr(not(feature = "rpi"), default)]
    Simulated,
}
