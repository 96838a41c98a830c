use crate::line::LineError;
use crate::sequencer::SequencerError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Line(#[from] LineError),

    #[error(transparent)]
    Sequencer(#[from] SequencerError),

    #[error("Failed to read mode selection")]
    Prompt(#[source] std::io::Error),

    #[error("Failed to write step report to console")]
    Console(#[source] std::io::Error),

    #[error("Failed to install shutdown signal handler")]
    Signal(#[source] std::io::Error),
}
