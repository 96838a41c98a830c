//! Interactive mode selection on a text stream.

use core::fmt::Write as _;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::error::Error;
use crate::mode::{Mode, ParseSelectionError, Selection};
use crate::session::ModeSource;

const INVALID_SELECTION: &str = "Error you must type one of letters listed above\n>";

/// Prints the mode menu and reads one-letter selections.
///
/// Only the first byte of each line counts, in either case. Anything
/// unrecognised, including bytes that are not text, is reprompted. End of
/// input selects quit.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
    line: Vec<u8>,
}

impl<R, W> Prompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: Vec::new(),
        }
    }

    async fn write(&mut self, text: &str) -> Result<(), Error> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .map_err(Error::Prompt)?;
        self.writer.flush().await.map_err(Error::Prompt)
    }
}

impl Prompt<BufReader<Stdin>, Stdout> {
    /// Prompt on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

/// The menu shown before every selection.
pub fn menu() -> String {
    let mut menu = String::from(
        "\nWelcome to the LED toggle program.\nSelect the mode from list below:",
    );
    for mode in Mode::ALL {
        let _ = write!(menu, "\n    {} = {}", mode.symbol(), mode.description());
    }
    let _ = write!(menu, "\n    {} = Quit\n>", Selection::QUIT_SYMBOL);
    menu
}

impl<R, W> ModeSource for Prompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn next_selection(&mut self) -> Result<Selection, Error> {
        self.write(&menu()).await?;

        loop {
            self.line.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.line)
                .await
                .map_err(Error::Prompt)?;

            if read == 0 {
                tracing::debug!("End of input, quitting");
                return Ok(Selection::Quit);
            }

            let selection = match self.line.first() {
                Some(&byte) => Selection::try_from(char::from(byte)),
                None => Err(ParseSelectionError::Empty),
            };

            match selection {
                Ok(selection) => return Ok(selection),
                Err(error) => {
                    tracing::debug!(%error, "Rejected mode selection");
                    self.write(INVALID_SELECTION).await?;
                }
            }
        }
    }
}
