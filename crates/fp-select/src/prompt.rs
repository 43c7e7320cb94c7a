use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use inquire::{InquireError, Text};

/// One answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    Line(String),
    /// Ctrl-C or Esc at the prompt.
    Interrupted,
    /// Input stream closed.
    Eof,
}

pub trait Prompter {
    fn read_line(&mut self, message: &str) -> Result<PromptInput>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_line(&mut self, message: &str) -> Result<PromptInput> {
        (**self).read_line(message)
    }
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn read_line(&mut self, message: &str) -> Result<PromptInput> {
        (**self).read_line(message)
    }
}

/// Line editor prompt for interactive terminals.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, message: &str) -> Result<PromptInput> {
        match Text::new(message.trim_end()).prompt() {
            Ok(line) => Ok(PromptInput::Line(line)),
            Err(InquireError::OperationInterrupted | InquireError::OperationCanceled) => {
                Ok(PromptInput::Interrupted)
            }
            Err(e) => Err(e).context("Failed to read input"),
        }
    }
}

/// Plain line reader, used when stdin is not a terminal.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, message: &str) -> Result<PromptInput> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(PromptInput::Eof);
        }

        Ok(PromptInput::Line(
            line.trim_end_matches(['\r', '\n']).to_string(),
        ))
    }
}
