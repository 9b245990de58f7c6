//! Where interactive answers come from.
//!
//! A terminal gets a rustyline editor with line editing and in-session
//! history; piped stdin and tests read plain lines from any `BufRead`.

use ergo_assist::intake::IntakeError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, Write};

pub(crate) trait LineSource {
    /// Shows `prompt` and reads one line.
    ///
    /// Returns `Ok(None)` at end of input; `field` names the question for
    /// error reporting.
    fn read_line(
        &mut self,
        field: &'static str,
        prompt: &str,
        echo: &mut dyn Write,
    ) -> Result<Option<String>, IntakeError>;
}

/// Plain lines from a reader, with the prompt written to `echo`.
pub(crate) struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn read_line(
        &mut self,
        _field: &'static str,
        prompt: &str,
        echo: &mut dyn Write,
    ) -> Result<Option<String>, IntakeError> {
        write!(echo, "{prompt}")?;
        echo.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Interactive terminal input. rustyline draws the prompt itself.
pub(crate) struct TerminalLines {
    editor: DefaultEditor,
}

impl TerminalLines {
    pub(crate) fn new() -> Result<Self, IntakeError> {
        let editor = DefaultEditor::new().map_err(terminal_error)?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalLines {
    fn read_line(
        &mut self,
        field: &'static str,
        prompt: &str,
        _echo: &mut dyn Write,
    ) -> Result<Option<String>, IntakeError> {
        let line = readline_answer(self.editor.readline(prompt), field)?;
        if let Some(answer) = line.as_deref().map(str::trim) {
            if !answer.is_empty() {
                let _ = self.editor.add_history_entry(answer);
            }
        }
        Ok(line)
    }
}

/// Ctrl-D ends input like a closed pipe; Ctrl-C aborts the questionnaire.
fn readline_answer(
    result: Result<String, ReadlineError>,
    field: &'static str,
) -> Result<Option<String>, IntakeError> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Eof) => Ok(None),
        Err(ReadlineError::Interrupted) => Err(IntakeError::Interrupted { field }),
        Err(err) => Err(terminal_error(err)),
    }
}

fn terminal_error(err: ReadlineError) -> IntakeError {
    match err {
        ReadlineError::Io(err) => IntakeError::Io(err),
        other => IntakeError::Io(io::Error::new(io::ErrorKind::Other, other.to_string())),
    }
}
