use std::collections::VecDeque;
use std::io::{BufRead, Write};

use ratatui::crossterm::cursor::MoveTo;
use ratatui::crossterm::execute;
use ratatui::crossterm::style::Stylize;
use ratatui::crossterm::terminal::{Clear, ClearType};
use tracing::debug;

use crate::error::QuizError;

/// Line-oriented terminal the session talks to.
pub trait Console {
    /// Next whitespace-separated token typed by the student.
    fn read_token(&mut self) -> Result<String, QuizError>;
    fn line(&mut self, text: &str) -> Result<(), QuizError>;
    fn heading(&mut self, text: &str) -> Result<(), QuizError>;
    /// Writes `text` without a line break and flushes.
    fn prompt(&mut self, text: &str) -> Result<(), QuizError>;
    fn clear(&mut self) -> Result<(), QuizError>;

    fn ask(&mut self, text: &str) -> Result<String, QuizError> {
        self.prompt(text)?;
        self.read_token()
    }
}

pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
    clear_screen: bool,
    styled: bool,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
            clear_screen: false,
            styled: false,
        }
    }

    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn with_styling(mut self, enabled: bool) -> Self {
        self.styled = enabled;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_token(&mut self) -> Result<String, QuizError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Err(QuizError::InputClosed);
            }
            self.pending
                .extend(buf.split_whitespace().map(|s| s.to_string()));
        }
    }

    fn line(&mut self, text: &str) -> Result<(), QuizError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    fn heading(&mut self, text: &str) -> Result<(), QuizError> {
        if self.styled {
            writeln!(self.writer, "{}", text.bold().cyan())?;
        } else {
            writeln!(self.writer, "{}", text)?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), QuizError> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), QuizError> {
        if self.clear_screen {
            execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Presentation hook fired after every graded answer.
pub trait Notifier {
    fn notify(&mut self, success: bool);
}

pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&mut self, _success: bool) {}
}

/// Rings the terminal bell on correct answers.
pub struct BellNotifier<W: Write> {
    writer: W,
}

impl<W: Write> BellNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Notifier for BellNotifier<W> {
    fn notify(&mut self, success: bool) {
        if success {
            if let Err(e) = self.writer.write_all(b"\x07").and_then(|_| self.writer.flush()) {
                debug!(error = %e, "terminal bell failed");
            }
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, success: bool) {
        (**self).notify(success);
    }
}
