use crate::domain::model::Color;
use crate::domain::ports::Emitter;
use std::io::{IsTerminal, Write};

const ANSI_RESET: &str = "\x1b[0m";

/// Prints notices to stdout, colored when stdout is a terminal.
#[derive(Debug, Clone)]
pub struct ConsoleEmitter {
    quiet: bool,
    colored: bool,
}

impl ConsoleEmitter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            colored: std::io::stdout().is_terminal(),
        }
    }

    fn render(&self, text: &str, color: Option<Color>) -> String {
        match color {
            Some(color) if self.colored => format!("{}{}{}", color.ansi_code(), text, ANSI_RESET),
            _ => text.to_string(),
        }
    }

    /// The line printed for a notice, or `None` when quiet.
    fn line(&self, text: &str, color: Option<Color>) -> Option<String> {
        (!self.quiet).then(|| self.render(text, color))
    }
}

impl Emitter for ConsoleEmitter {
    fn message(&self, text: &str, color: Option<Color>) {
        tracing::debug!("notice: {}", text);
        if let Some(line) = self.line(text, color) {
            // stdout may be closed; a lost notice is not an error
            let _ = writeln!(std::io::stdout(), "{}", line);
        }
    }
}
