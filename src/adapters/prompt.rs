use crate::domain::ports::Prompter;
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::validate_ipv4;
use std::io::{BufRead, BufReader, ErrorKind, Stdin, Stdout, Write};
use std::net::Ipv4Addr;
use std::sync::Mutex;

/// Line-oriented prompts over any reader/writer pair; stdin/stdout in the CLI.
pub struct TerminalPrompter<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl TerminalPrompter<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead + Send, W: Write + Send> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    fn say(&self, text: &str, newline: bool) -> Result<()> {
        let mut output = self.output.lock().unwrap_or_else(|p| p.into_inner());
        if newline {
            writeln!(output, "{}", text)?;
        } else {
            write!(output, "{}", text)?;
        }
        output.flush()?;
        Ok(())
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        self.say(prompt, false)?;
        let mut line = String::new();
        let read = self
            .input
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .read_line(&mut line)?;
        if read == 0 {
            return Err(SeedError::IoError(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead + Send, W: Write + Send> Prompter for TerminalPrompter<R, W> {
    fn confirm(&self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{} [y/N]: ", question))?;
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => self.say("Error: invalid input", true)?,
            }
        }
    }

    fn prompt_ipv4(&self, question: &str) -> Result<Ipv4Addr> {
        loop {
            let answer = self.ask(&format!("{}: ", question))?;
            match validate_ipv4("address", &answer) {
                Ok(address) => return Ok(address),
                Err(_) => self.say(&format!("Error: {} is not a valid IPv4 address", answer), true)?,
            }
        }
    }
}
