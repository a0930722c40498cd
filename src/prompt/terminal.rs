// Gitstr Auth: Terminal line reader
//
// Interactive terminals get a line editor (dialoguer) with the default value
// pre-filled, or a raw key loop that echoes one mask glyph per character for
// secrets. When stdin is piped, lines are read plainly and end of input is
// reported as `PromptError::Closed`.

use std::io::{self, BufRead, IsTerminal, Write};

use console::{style, Key, Term};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Input;

use super::{LineReader, PromptError};

/// Presentation settings. None of these affect what answers are accepted.
#[derive(Debug, Clone)]
pub struct PromptTheme {
    pub colored: bool,
    pub mask: char,
    pub interrupt_label: String,
}

impl Default for PromptTheme {
    fn default() -> Self {
        Self {
            colored: true,
            mask: '*',
            interrupt_label: "^C".to_string(),
        }
    }
}

/// True when stdin is not attached to a terminal.
pub fn is_piped() -> bool {
    !io::stdin().is_terminal()
}

pub struct TerminalReader {
    theme: PromptTheme,
    term: Term,
}

impl TerminalReader {
    pub fn new(theme: PromptTheme) -> Self {
        Self {
            theme,
            term: Term::stderr(),
        }
    }

    fn styled(&self, prompt: &str) -> String {
        if self.theme.colored {
            style(prompt).yellow().to_string()
        } else {
            prompt.to_string()
        }
    }

    fn read_edited(&self, prompt: &str, default: &str) -> Result<String, PromptError> {
        let colorful = ColorfulTheme::default();
        let theme: &dyn Theme = if self.theme.colored {
            &colorful
        } else {
            &SimpleTheme
        };

        let result = Input::<String>::with_theme(theme)
            .with_prompt(prompt.trim_end().trim_end_matches(':'))
            .with_initial_text(default)
            .allow_empty(true)
            .report(false)
            .interact_text_on(&self.term);

        match result {
            Ok(line) => Ok(line),
            Err(dialoguer::Error::IO(err)) => Err(self.interrupted_or(err)),
        }
    }

    fn read_masked(&self, prompt: &str) -> Result<String, PromptError> {
        self.term.write_str(&self.styled(prompt))?;

        let mut buf = String::new();
        loop {
            let key = match self.term.read_key() {
                Ok(key) => key,
                Err(err) => return Err(self.interrupted_or(err)),
            };
            match key {
                Key::Enter => break,
                Key::Backspace => {
                    if buf.pop().is_some() {
                        self.term.clear_chars(1)?;
                    }
                }
                Key::Char('\u{3}') => {
                    return Err(self.interrupted_or(io::ErrorKind::Interrupted.into()));
                }
                Key::Char(c) if !c.is_control() => {
                    buf.push(c);
                    let mut glyph = [0u8; 4];
                    self.term.write_str(self.theme.mask.encode_utf8(&mut glyph))?;
                }
                _ => {}
            }
        }
        self.term.write_line("")?;
        Ok(buf)
    }

    fn read_piped(&self, prompt: &str) -> Result<String, PromptError> {
        let mut stderr = io::stderr();
        write!(stderr, "{}", self.styled(prompt))?;
        stderr.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Map a read error, echoing the interrupt label when the user aborted.
    fn interrupted_or(&self, err: io::Error) -> PromptError {
        let err = PromptError::from(err);
        if matches!(err, PromptError::Interrupted) {
            let _ = self.term.write_line(&self.theme.interrupt_label);
        }
        err
    }
}

impl Default for TerminalReader {
    fn default() -> Self {
        Self::new(PromptTheme::default())
    }
}

impl LineReader for TerminalReader {
    fn read_line(
        &mut self,
        prompt: &str,
        default: &str,
        masked: bool,
    ) -> Result<String, PromptError> {
        if is_piped() {
            return self.read_piped(prompt);
        }
        if masked {
            self.read_masked(prompt)
        } else {
            self.read_edited(prompt, default)
        }
    }
}
