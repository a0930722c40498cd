// Gitstr Auth: Prompt read loop

use super::PromptError;

/// Reads one raw line from the user.
///
/// Implementations handle display only: `default` pre-fills the edit buffer
/// (ignored when `masked`), and masked input must never be echoed in clear.
/// The returned line carries no trailing newline and is otherwise untouched.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str, default: &str, masked: bool)
        -> Result<String, PromptError>;
}

impl<R: LineReader + ?Sized> LineReader for &mut R {
    fn read_line(
        &mut self,
        prompt: &str,
        default: &str,
        masked: bool,
    ) -> Result<String, PromptError> {
        (**self).read_line(prompt, default, masked)
    }
}

/// Retry predicate: `true` rejects the answer and prompts again, `false`
/// accepts it. It may record classification results for the caller to
/// inspect once the loop returns, and must not do anything else.
type ShouldRetry<'a> = Box<dyn FnMut(&str) -> bool + 'a>;

/// One prompt session: message, pre-filled default, masking, and an
/// optional acceptance predicate. Consumed by `interact`.
pub struct Prompt<'a> {
    message: &'a str,
    default: &'a str,
    masked: bool,
    should_retry: Option<ShouldRetry<'a>>,
}

impl<'a> Prompt<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            default: "",
            masked: false,
            should_retry: None,
        }
    }

    pub fn with_default(mut self, default: &'a str) -> Self {
        self.default = default;
        self
    }

    /// Mask typed characters. Masked answers are returned verbatim: no
    /// trimming and no case folding.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn retry_while(mut self, should_retry: impl FnMut(&str) -> bool + 'a) -> Self {
        self.should_retry = Some(Box::new(should_retry));
        self
    }

    /// Read until the predicate accepts an answer. Errors from the reader end
    /// the loop immediately.
    pub fn interact<R: LineReader + ?Sized>(mut self, reader: &mut R) -> Result<String, PromptError> {
        let default = if self.masked { "" } else { self.default };
        loop {
            let raw = reader.read_line(self.message, default, self.masked)?;
            let answer = if self.masked {
                raw
            } else {
                raw.trim().to_lowercase()
            };

            if let Some(should_retry) = self.should_retry.as_mut() {
                if should_retry(&answer) {
                    tracing::debug!(prompt = self.message, "answer rejected, asking again");
                    continue;
                }
            }
            return Ok(answer);
        }
    }
}

/// Ask an unmasked question; the answer is trimmed and lowercased.
pub fn ask<R: LineReader + ?Sized>(
    reader: &mut R,
    message: &str,
    default: &str,
    should_retry: impl FnMut(&str) -> bool,
) -> Result<String, PromptError> {
    Prompt::new(message)
        .with_default(default)
        .retry_while(should_retry)
        .interact(reader)
}

/// Ask for a masked value such as a passphrase.
pub fn ask_secret<R: LineReader + ?Sized>(
    reader: &mut R,
    message: &str,
    should_retry: impl FnMut(&str) -> bool,
) -> Result<String, PromptError> {
    Prompt::new(message)
        .masked()
        .retry_while(should_retry)
        .interact(reader)
}

/// Yes/no question. Re-asks until one of `y`, `yes`, `n`, `no` is typed.
pub fn confirm<R: LineReader + ?Sized>(reader: &mut R, message: &str) -> Result<bool, PromptError> {
    let question = format!("{}(y/n) ", message);
    let mut accepted = false;
    ask(reader, &question, "", |answer| match answer {
        "y" | "yes" => {
            accepted = true;
            false
        }
        "n" | "no" => {
            accepted = false;
            false
        }
        _ => true,
    })?;
    Ok(accepted)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::mock::ScriptedReader;

    #[test]
    fn test_answer_is_trimmed_and_lowercased() {
        let mut reader = ScriptedReader::new(["  Hello World \t"]);
        let answer = Prompt::new("say: ").interact(&mut reader).unwrap();
        assert_eq!(answer, "hello world");
    }

    #[test]
    fn test_masked_answer_is_verbatim() {
        let mut reader = ScriptedReader::new([" PassWord "]);
        let answer = ask_secret(&mut reader, "password: ", |_| false).unwrap();
        assert_eq!(answer, " PassWord ", "Passphrases must not be normalized");
        assert!(reader.calls()[0].masked);
    }

    #[test]
    fn test_no_predicate_accepts_first_answer() {
        let mut reader = ScriptedReader::new(["", "second"]);
        let answer = Prompt::new("q: ").interact(&mut reader).unwrap();
        assert_eq!(answer, "");
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn test_retry_until_predicate_accepts() {
        let mut reader = ScriptedReader::new(["bad", "worse", "good"]);
        let mut seen = Vec::new();
        let answer = ask(&mut reader, "q: ", "", |a| {
            seen.push(a.to_string());
            a != "good"
        })
        .unwrap();

        assert_eq!(answer, "good");
        assert_eq!(seen, vec!["bad", "worse", "good"]);
    }

    #[test]
    fn test_never_returns_a_rejected_answer() {
        let mut reader = ScriptedReader::new(["x", "x", "x"]);
        let result = ask(&mut reader, "q: ", "", |_| true);
        assert!(
            matches!(result, Err(PromptError::Closed)),
            "An always-rejecting predicate may only end with an error"
        );
    }

    #[test]
    fn test_interrupt_stops_loop_immediately() {
        let mut reader = ScriptedReader::from_results(vec![
            Ok("nope".to_string()),
            Err(PromptError::Interrupted),
            Ok("never read".to_string()),
        ]);
        let result = ask(&mut reader, "q: ", "", |a| a == "nope");
        assert!(matches!(result, Err(PromptError::Interrupted)));
        assert_eq!(reader.remaining(), 1, "No reads after the interrupt");
    }

    #[test]
    fn test_default_passed_only_when_unmasked() {
        let mut reader = ScriptedReader::new(["a", "b"]);
        Prompt::new("q: ")
            .with_default("prefill")
            .interact(&mut reader)
            .unwrap();
        Prompt::new("p: ")
            .with_default("prefill")
            .masked()
            .interact(&mut reader)
            .unwrap();

        let calls = reader.calls();
        assert_eq!(calls[0].default, "prefill");
        assert_eq!(calls[1].default, "", "Masked prompts never pre-fill");
    }

    #[test]
    fn test_confirm_yes_and_no() {
        let mut reader = ScriptedReader::new(["YES"]);
        assert!(confirm(&mut reader, "store? ").unwrap());

        let mut reader = ScriptedReader::new(["maybe", "n"]);
        assert!(!confirm(&mut reader, "store? ").unwrap());
        assert_eq!(reader.calls().len(), 2, "Unrecognized answers re-prompt");
        assert_eq!(reader.calls()[0].prompt, "store? (y/n) ");
    }
}
