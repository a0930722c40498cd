// Gitstr Auth: Passphrase retry loop

use zeroize::Zeroizing;

use crate::prompt::{ask_secret, LineReader};
use crate::secret::PlainKey;

use super::{KeyDecryptor, UnlockError};

/// Passphrase attempts allowed per unlock.
pub const MAX_DECRYPT_ATTEMPTS: usize = 3;

fn attempt_prompt(attempt: usize) -> String {
    if attempt > 1 {
        format!(
            "type the password to decrypt your secret key [{}/{}]: ",
            attempt, MAX_DECRYPT_ATTEMPTS
        )
    } else {
        "type the password to decrypt your secret key: ".to_string()
    }
}

/// Prompt for the passphrase of `ncryptsec` and decrypt it.
///
/// Returns on the first successful decryption. Individual failures are not
/// reported; after `MAX_DECRYPT_ATTEMPTS` of them the result is
/// `UnlockError::Exhausted`. A prompt error (e.g. Ctrl-C) aborts at once and
/// does not use up an attempt.
pub fn decrypt_with_prompt<R, D>(
    reader: &mut R,
    decryptor: &D,
    ncryptsec: &str,
) -> Result<PlainKey, UnlockError>
where
    R: LineReader + ?Sized,
    D: KeyDecryptor + ?Sized,
{
    for attempt in 1..=MAX_DECRYPT_ATTEMPTS {
        let passphrase = Zeroizing::new(ask_secret(reader, &attempt_prompt(attempt), |_| false)?);
        match decryptor.decrypt(ncryptsec, &passphrase) {
            Ok(key) => {
                tracing::debug!(attempt, "decrypted secret key");
                return Ok(key);
            }
            Err(_) => {
                tracing::debug!(attempt, "passphrase rejected");
            }
        }
    }
    tracing::warn!(attempts = MAX_DECRYPT_ATTEMPTS, "giving up on encrypted secret key");
    Err(UnlockError::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::mock::ScriptedReader;
    use crate::prompt::PromptError;
    use crate::unlock::mock::MockDecryptor;

    const BLOB: &str = "ncryptsec1test";
    const HEX: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    #[test]
    fn test_first_attempt_success() {
        let decryptor = MockDecryptor::new("right", HEX);
        let mut reader = ScriptedReader::new(["right"]);

        let key = decrypt_with_prompt(&mut reader, &decryptor, BLOB).unwrap();
        assert_eq!(key.as_hex(), HEX);
        assert_eq!(decryptor.calls(), 1);
        assert_eq!(
            reader.calls()[0].prompt,
            "type the password to decrypt your secret key: ",
            "The first prompt carries no attempt counter"
        );
        assert!(reader.calls()[0].masked, "Passphrases must be masked");
    }

    #[test]
    fn test_second_attempt_success_stops_early() {
        let decryptor = MockDecryptor::new("right", HEX);
        let mut reader = ScriptedReader::new(["wrong", "right", "unused"]);

        let key = decrypt_with_prompt(&mut reader, &decryptor, BLOB).unwrap();
        assert_eq!(key.as_hex(), HEX);
        assert_eq!(decryptor.calls(), 2, "Decrypt must be called exactly twice");
        assert_eq!(reader.remaining(), 1);
        assert_eq!(
            reader.calls()[1].prompt,
            "type the password to decrypt your secret key [2/3]: "
        );
    }

    #[test]
    fn test_three_failures_exhaust() {
        let decryptor = MockDecryptor::new("right", HEX);
        let mut reader = ScriptedReader::new(["a", "b", "c", "right"]);

        let result = decrypt_with_prompt(&mut reader, &decryptor, BLOB);
        assert!(matches!(result, Err(UnlockError::Exhausted)));
        assert_eq!(decryptor.calls(), MAX_DECRYPT_ATTEMPTS);
        assert_eq!(reader.remaining(), 1, "No fourth prompt may be shown");
        assert_eq!(
            reader.calls()[2].prompt,
            "type the password to decrypt your secret key [3/3]: "
        );
    }

    #[test]
    fn test_passphrase_case_is_preserved() {
        let decryptor = MockDecryptor::new("CaseSensitive", HEX);
        let mut reader = ScriptedReader::new(["CaseSensitive"]);
        assert!(decrypt_with_prompt(&mut reader, &decryptor, BLOB).is_ok());
    }

    #[test]
    fn test_interrupt_propagates_without_counting() {
        let decryptor = MockDecryptor::new("right", HEX);
        let mut reader = ScriptedReader::from_results(vec![
            Ok("wrong".to_string()),
            Err(PromptError::Interrupted),
        ]);

        let result = decrypt_with_prompt(&mut reader, &decryptor, BLOB);
        assert!(matches!(
            result,
            Err(UnlockError::Prompt(PromptError::Interrupted))
        ));
        assert_eq!(decryptor.calls(), 1);
    }
}
