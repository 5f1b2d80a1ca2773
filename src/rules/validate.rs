//! Password validation against a [`RequirementSet`].
//!
//! Checks run in a fixed order and stop at the first failure, so the reason
//! shown to the player is always the earliest broken rule.

use thiserror::Error;

use super::RequirementSet;

/// Why a password was rejected. `Display` is the text shown to the player.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FailureReason {
    #[error("Too short (Length: {length}, Required: {required})")]
    TooShort { length: usize, required: usize },

    #[error("Not enough uppercase (Found: {found}, Required: {required})")]
    NotEnoughUppercase { found: usize, required: usize },

    #[error("Not enough lowercase (Found: {found}, Required: {required})")]
    NotEnoughLowercase { found: usize, required: usize },

    #[error("Not enough digits (Found: {found}, Required: {required})")]
    NotEnoughDigits { found: usize, required: usize },

    #[error("Not enough symbols (Found: {found}, Required: {required})")]
    NotEnoughSymbols { found: usize, required: usize },

    #[error("Must start with an uppercase letter")]
    MustStartUppercase,

    #[error("Must end with a symbol")]
    MustEndSymbol,

    #[error("Found consecutive identical characters ('{character}{character}') at position {position}")]
    ConsecutiveIdentical { position: usize, character: char },

    #[error("Password is not a palindrome")]
    NotPalindrome,

    #[error("Sum of digits is {sum}, but required sum is {target}")]
    DigitSumMismatch { sum: u32, target: u32 },

    #[error("Digit sum required, but minimum digits is 0")]
    ImpossibleDigitSumConfig,
}

/// Per-class tallies from a single pass over the password.
#[derive(Debug, Default)]
struct ClassCounts {
    upper: usize,
    lower: usize,
    digits: usize,
    symbols: usize,
    digit_sum: u32,
}

impl ClassCounts {
    fn tally(chars: &[char]) -> Self {
        let mut counts = Self::default();
        for &c in chars {
            if c.is_ascii_uppercase() {
                counts.upper += 1;
            } else if c.is_ascii_lowercase() {
                counts.lower += 1;
            } else if let Some(value) = c.to_digit(10) {
                counts.digits += 1;
                counts.digit_sum += value;
            } else if c.is_ascii_punctuation() {
                counts.symbols += 1;
            }
        }
        counts
    }
}

/// Check `password` against every active rule in `reqs`.
///
/// Pure: the same inputs always give the same result.
pub fn validate(password: &str, reqs: &RequirementSet) -> Result<(), FailureReason> {
    let chars: Vec<char> = password.chars().collect();
    let length = chars.len();

    if length < reqs.min_length {
        return Err(FailureReason::TooShort { length, required: reqs.min_length });
    }

    let counts = ClassCounts::tally(&chars);

    if counts.upper < reqs.min_uppercase {
        return Err(FailureReason::NotEnoughUppercase {
            found: counts.upper,
            required: reqs.min_uppercase,
        });
    }
    if counts.lower < reqs.min_lowercase {
        return Err(FailureReason::NotEnoughLowercase {
            found: counts.lower,
            required: reqs.min_lowercase,
        });
    }
    if counts.digits < reqs.min_digits {
        return Err(FailureReason::NotEnoughDigits {
            found: counts.digits,
            required: reqs.min_digits,
        });
    }
    if counts.symbols < reqs.min_symbols {
        return Err(FailureReason::NotEnoughSymbols {
            found: counts.symbols,
            required: reqs.min_symbols,
        });
    }

    if reqs.start_upper_end_symbol() {
        if !chars.first().is_some_and(char::is_ascii_uppercase) {
            return Err(FailureReason::MustStartUppercase);
        }
        if !chars.last().is_some_and(char::is_ascii_punctuation) {
            return Err(FailureReason::MustEndSymbol);
        }
    }

    if reqs.no_consecutive_identical() {
        if let Some(position) = chars.windows(2).position(|pair| pair[0] == pair[1]) {
            return Err(FailureReason::ConsecutiveIdentical {
                position,
                character: chars[position],
            });
        }
    }

    if reqs.must_be_palindrome() {
        let mirrored = (0..length / 2).all(|i| chars[i] == chars[length - 1 - i]);
        if !mirrored {
            return Err(FailureReason::NotPalindrome);
        }
    }

    if let Some(target) = reqs.digit_sum_target {
        if counts.digit_sum != target {
            return Err(FailureReason::DigitSumMismatch { sum: counts.digit_sum, target });
        }
        if reqs.min_digits == 0 && target != 0 {
            return Err(FailureReason::ImpossibleDigitSumConfig);
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
