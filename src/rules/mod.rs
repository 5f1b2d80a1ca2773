//! Rules Module - Requirement generation per round
//!
//! Each round gets a fresh [`RequirementSet`]: basic character-class minimums
//! that grow with the round number, plus "special" rules that switch on at
//! fixed rounds.
//!
//! # API
//!
//! - `generate(round, rng)` - Build the requirement set for a round
//! - `validate(password, reqs)` - Check a candidate password (see [`validate`])
//! - `RequirementSet::listing()` - Human-readable lines for display
//!
//! # Example
//!
//! ```
//! use password_gauntlet::rules::{generate, validate};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let reqs = generate(1, &mut rng);
//! assert_eq!(reqs.min_length, 7);
//! assert!(validate("Abcdee1", &reqs).is_ok());
//! ```

mod listing;
mod validate;

pub use listing::ListingLine;
pub use validate::{validate, FailureReason};

use rand::Rng;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Minimum length before round scaling is applied.
pub const BASE_MIN_LENGTH: usize = 6;

/// First round that requires an uppercase start and a symbol end.
pub const START_END_ROUND: u32 = 3;

/// First round that forbids consecutive identical characters.
pub const NO_REPEAT_ROUND: u32 = 4;

/// The only round that requires a palindrome.
pub const PALINDROME_ROUND: u32 = 5;

/// First round with an exact digit-sum target.
pub const DIGIT_SUM_ROUND: u32 = 7;

// =============================================================================
// SPECIAL RULES (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Boolean "ridiculous" rules active for a round.
    ///
    /// The digit-sum rule carries a value and lives in
    /// [`RequirementSet::digit_sum_target`] instead.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SpecialRules: u8 {
        const START_UPPER_END_SYMBOL = 1 << 0;
        const NO_CONSECUTIVE_IDENTICAL = 1 << 1;
        const PALINDROME = 1 << 2;
    }
}

// =============================================================================
// REQUIREMENT SET
// =============================================================================

/// Complete rule configuration for one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequirementSet {
    pub min_length: usize,
    pub min_uppercase: usize,
    pub min_lowercase: usize,
    pub min_digits: usize,
    pub min_symbols: usize,
    pub rules: SpecialRules,
    /// Exact sum all digit characters must add up to, when the rule is active.
    pub digit_sum_target: Option<u32>,
}

impl RequirementSet {
    /// Sum of the four character-class minimums.
    pub fn class_total(&self) -> usize {
        self.min_uppercase
            .saturating_add(self.min_lowercase)
            .saturating_add(self.min_digits)
            .saturating_add(self.min_symbols)
    }

    pub fn start_upper_end_symbol(&self) -> bool {
        self.rules.contains(SpecialRules::START_UPPER_END_SYMBOL)
    }

    pub fn no_consecutive_identical(&self) -> bool {
        self.rules.contains(SpecialRules::NO_CONSECUTIVE_IDENTICAL)
    }

    pub fn must_be_palindrome(&self) -> bool {
        self.rules.contains(SpecialRules::PALINDROME)
    }

    /// True if any rule beyond the class minimums is active.
    pub fn has_special_rules(&self) -> bool {
        !self.rules.is_empty() || self.digit_sum_target.is_some()
    }

    /// Raise `min_length` so the class minimums always fit.
    fn clamp_length(&mut self) {
        self.min_length = self.min_length.max(self.class_total());
    }
}

// =============================================================================
// GENERATION
// =============================================================================

/// Build the requirement set for a 1-based round.
///
/// Deterministic for a given rng stream. Only rounds with a digit-sum target
/// draw from `rng`. Round 0 is treated as round 1.
pub fn generate<R: Rng + ?Sized>(round: u32, rng: &mut R) -> RequirementSet {
    let round = round.max(1);
    let r = round as usize;

    let mut reqs = RequirementSet {
        min_length: BASE_MIN_LENGTH.saturating_add(r).saturating_add(r / 2),
        min_uppercase: 1 + r / 2,
        min_lowercase: 1 + r / 2,
        min_digits: 1 + r / 3,
        min_symbols: if round > 1 { 1 + (r - 1) / 3 } else { 0 },
        rules: SpecialRules::empty(),
        digit_sum_target: None,
    };
    reqs.clamp_length();

    if round >= START_END_ROUND {
        reqs.rules |= SpecialRules::START_UPPER_END_SYMBOL;
        reqs.min_length = reqs.min_length.max(2);
        reqs.min_uppercase = reqs.min_uppercase.max(1);
        reqs.min_symbols = reqs.min_symbols.max(1);
    }

    if round >= NO_REPEAT_ROUND {
        reqs.rules |= SpecialRules::NO_CONSECUTIVE_IDENTICAL;
    }

    // Round 5 only; later rounds drop it again.
    if round == PALINDROME_ROUND {
        reqs.rules |= SpecialRules::PALINDROME;
    }

    if round >= DIGIT_SUM_ROUND {
        reqs.min_digits = reqs.min_digits.max(1);
        let spread = rng.gen_range(0..=round.saturating_mul(2));
        reqs.digit_sum_target = Some(5u32.saturating_add(round / 2).saturating_add(spread));
    }

    reqs.clamp_length();

    tracing::debug!(
        round,
        min_length = reqs.min_length,
        rules = ?reqs.rules,
        digit_sum_target = ?reqs.digit_sum_target,
        "generated requirements"
    );

    reqs
}

// =============================================================================
// TESTS
// =============================================================================
