//! Constraint evaluation engine
//!
//! A strict six-stage pipeline over an immutable word list. Order is
//! load-bearing: the accent allow-list must reflect every letter the caller
//! asked to contain (minimum counts run before the accent stage), and an
//! excluded letter's ceiling nets out the occurrences its minimums already
//! require (maximums run after minimums). Prohibited positions are
//! independent and run last.
//!
//! Evaluation is total: any successfully built [`ConstraintSet`] yields a
//! (possibly empty) list, never an error. Surviving words keep their source
//! order.

use crate::accents;
use crate::constraints::{AccentPolicy, ConstraintSet};

/// Filter `words` down to those satisfying every constraint.
///
/// Words are assumed lower-cased at ingestion. Positions beyond a word's
/// length never cause out-of-range access: a short word simply fails an
/// exact-position check, and an out-of-range prohibited position is
/// vacuously satisfied.
pub fn evaluate(words: &[String], constraints: &ConstraintSet) -> Vec<String> {
    let mut survivors: Vec<String> = words.to_vec();

    // 1. Length
    if let Some(length) = constraints.length() {
        survivors.retain(|word| word.chars().count() == length);
    }

    // 2. Exact positions
    for &(position, letter) in constraints.exact_positions() {
        survivors.retain(|word| {
            word.chars()
                .nth(position)
                .map_or(false, |glyph| accents::matches_letter(glyph, letter))
        });
    }

    // 3. Minimum counts, variants included
    for (&letter, &minimum) in constraints.minimum_counts() {
        survivors.retain(|word| accents::count_letter(word, letter) >= minimum);
    }

    // 4. Accent policy
    if constraints.accent_policy() == AccentPolicy::Forbid {
        let allowed = constraints.allowed_accent_bases();
        survivors.retain(|word| !accents::violates_accent_policy(word, allowed));
    }

    // 5. Maximum counts (derived ceilings for excluded letters)
    for (&letter, &ceiling) in constraints.maximum_counts() {
        survivors.retain(|word| accents::count_letter(word, letter) <= ceiling);
    }

    // 6. Prohibited positions
    for (&letter, positions) in constraints.prohibited_positions() {
        survivors.retain(|word| {
            !word
                .chars()
                .enumerate()
                .any(|(index, glyph)| {
                    positions.contains(&index) && accents::matches_letter(glyph, letter)
                })
        });
    }

    survivors
}
