//! Constraint model for word queries
//!
//! A [`ConstraintSet`] is the validated aggregate query the engine evaluates.
//! It is built once per query from the raw user-declared constraints and is
//! read-only afterwards. All cross-cutting derivations happen here, at
//! construction time, rather than mid-pipeline:
//!
//! - occurrences pinned by exact positions count toward a letter's minimum;
//! - a letter with prohibited positions must still appear somewhere, so it is
//!   folded into the minimum counts with a floor of 1 unless an exact position
//!   already guarantees its presence (the presence-floor rule);
//! - an excluded letter's ceiling is the total its positive constraints
//!   already require, 0 when there are none ("excluded unless otherwise
//!   required", not "excluded no matter what");
//! - the accent allow-list is every letter named by a minimum count or an
//!   exact position.

use ahash::RandomState;
use hashbrown::{HashMap, HashSet};
use thiserror::Error;

/// Mapping keyed by canonical (lower-cased, unaccented) letters.
pub type LetterMap<V> = HashMap<char, V, RandomState>;
/// Set of canonical letters.
pub type LetterSet = HashSet<char, RandomState>;
/// Set of zero-based positions within a word.
pub type PositionSet = HashSet<usize, RandomState>;

/// Errors raised while translating user input into constraints.
///
/// All of these surface at construction time; evaluation itself is total and
/// never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A position token is not a positive integer.
    #[error("invalid position '{0}': expected a positive integer")]
    InvalidPosition(String),

    /// A position-letter token is malformed (missing letter, empty string).
    #[error("invalid position-letter pair '{0}'")]
    InvalidPair(String),

    /// Reserved for a future strict mode (e.g. a minimum count exceeding the
    /// word length). Current policy is lenient: such queries simply yield an
    /// empty result.
    #[error("conflicting constraints: {0}")]
    ConflictingConstraint(String),
}

/// How to treat accented glyphs in candidate words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccentPolicy {
    /// Accented words pass through untouched.
    #[default]
    Allow,
    /// Accented words are dropped, except where the accented letter's base
    /// form was explicitly requested.
    Forbid,
}

/// The validated, immutable query evaluated by the engine.
///
/// Construct through [`ConstraintSetBuilder`]; the derived fields
/// (`maximum_counts`, the accent allow-list) are never set directly.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    length: Option<usize>,
    exact_positions: Vec<(usize, char)>,
    minimum_counts: LetterMap<usize>,
    maximum_counts: LetterMap<usize>,
    prohibited_positions: LetterMap<PositionSet>,
    accent_policy: AccentPolicy,
    allowed_accent_bases: LetterSet,
}

impl ConstraintSet {
    /// Exact word length required, if any.
    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// Required letters at zero-based positions.
    pub fn exact_positions(&self) -> &[(usize, char)] {
        &self.exact_positions
    }

    /// Minimum occurrence count per letter, variants included. Normalized:
    /// occurrences pinned by exact positions are already counted in.
    pub fn minimum_counts(&self) -> &LetterMap<usize> {
        &self.minimum_counts
    }

    /// Derived occurrence ceiling per explicitly excluded letter.
    pub fn maximum_counts(&self) -> &LetterMap<usize> {
        &self.maximum_counts
    }

    /// Zero-based positions each letter is barred from.
    pub fn prohibited_positions(&self) -> &LetterMap<PositionSet> {
        &self.prohibited_positions
    }

    pub fn accent_policy(&self) -> AccentPolicy {
        self.accent_policy
    }

    /// Base letters whose accented forms are tolerated under
    /// [`AccentPolicy::Forbid`].
    pub fn allowed_accent_bases(&self) -> &LetterSet {
        &self.allowed_accent_bases
    }

    /// True if no constraint is active (evaluation returns the input as-is).
    pub fn is_empty(&self) -> bool {
        self.length.is_none()
            && self.exact_positions.is_empty()
            && self.minimum_counts.is_empty()
            && self.maximum_counts.is_empty()
            && self.prohibited_positions.is_empty()
            && self.accent_policy == AccentPolicy::Allow
    }
}

/// Builder collecting raw user-declared constraints.
///
/// Letters are lower-cased on entry; positions are zero-based. A base vowel
/// matches both its plain and accented forms during evaluation, while an
/// accented letter names its variant alone and matches only itself. `build`
/// performs the derivations documented on [`ConstraintSet`].
#[derive(Debug, Clone, Default)]
pub struct ConstraintSetBuilder {
    length: Option<usize>,
    contains: Vec<char>,
    excluded: Vec<char>,
    exact: Vec<(usize, char)>,
    prohibited: Vec<(usize, char)>,
    accent_policy: AccentPolicy,
}

impl ConstraintSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact word length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Require one more occurrence of `letter` (repeat to raise the minimum).
    pub fn contain(mut self, letter: char) -> Self {
        self.contains.push(canonical(letter));
        self
    }

    /// Exclude `letter` beyond whatever the positive constraints require.
    pub fn exclude(mut self, letter: char) -> Self {
        self.excluded.push(canonical(letter));
        self
    }

    /// Require `letter` at the zero-based `position`.
    pub fn exact(mut self, position: usize, letter: char) -> Self {
        self.exact.push((position, canonical(letter)));
        self
    }

    /// Bar `letter` from the zero-based `position` while still requiring it
    /// somewhere in the word.
    pub fn prohibit(mut self, position: usize, letter: char) -> Self {
        self.prohibited.push((position, canonical(letter)));
        self
    }

    pub fn accent_policy(mut self, policy: AccentPolicy) -> Self {
        self.accent_policy = policy;
        self
    }

    /// Derive the immutable constraint set.
    pub fn build(self) -> ConstraintSet {
        let mut exact_counts: LetterMap<usize> = LetterMap::default();
        for &(_, letter) in &self.exact {
            *exact_counts.entry(letter).or_insert(0) += 1;
        }

        // Occurrences pinned by exact positions count toward the minimum, so
        // minimum_counts[l] >= exact-pinned count of l always holds.
        let mut minimum_counts: LetterMap<usize> = LetterMap::default();
        for &letter in &self.contains {
            *minimum_counts.entry(letter).or_insert(0) += 1;
        }
        for (&letter, &pinned) in &exact_counts {
            *minimum_counts.entry(letter).or_insert(0) += pinned;
        }

        let mut prohibited_positions: LetterMap<PositionSet> = LetterMap::default();
        for &(position, letter) in &self.prohibited {
            prohibited_positions
                .entry(letter)
                .or_default()
                .insert(position);
        }

        // Presence-floor rule: a letter barred from positions must still
        // appear somewhere, unless an exact position already guarantees it.
        for &letter in prohibited_positions.keys() {
            if !exact_counts.contains_key(&letter) {
                let minimum = minimum_counts.entry(letter).or_insert(0);
                if *minimum < 1 {
                    *minimum = 1;
                }
            }
        }

        // Ceiling for an excluded letter: the total its positive constraints
        // already require, 0 when there are none.
        let mut maximum_counts: LetterMap<usize> = LetterMap::default();
        for &letter in &self.excluded {
            let ceiling = minimum_counts.get(&letter).copied().unwrap_or(0);
            maximum_counts.insert(letter, ceiling);
        }

        let allowed_accent_bases: LetterSet = minimum_counts
            .keys()
            .copied()
            .chain(exact_counts.keys().copied())
            .collect();

        ConstraintSet {
            length: self.length,
            exact_positions: self.exact,
            minimum_counts,
            maximum_counts,
            prohibited_positions,
            accent_policy: self.accent_policy,
            allowed_accent_bases,
        }
    }
}

#[inline]
fn canonical(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_yields_empty_set() {
        let set = ConstraintSetBuilder::new().build();
        assert!(set.is_empty());
    }

    #[test]
    fn test_minimum_includes_exact_pinned_occurrences() {
        let set = ConstraintSetBuilder::new()
            .contain('r')
            .exact(0, 'r')
            .build();
        assert_eq!(set.minimum_counts().get(&'r'), Some(&2));
    }

    #[test]
    fn test_exact_only_letter_gets_minimum_entry() {
        let set = ConstraintSetBuilder::new().exact(2, 'p').build();
        assert_eq!(set.minimum_counts().get(&'p'), Some(&1));
    }

    #[test]
    fn test_prohibited_letter_floored_to_one() {
        let set = ConstraintSetBuilder::new().prohibit(2, 'a').build();
        assert_eq!(set.minimum_counts().get(&'a'), Some(&1));
    }

    #[test]
    fn test_prohibited_floor_skipped_when_exact_guarantees_presence() {
        let set = ConstraintSetBuilder::new()
            .exact(0, 'a')
            .prohibit(2, 'a')
            .build();
        // Only the exact-pinned occurrence, no extra floor.
        assert_eq!(set.minimum_counts().get(&'a'), Some(&1));
    }

    #[test]
    fn test_prohibited_floor_does_not_lower_explicit_minimum() {
        let set = ConstraintSetBuilder::new()
            .contain('a')
            .contain('a')
            .prohibit(2, 'a')
            .build();
        assert_eq!(set.minimum_counts().get(&'a'), Some(&2));
    }

    #[test]
    fn test_excluded_letter_ceiling_defaults_to_zero() {
        let set = ConstraintSetBuilder::new().exclude('z').build();
        assert_eq!(set.maximum_counts().get(&'z'), Some(&0));
    }

    #[test]
    fn test_excluded_letter_ceiling_nets_required_occurrences() {
        // "contains exactly one a": required once, excluded beyond that.
        let set = ConstraintSetBuilder::new()
            .contain('a')
            .exclude('a')
            .build();
        assert_eq!(set.maximum_counts().get(&'a'), Some(&1));
    }

    #[test]
    fn test_excluded_letter_ceiling_counts_exact_positions() {
        let set = ConstraintSetBuilder::new()
            .exact(0, 'a')
            .exact(3, 'a')
            .exclude('a')
            .build();
        assert_eq!(set.maximum_counts().get(&'a'), Some(&2));
    }

    #[test]
    fn test_accent_allow_list_covers_positive_constraints() {
        let set = ConstraintSetBuilder::new()
            .contain('a')
            .exact(1, 'e')
            .prohibit(0, 'i')
            .build();
        let allowed = set.allowed_accent_bases();
        assert!(allowed.contains(&'a'));
        assert!(allowed.contains(&'e'));
        // Folded into minimums by the presence-floor rule, so tolerated too.
        assert!(allowed.contains(&'i'));
        assert!(!allowed.contains(&'o'));
    }

    #[test]
    fn test_letters_are_lowercased_on_entry() {
        let set = ConstraintSetBuilder::new().contain('A').exact(0, 'P').build();
        assert!(set.minimum_counts().contains_key(&'a'));
        assert_eq!(set.exact_positions(), &[(0, 'p')]);
    }
}
