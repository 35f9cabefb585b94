//! Command-line interface definition for wordle-sieve
//!
//! Translates the flag-based surface syntax into a validated
//! [`ConstraintSet`]. Positions are 1-based on the surface and converted to
//! 0-based internally. Malformed tokens are skipped with a warning rather
//! than aborting the whole query.

use clap::{Parser, ValueEnum};
use log::warn;
use std::path::PathBuf;

use crate::constraints::{AccentPolicy, ConstraintSet, ConstraintSetBuilder, QueryError};

/// Wordle-style dictionary filter
///
/// Deduce candidate words from known letters, positions, and accent rules.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordle-sieve",
    version,
    about = "Wordle-style dictionary filter",
    long_about = r#"
Filter a word list against the deductions of a Wordle-style game: known
correct letters and positions, letters known present but misplaced, letters
known absent, word length, and accent tolerance.

EXAMPLES:
    # Five-letter words starting with p
    wordle-sieve -i spanish.txt -l 5 -e 1p

    # ...containing two r's, without d
    wordle-sieve -i spanish.txt -l 5 -e 1p -c r,r -n d

    # r is in the word but not at positions 2 or 3
    wordle-sieve -i spanish.txt -l 5 -p 2r,3r

    # Drop accented words unless their letter was requested
    wordle-sieve -i spanish.txt -l 5 -c a --accents forbid

PAIR SYNTAX:
    Position-letter pairs are 1-based: '1p' means p in the first slot.
    Pairs are comma-separated; malformed pairs are skipped with a warning.
"#
)]
pub struct Args {
    /// Word list file, one word per line
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Required word length
    #[arg(short, long, value_name = "LEN")]
    pub length: Option<usize>,

    /// Letters the word must contain, comma-separated; repeat a letter to
    /// require multiple occurrences (e.g. r,r)
    #[arg(short, long, value_name = "LETTERS")]
    pub contains: Option<String>,

    /// Letters the word must NOT contain beyond what other constraints
    /// require, comma-separated
    #[arg(short = 'n', long, value_name = "LETTERS")]
    pub not_contains: Option<String>,

    /// Known positions as 1-based 'positionletter' pairs (e.g. 1p,3r)
    #[arg(short, long, value_name = "PAIRS")]
    pub exact: Option<String>,

    /// Letters known present but barred from positions, same pair syntax
    /// (e.g. 2a,3a)
    #[arg(short = 'p', long, value_name = "PAIRS")]
    pub prohibited: Option<String>,

    /// Accent handling for candidate words
    #[arg(long, value_enum, default_value_t = AccentMode::Allow)]
    pub accents: AccentMode,

    /// Output file (default: print to console)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Quiet mode - words only, no summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Accent handling choices on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccentMode {
    /// Keep accented words
    Allow,
    /// Drop accented words unless the letter was requested
    Forbid,
}

impl From<AccentMode> for AccentPolicy {
    fn from(mode: AccentMode) -> Self {
        match mode {
            AccentMode::Allow => AccentPolicy::Allow,
            AccentMode::Forbid => AccentPolicy::Forbid,
        }
    }
}

impl Args {
    /// Build the constraint set from the parsed flags.
    pub fn to_constraint_set(&self) -> ConstraintSet {
        let mut builder = ConstraintSetBuilder::new().accent_policy(self.accents.into());

        if let Some(length) = self.length {
            builder = builder.length(length);
        }
        for letter in parse_letters(self.contains.as_deref().unwrap_or("")) {
            builder = builder.contain(letter);
        }
        for letter in parse_letters(self.not_contains.as_deref().unwrap_or("")) {
            builder = builder.exclude(letter);
        }
        for (position, letter) in parse_pairs(self.exact.as_deref().unwrap_or("")) {
            builder = builder.exact(position, letter);
        }
        for (position, letter) in parse_pairs(self.prohibited.as_deref().unwrap_or("")) {
            builder = builder.prohibit(position, letter);
        }

        builder.build()
    }

    /// True if any filtering flag was given.
    pub fn has_constraints(&self) -> bool {
        self.length.is_some()
            || self.contains.is_some()
            || self.not_contains.is_some()
            || self.exact.is_some()
            || self.prohibited.is_some()
            || self.accents == AccentMode::Forbid
    }
}

/// Parse a comma-separated letter list, skipping malformed tokens.
pub fn parse_letters(letters_str: &str) -> Vec<char> {
    let mut letters = Vec::new();

    for token in letters_str.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => letters.push(letter),
            _ => warn!("skipping letter token '{}': expected a single letter", token),
        }
    }

    letters
}

/// Parse a single 1-based 'positionletter' token into a 0-based pair.
pub fn parse_pair(token: &str) -> Result<(usize, char), QueryError> {
    let letter = token
        .chars()
        .last()
        .ok_or_else(|| QueryError::InvalidPair(token.to_string()))?;

    if !letter.is_alphabetic() {
        return Err(QueryError::InvalidPair(token.to_string()));
    }

    let position_part = &token[..token.len() - letter.len_utf8()];
    if position_part.is_empty() {
        return Err(QueryError::InvalidPair(token.to_string()));
    }

    let position: usize = position_part
        .parse()
        .map_err(|_| QueryError::InvalidPosition(position_part.to_string()))?;
    if position == 0 {
        return Err(QueryError::InvalidPosition(position_part.to_string()));
    }

    Ok((position - 1, letter))
}

/// Parse a comma-separated pair list, skipping malformed tokens.
pub fn parse_pairs(pairs_str: &str) -> Vec<(usize, char)> {
    let mut pairs = Vec::new();

    for token in pairs_str.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match parse_pair(token) {
            Ok(pair) => pairs.push(pair),
            Err(e) => warn!("skipping pair token '{}': {}", token, e),
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters() {
        assert_eq!(parse_letters("a,d,e"), vec!['a', 'd', 'e']);
    }

    #[test]
    fn test_parse_letters_keeps_duplicates() {
        assert_eq!(parse_letters("r,r"), vec!['r', 'r']);
    }

    #[test]
    fn test_parse_letters_skips_empty_and_long_tokens() {
        assert_eq!(parse_letters("a,,bc, d ,"), vec!['a', 'd']);
    }

    #[test]
    fn test_parse_pair_converts_to_zero_based() {
        assert_eq!(parse_pair("2f"), Ok((1, 'f')));
        assert_eq!(parse_pair("12a"), Ok((11, 'a')));
    }

    #[test]
    fn test_parse_pair_accepts_accented_letter() {
        assert_eq!(parse_pair("1á"), Ok((0, 'á')));
    }

    #[test]
    fn test_parse_pair_rejects_position_zero() {
        assert_eq!(
            parse_pair("0a"),
            Err(QueryError::InvalidPosition("0".to_string()))
        );
    }

    #[test]
    fn test_parse_pair_rejects_non_numeric_position() {
        assert_eq!(
            parse_pair("xa"),
            Err(QueryError::InvalidPosition("x".to_string()))
        );
    }

    #[test]
    fn test_parse_pair_rejects_missing_letter() {
        assert_eq!(
            parse_pair("12"),
            Err(QueryError::InvalidPair("12".to_string()))
        );
    }

    #[test]
    fn test_parse_pair_rejects_bare_letter() {
        assert_eq!(
            parse_pair("a"),
            Err(QueryError::InvalidPair("a".to_string()))
        );
    }

    #[test]
    fn test_parse_pairs_skips_malformed_tokens() {
        assert_eq!(parse_pairs("2f,bad,4a,"), vec![(1, 'f'), (3, 'a')]);
    }

    fn args_with(f: impl FnOnce(&mut Args)) -> Args {
        let mut args = Args {
            input: PathBuf::from("words.txt"),
            length: None,
            contains: None,
            not_contains: None,
            exact: None,
            prohibited: None,
            accents: AccentMode::Allow,
            output: None,
            quiet: false,
            verbose: false,
        };
        f(&mut args);
        args
    }

    #[test]
    fn test_to_constraint_set_wires_all_flags() {
        let args = args_with(|a| {
            a.length = Some(5);
            a.contains = Some("r,r".to_string());
            a.not_contains = Some("z".to_string());
            a.exact = Some("1p".to_string());
            a.prohibited = Some("3a".to_string());
            a.accents = AccentMode::Forbid;
        });

        let set = args.to_constraint_set();
        assert_eq!(set.length(), Some(5));
        assert_eq!(set.minimum_counts().get(&'r'), Some(&2));
        assert_eq!(set.maximum_counts().get(&'z'), Some(&0));
        assert_eq!(set.exact_positions(), &[(0, 'p')]);
        assert!(set.prohibited_positions()[&'a'].contains(&2));
    }

    #[test]
    fn test_no_flags_yields_empty_constraint_set() {
        let args = args_with(|_| {});
        assert!(!args.has_constraints());
        assert!(args.to_constraint_set().is_empty());
    }
}
