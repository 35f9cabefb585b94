//! # Wordle Sieve
//!
//! Filter a dictionary of words against the deductions of a Wordle-style
//! guessing game.
//!
//! ## Features
//!
//! - **Length filtering**: Keep only words of a known length
//! - **Exact positions**: Letters known to sit at specific slots
//! - **Contained letters**: Letters known present, with minimum counts
//! - **Excluded letters**: Letters known absent, beyond occurrences the
//!   other constraints already require
//! - **Prohibited positions**: Letters known present but barred from slots
//! - **Accent tolerance**: Spanish vowel-accent pairs (a/á .. u/ú) compare
//!   equal, with an opt-in policy to drop accented words unless requested
//!
//! ## Usage
//!
//! ```bash
//! # Five-letter words with p first, two r's, and no d
//! wordle-sieve -i spanish.txt -l 5 -e 1p -c r,r -n d
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordle_sieve::{evaluate, ConstraintSetBuilder};
//!
//! let words: Vec<String> = ["perro", "perra", "pedro", "poder"]
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//!
//! let constraints = ConstraintSetBuilder::new()
//!     .length(5)
//!     .exact(0, 'p')
//!     .contain('r')
//!     .contain('r')
//!     .build();
//!
//! assert_eq!(evaluate(&words, &constraints), vec!["perro", "perra"]);
//! ```

pub mod accents;
pub mod cli;
pub mod constraints;
pub mod engine;
pub mod output;
pub mod report;
pub mod wordlist;

pub use constraints::{AccentPolicy, ConstraintSet, ConstraintSetBuilder, QueryError};
pub use engine::evaluate;
