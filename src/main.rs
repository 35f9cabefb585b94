//! Wordle Sieve - Wordle-style dictionary filter
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordle_sieve::cli::Args;
use wordle_sieve::engine::evaluate;
use wordle_sieve::output::write_results;
use wordle_sieve::report::{print_error, print_header, print_info, print_success, print_warning, SearchStats};
use wordle_sieve::wordlist::load_words;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Validate arguments
    if !args.input.exists() {
        anyhow::bail!("Input path does not exist: {:?}", args.input);
    }
    if !args.quiet && !args.has_constraints() {
        print_warning("No constraints given - every word will match");
    }

    let constraints = args.to_constraint_set();
    if args.verbose {
        print_config(&args);
    }

    let mut stats = SearchStats::new();

    let words = load_words(&args.input)?;
    stats.words_scanned = words.len();

    let results = evaluate(&words, &constraints);
    stats.words_matched = results.len();

    write_results(&results, args.output.as_deref())?;

    if !args.quiet {
        if let Some(ref path) = args.output {
            print_success(&format!("Results saved to {:?}", path));
        }
        stats.print_summary();
    }

    Ok(())
}

/// Print configuration summary
fn print_config(args: &Args) {
    print_header("Query");

    print_info(&format!("Input:       {:?}", args.input));
    if let Some(length) = args.length {
        print_info(&format!("Length:      {}", length));
    }
    if let Some(ref contains) = args.contains {
        print_info(&format!("Contains:    {}", contains));
    }
    if let Some(ref not_contains) = args.not_contains {
        print_info(&format!("Excluded:    {}", not_contains));
    }
    if let Some(ref exact) = args.exact {
        print_info(&format!("Exact:       {}", exact));
    }
    if let Some(ref prohibited) = args.prohibited {
        print_info(&format!("Prohibited:  {}", prohibited));
    }
    print_info(&format!("Accents:     {:?}", args.accents));
}
