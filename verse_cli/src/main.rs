// CLI entry point for the VerseCraft form checker.
//
// Validates a poem line by line against a poetic form and prints the
// editor-style gutter. See `config.rs` for the flags and `check.rs` for what
// each run does.
//
// Usage:
//   verse [OPTIONS] [FILE]
//     --form <ID>               Form to check against
//     --sample <ID>             Check a bundled sample poem
//     --session <FILE>          Check a saved session file
//     --export-session <PATH>   Write the poem out as a session file
//     --json                    Full report as JSON
//     --strict                  Exit 2 when any line is flagged
//
// Exit status: 0 ok, 1 error, 2 flagged lines under `--strict`.

use std::io;

use tracing_subscriber::EnvFilter;
use verse_cli::config::{usage, wants_verbose};
use verse_cli::{CliAction, CliError, parse_args, run_action};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    init_tracing(wants_verbose(&args));

    let action = match parse_args(&args) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{}", usage());
            std::process::exit(1);
        }
    };

    let now_ms = chrono::Utc::now().timestamp_millis();
    let outcome = match run_action(&action, &mut io::stdin().lock(), now_ms) {
        Ok(outcome) => outcome,
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    };

    print!("{}", outcome.output);
    if let Some(path) = &outcome.exported {
        eprintln!("Session saved to {}", path.display());
    }

    let strict = matches!(&action, CliAction::Check(config) if config.strict);
    if strict && outcome.flagged {
        std::process::exit(2);
    }
}

fn report_error(e: &CliError) {
    tracing::debug!(error = ?e, "check failed");
    eprintln!("error: {e}");
}

/// Log to stderr so stdout stays the report. `RUST_LOG` wins over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
