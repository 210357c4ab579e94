// Command-line argument parsing.
//
// Arguments are matched by hand from `std::env::args()`, no CLI framework.
// Parsing never exits the process; it returns a `CliAction` or a
// `CliError::Usage` and leaves exit handling to `main.rs`.

use std::path::PathBuf;

use crate::{CliError, CliResult};

/// Where the poem comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
    /// A bundled sample poem by id.
    Sample(String),
    /// A saved session file.
    Session(PathBuf),
}

/// Settings for one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub input: Input,
    /// Form override. Without it, samples and sessions use their own form and
    /// plain text is free verse.
    pub form: Option<String>,
    pub json: bool,
    /// Exit non-zero when any line is flagged.
    pub strict: bool,
    /// File or directory to write a session file to.
    pub export_session: Option<PathBuf>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            input: Input::Stdin,
            form: None,
            json: false,
            strict: false,
            export_session: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Help,
    ListForms,
    ListSamples,
    Check(CheckConfig),
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> CliResult<CliAction> {
    let mut config = CheckConfig::default();
    let mut list: Option<CliAction> = None;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--form" => {
                i += 1;
                config.form = Some(value(args, i, "--form")?);
            }
            "--sample" => {
                i += 1;
                config.input = Input::Sample(value(args, i, "--sample")?);
            }
            "--session" => {
                i += 1;
                config.input = Input::Session(value(args, i, "--session")?.into());
            }
            "--export-session" => {
                i += 1;
                config.export_session = Some(value(args, i, "--export-session")?.into());
            }
            "--json" => config.json = true,
            "--strict" => config.strict = true,
            // Read by `wants_verbose` before parsing.
            "--verbose" | "-v" => {}
            "--list-forms" => list = Some(CliAction::ListForms),
            "--list-samples" => list = Some(CliAction::ListSamples),
            "--help" | "-h" => return Ok(CliAction::Help),
            "-" => config.input = Input::Stdin,
            other if other.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown argument: {other}")));
            }
            path => config.input = Input::File(path.into()),
        }
        i += 1;
    }

    Ok(list.unwrap_or(CliAction::Check(config)))
}

fn value(args: &[String], i: usize, flag: &str) -> CliResult<String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| CliError::Usage(format!("{flag} requires a value")))
}

/// Whether `--verbose` appears anywhere, checked before full parsing so
/// logging is up before anything else runs.
pub fn wants_verbose(args: &[String]) -> bool {
    args.iter().any(|a| a == "--verbose" || a == "-v")
}

pub fn usage() -> String {
    [
        "Usage: verse [OPTIONS] [FILE]",
        "",
        "Checks each line of a poem against a poetic form. Reads FILE, or stdin",
        "when FILE is omitted or '-'.",
        "",
        "Options:",
        "  --form <ID>               Form to check against (default: free_verse,",
        "                            or the sample/session form)",
        "  --sample <ID>             Check a bundled sample poem",
        "  --session <FILE>          Check the poem in a saved session file",
        "  --export-session <PATH>   Write a session file (PATH may be a directory)",
        "  --json                    Print the full report as JSON",
        "  --strict                  Exit with status 2 if any line is flagged",
        "  --list-forms              List the known forms",
        "  --list-samples            List the bundled sample poems",
        "  --verbose, -v             Debug logging on stderr",
        "  --help, -h                Show this help",
    ]
    .join("\n")
}
