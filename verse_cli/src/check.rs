// Runs a parsed `CliAction`: loads the poem, resolves the form, validates,
// and renders the result.
//
// Form resolution order: `--form`, then the sample's or session's own form,
// then free verse. Form ids are never rejected; an id the validator does not
// know is checked like free verse, with a warning logged.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use verse_prosody::{
    FormCatalog, PoemReport, PoeticForm, PoetrySession, default_catalog, gutter_rows,
    render_gutter, rule_summary, validate_poem,
};

use crate::config::{CheckConfig, CliAction, Input, usage};
use crate::CliResult;

const DEFAULT_FORM: &str = "free_verse";

/// Rendered output plus whether any line was flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub output: String,
    pub flagged: bool,
    /// Where a session file was written, if one was requested.
    pub exported: Option<PathBuf>,
}

impl CheckOutcome {
    fn text(output: String) -> Self {
        CheckOutcome {
            output,
            flagged: false,
            exported: None,
        }
    }
}

/// JSON output shape for `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    form_name: Option<&'a str>,
    rule_summary: &'static str,
    report: &'a PoemReport,
}

/// Execute `action`. `stdin` is only read for `Input::Stdin`; `now_ms` stamps
/// exported sessions.
pub fn run_action(action: &CliAction, stdin: &mut dyn Read, now_ms: i64) -> CliResult<CheckOutcome> {
    let catalog = default_catalog();
    match action {
        CliAction::Help => Ok(CheckOutcome::text(usage())),
        CliAction::ListForms => Ok(CheckOutcome::text(list_forms(&catalog))),
        CliAction::ListSamples => Ok(CheckOutcome::text(list_samples(&catalog))),
        CliAction::Check(config) => check(config, &catalog, stdin, now_ms),
    }
}

fn check(
    config: &CheckConfig,
    catalog: &FormCatalog,
    stdin: &mut dyn Read,
    now_ms: i64,
) -> CliResult<CheckOutcome> {
    let (text, own_form) = load_poem(&config.input, catalog, stdin)?;
    let form_id = config
        .form
        .clone()
        .or(own_form)
        .unwrap_or_else(|| DEFAULT_FORM.to_string());

    if PoeticForm::from_id(&form_id).is_none() {
        tracing::warn!(form_id = %form_id, "unknown form, checking as free verse");
    }

    let report = validate_poem(&form_id, &text);
    tracing::debug!(
        form_id = %form_id,
        lines = report.line_count,
        errors = report.error_count,
        "validated poem"
    );

    let form_name = catalog.form(&form_id).map(|f| f.name.as_str());
    let output = if config.json {
        let mut json = serde_json::to_string_pretty(&JsonOutput {
            form_name,
            rule_summary: rule_summary(&form_id),
            report: &report,
        })?;
        json.push('\n');
        json
    } else {
        render_text(&form_id, form_name, &text, &report)
    };

    let exported = match &config.export_session {
        Some(target) => Some(export_session(target, &form_id, &text, now_ms)?),
        None => None,
    };

    Ok(CheckOutcome {
        output,
        flagged: !report.is_valid(),
        exported,
    })
}

/// Load the poem text and, for samples and sessions, the form it carries.
fn load_poem(
    input: &Input,
    catalog: &FormCatalog,
    stdin: &mut dyn Read,
) -> CliResult<(String, Option<String>)> {
    match input {
        Input::Stdin => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            Ok((text, None))
        }
        Input::File(path) => Ok((fs::read_to_string(path)?, None)),
        Input::Sample(id) => {
            let sample = catalog.require_sample(id)?;
            Ok((sample.text.clone(), Some(sample.form_id.clone())))
        }
        Input::Session(path) => {
            let session = PoetrySession::from_json(&fs::read_to_string(path)?)?;
            if session.form(catalog).is_none() {
                tracing::warn!(form_id = %session.form_id, "session uses a form missing from the catalog");
            }
            Ok((session.poem_text, Some(session.form_id)))
        }
    }
}

fn render_text(form_id: &str, form_name: Option<&str>, text: &str, report: &PoemReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Form: {} ({form_id})\n", form_name.unwrap_or("Unknown")));
    out.push_str(rule_summary(form_id));
    out.push_str("\n\n");
    out.push_str(&render_gutter(&gutter_rows(form_id, text)));
    out.push('\n');

    let expected = match report.expected_lines {
        Some(n) => format!(" (form expects {n})"),
        None => String::new(),
    };
    out.push_str(&format!(
        "{} lines{expected}, {} syllables, {} flagged\n",
        report.line_count, report.total_syllables, report.error_count
    ));
    out
}

fn export_session(target: &Path, form_id: &str, text: &str, now_ms: i64) -> CliResult<PathBuf> {
    let session = PoetrySession::new(form_id, text, now_ms);
    let path = if target.is_dir() {
        target.join(session.export_file_name())
    } else {
        target.to_path_buf()
    };
    fs::write(&path, session.to_json_pretty()?)?;
    tracing::info!(path = %path.display(), "wrote session file");
    Ok(path)
}

fn list_forms(catalog: &FormCatalog) -> String {
    let mut out = String::new();
    for info in catalog.forms() {
        out.push_str(&format!("{:<12} {:<22} {}\n", info.id, info.name, rule_summary(&info.id)));
    }
    out
}

fn list_samples(catalog: &FormCatalog) -> String {
    let mut out = String::new();
    for sample in catalog.samples() {
        out.push_str(&format!(
            "{:<16} {:<12} {} by {}\n",
            sample.id, sample.form_id, sample.title, sample.author
        ));
    }
    out
}
