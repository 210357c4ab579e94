// Editor gutter model: which rows show a syllable annotation and how.
//
// The editor renders a fixed minimum number of rows beside the text area and
// annotates each non-empty line with its validation message plus a marker
// dot. Free verse shows no annotations at all. This module computes those
// rows independently of any UI toolkit, and `render_gutter()` lays them out
// as plain text for the command-line checker.

use crate::forms::PoeticForm;
use crate::validate::{LineValidation, split_lines, validate_form_line};
use serde::Serialize;
use std::fmt::Write as _;

/// The editor always shows at least this many numbered rows.
pub const MIN_GUTTER_ROWS: usize = 15;

/// Marker dot shown next to an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Error,
    Valid,
    None,
}

impl Marker {
    fn from_validation(v: &LineValidation) -> Marker {
        if v.is_error {
            Marker::Error
        } else if v.is_valid {
            Marker::Valid
        } else {
            Marker::None
        }
    }

    fn glyph(self) -> char {
        match self {
            Marker::Error => 'x',
            Marker::Valid => '*',
            Marker::None => ' ',
        }
    }
}

/// Visible annotation for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub message: String,
    pub marker: Marker,
}

/// One gutter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GutterRow {
    /// One-based line number.
    pub number: usize,
    pub text: String,
    pub annotation: Option<Annotation>,
}

/// Build the gutter rows for `text` under `form_id`.
pub fn gutter_rows(form_id: &str, text: &str) -> Vec<GutterRow> {
    let form = PoeticForm::from_id(form_id);
    let lines = split_lines(text);
    let row_count = lines.len().max(MIN_GUTTER_ROWS);
    let annotate = form != Some(PoeticForm::FreeVerse);

    (0..row_count)
        .map(|i| {
            let line = lines.get(i).copied().unwrap_or("");
            // Whitespace-only lines still get an annotation, like the editor.
            let annotation = (annotate && !line.is_empty()).then(|| {
                let v = validate_form_line(form, line, i);
                Annotation {
                    marker: Marker::from_validation(&v),
                    message: v.message,
                }
            });
            GutterRow {
                number: i + 1,
                text: line.to_string(),
                annotation,
            }
        })
        .collect()
}

/// Lay rows out as fixed-width text: message, marker, number, line.
pub fn render_gutter(rows: &[GutterRow]) -> String {
    let width = rows
        .iter()
        .filter_map(|r| r.annotation.as_ref().map(|a| a.message.len()))
        .max()
        .unwrap_or(0);
    let number_width = rows.len().to_string().len();

    let mut out = String::new();
    for row in rows {
        let (message, glyph) = match &row.annotation {
            Some(a) => (a.message.as_str(), a.marker.glyph()),
            None => ("", ' '),
        };
        let line = format!(
            "{message:>width$} {glyph} {number:>number_width$} | {text}",
            number = row.number,
            text = row.text,
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}
