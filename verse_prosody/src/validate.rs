// Per-line structural validation against a poetic form.
//
// `validate_line()` is the entry point the editor calls once per rendered
// line. It estimates the line's syllables, asks the form's `FormRule` for the
// `LineRule` at that index, and turns the pair into a `LineValidation`
// verdict. There is no state between calls; line index is the only "state"
// a form has.
//
// Decision table (count = estimated syllables, empty = whitespace or BOM only):
//
//   LineRule      is_valid            is_error                 message
//   Exact(t)      count == t          !empty && !is_valid      "{count} / {t}"
//   Within(r)     count in r          !empty && !is_valid      "{count}"
//   Extra         false               true                     "Extra"
//   Open          true                false                    "{count}" or ""
//
// `Extra` is only produced for non-empty lines (see `FormRule::line_rule`),
// so an empty line never reports an error under any form.
//
// `validate_poem()` runs the same check over a whole poem split the way the
// editor splits it.

use crate::forms::{LineRule, PoeticForm};
use crate::syllables::estimate_syllables;
use serde::{Deserialize, Serialize};

/// Verdict for one line. Display-only `message`, e.g. "5 / 7" or "Extra".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineValidation {
    pub is_valid: bool,
    pub is_error: bool,
    pub message: String,
    pub syllable_count: usize,
}

/// Validate one line against the form named by `form_id`.
///
/// Unknown ids validate like free verse. Never fails.
pub fn validate_line(form_id: &str, line: &str, index: usize) -> LineValidation {
    validate_form_line(PoeticForm::from_id(form_id), line, index)
}

/// Whitespace-only, counting a byte-order mark as whitespace.
fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

/// Validate one line against an already-resolved form (`None` = no rule).
pub fn validate_form_line(form: Option<PoeticForm>, line: &str, index: usize) -> LineValidation {
    let count = estimate_syllables(line);
    let is_empty = is_blank(line);
    let rule = form.map_or(LineRule::Open, |f| f.rule().line_rule(index, is_empty));

    match rule {
        LineRule::Exact(target) => {
            let is_valid = count == target;
            LineValidation {
                is_valid,
                is_error: !is_empty && !is_valid,
                message: format!("{count} / {target}"),
                syllable_count: count,
            }
        }
        LineRule::Within(tolerance) => {
            let is_valid = tolerance.contains(count);
            LineValidation {
                is_valid,
                is_error: !is_empty && !is_valid,
                message: count.to_string(),
                syllable_count: count,
            }
        }
        LineRule::Extra => LineValidation {
            is_valid: false,
            is_error: true,
            message: "Extra".to_string(),
            syllable_count: count,
        },
        LineRule::Open => LineValidation {
            is_valid: true,
            is_error: false,
            message: if count > 0 {
                count.to_string()
            } else {
                String::new()
            },
            syllable_count: count,
        },
    }
}

/// Split a poem into lines the way the editor does: on every `'\n'`.
///
/// An empty poem is a single empty line; a trailing newline leaves a trailing
/// empty line. A `'\r'` before the newline is dropped.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Validation of every line of a poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoemReport {
    pub form_id: String,
    pub lines: Vec<LineValidation>,
    pub line_count: usize,
    pub total_syllables: usize,
    pub error_count: usize,
    /// Conventional length of the form, informational only.
    pub expected_lines: Option<usize>,
}

impl PoemReport {
    /// True when no line is flagged as an error.
    pub fn is_valid(&self) -> bool {
        self.error_count == 0
    }
}

/// Validate a whole poem, one `validate_line` call per line.
pub fn validate_poem(form_id: &str, text: &str) -> PoemReport {
    let form = PoeticForm::from_id(form_id);
    let lines: Vec<LineValidation> = split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| validate_form_line(form, line, i))
        .collect();

    PoemReport {
        form_id: form_id.to_string(),
        line_count: lines.len(),
        total_syllables: lines.iter().map(|l| l.syllable_count).sum(),
        error_count: lines.iter().filter(|l| l.is_error).count(),
        expected_lines: form.and_then(PoeticForm::expected_lines),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: &str = "An old silent pond";
    const SIX: &str = "The sun is very hot";
    const SEVEN: &str = "A frog jumps into the pond";

    fn words(n: usize) -> String {
        vec!["the"; n].join(" ")
    }

    #[test]
    fn test_haiku_exact_match() {
        let v = validate_line("haiku", FIVE, 0);
        assert!(v.is_valid);
        assert!(!v.is_error);
        assert_eq!(v.message, "5 / 5");
        assert_eq!(v.syllable_count, 5);
    }

    #[test]
    fn test_haiku_mismatch() {
        let v = validate_line("haiku", SIX, 0);
        assert!(!v.is_valid);
        assert!(v.is_error);
        assert_eq!(v.message, "6 / 5");
    }

    #[test]
    fn test_haiku_middle_line_target() {
        let v = validate_line("haiku", SEVEN, 1);
        assert!(v.is_valid);
        assert_eq!(v.message, "7 / 7");
    }

    #[test]
    fn test_haiku_empty_slot_is_neutral_but_shows_target() {
        let v = validate_line("haiku", "", 2);
        assert!(!v.is_valid);
        assert!(!v.is_error);
        assert_eq!(v.message, "0 / 5");
    }

    #[test]
    fn test_haiku_extra_line() {
        let v = validate_line("haiku", FIVE, 3);
        assert!(!v.is_valid);
        assert!(v.is_error);
        assert_eq!(v.message, "Extra");
        assert_eq!(v.syllable_count, 5);
    }

    #[test]
    fn test_haiku_empty_extra_line_falls_through() {
        let v = validate_line("haiku", "   ", 3);
        assert!(v.is_valid);
        assert!(!v.is_error);
        assert_eq!(v.message, "");
    }

    #[test]
    fn test_limerick_short_line_in_range() {
        let v = validate_line("limerick", &words(6), 2);
        assert!(v.is_valid);
        assert!(!v.is_error);
        assert_eq!(v.message, "6");
    }

    #[test]
    fn test_limerick_long_line_bounds() {
        assert!(validate_line("limerick", &words(7), 0).is_valid);
        assert!(validate_line("limerick", &words(10), 4).is_valid);
        assert!(validate_line("limerick", &words(11), 1).is_error);
        assert!(validate_line("limerick", &words(6), 1).is_error);
    }

    #[test]
    fn test_limerick_extra_and_fallthrough() {
        let extra = validate_line("limerick", &words(8), 5);
        assert!(extra.is_error);
        assert_eq!(extra.message, "Extra");

        let blank = validate_line("limerick", "", 5);
        assert!(blank.is_valid);
        assert!(!blank.is_error);
        assert_eq!(blank.message, "");
    }

    #[test]
    fn test_sonnet_out_of_range() {
        for index in [0, 7, 13, 40] {
            let v = validate_line("sonnet", &words(15), index);
            assert!(v.is_error);
            assert!(!v.is_valid);
            assert_eq!(v.message, "15");
        }
    }

    #[test]
    fn test_sonnet_in_range() {
        let v = validate_line("sonnet", &words(10), 3);
        assert!(v.is_valid);
        assert!(!v.is_error);
    }

    #[test]
    fn test_empty_line_never_errors() {
        for form in ["free_verse", "haiku", "sonnet", "limerick", "villanelle", "bogus"] {
            for index in 0..20 {
                let v = validate_line(form, "", index);
                assert!(!v.is_error, "{form} line {index} flagged when empty");
                assert_eq!(v.syllable_count, 0);
            }
        }
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        let v = validate_line("haiku", "\u{feff}", 0);
        assert!(!v.is_error);
        assert!(!v.is_valid);
        assert_eq!(v.message, "0 / 5");

        let v = validate_line("haiku", &format!("\u{feff}{FIVE}"), 0);
        assert!(v.is_valid);
        assert_eq!(v.syllable_count, 5);
    }

    #[test]
    fn test_unknown_and_villanelle_use_default() {
        for form in ["villanelle", "bogus", "free_verse"] {
            let v = validate_line(form, &words(30), 0);
            assert!(v.is_valid);
            assert!(!v.is_error);
            assert_eq!(v.message, "30");
        }
    }

    #[test]
    fn test_split_lines_matches_editor() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_validate_poem_haiku() {
        let text = "An old silent pond...\nA frog jumps into the pond,\nsplash! Silence again.";
        let report = validate_poem("haiku", text);
        assert_eq!(report.line_count, 3);
        assert_eq!(report.total_syllables, 17);
        assert_eq!(report.error_count, 0);
        assert_eq!(report.expected_lines, Some(3));
        assert!(report.is_valid());
    }

    #[test]
    fn test_validate_poem_expected_lines_per_form() {
        assert_eq!(validate_poem("limerick", "").expected_lines, Some(5));
        assert_eq!(validate_poem("sonnet", "").expected_lines, Some(14));
        assert_eq!(validate_poem("villanelle", "").expected_lines, Some(19));
        assert_eq!(validate_poem("free_verse", "").expected_lines, None);
        assert_eq!(validate_poem("ghazal", "").expected_lines, None);
    }

    #[test]
    fn test_validate_poem_counts_errors() {
        let text = format!("{SIX}\n{SEVEN}\n{FIVE}\n{FIVE}");
        let report = validate_poem("haiku", &text);
        assert_eq!(report.error_count, 2);
        assert_eq!(report.lines[3].message, "Extra");
        assert!(!report.is_valid());
    }

    #[test]
    fn test_line_validation_json_shape() {
        let v = validate_line("haiku", FIVE, 0);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["isValid"], true);
        assert_eq!(json["isError"], false);
        assert_eq!(json["message"], "5 / 5");
        assert_eq!(json["syllableCount"], 5);
    }
}
