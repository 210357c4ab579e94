// Poetic form identifiers, structural rule tables, and rule summaries.
//
// Each form maps to one `FormRule`, a small closed description of what the
// form expects per line index:
// - `Exact`: fixed per-slot syllable targets (haiku 5-7-5)
// - `Classes`: per-slot tolerance ranges (limerick A/B lines)
// - `Uniform`: one tolerance range for every line (sonnet)
// - `Open`: no rule at all (free verse, villanelle)
//
// `FormRule::line_rule()` resolves a line index to a `LineRule` and owns the
// one fallthrough in the table: an empty line past a form's last slot has no
// rule (`LineRule::Open`), while a non-empty one is `LineRule::Extra`.
//
// `rule_summary()` is a separate hand-written lookup keyed by form id. It is
// not derived from the rule tables and has to be kept in step by hand.
//
// Consumed by `validate.rs` (per-line verdicts) and `gutter.rs`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// The closed set of forms the validator knows about.
///
/// Ids match the catalog (`data/poetic_forms.json`) and session files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoeticForm {
    FreeVerse,
    Haiku,
    Sonnet,
    Limerick,
    Villanelle,
}

impl PoeticForm {
    /// Every form, in catalog order.
    pub const ALL: [PoeticForm; 5] = [
        PoeticForm::FreeVerse,
        PoeticForm::Haiku,
        PoeticForm::Sonnet,
        PoeticForm::Limerick,
        PoeticForm::Villanelle,
    ];

    /// Look up a form by its string id. Unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<PoeticForm> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    /// The string id used by the catalog and session files.
    pub fn id(self) -> &'static str {
        match self {
            PoeticForm::FreeVerse => "free_verse",
            PoeticForm::Haiku => "haiku",
            PoeticForm::Sonnet => "sonnet",
            PoeticForm::Limerick => "limerick",
            PoeticForm::Villanelle => "villanelle",
        }
    }

    /// The structural rule table for this form.
    pub fn rule(self) -> FormRule {
        match self {
            PoeticForm::Haiku => FormRule::Exact(&HAIKU_TARGETS),
            PoeticForm::Limerick => FormRule::Classes(&LIMERICK_SLOTS),
            PoeticForm::Sonnet => FormRule::Uniform(SONNET_RANGE),
            // Villanelle is advertised but carries no rule table yet.
            PoeticForm::FreeVerse | PoeticForm::Villanelle => FormRule::Open,
        }
    }

    /// Conventional poem length, when the form has one. Informational only;
    /// villanelle reports its 19 lines even though `rule()` is `Open`.
    pub fn expected_lines(self) -> Option<usize> {
        match self {
            PoeticForm::Haiku => Some(HAIKU_TARGETS.len()),
            PoeticForm::Limerick => Some(LIMERICK_SLOTS.len()),
            PoeticForm::Sonnet => Some(SONNET_LINES),
            PoeticForm::Villanelle => Some(VILLANELLE_LINES),
            PoeticForm::FreeVerse => None,
        }
    }
}

impl fmt::Display for PoeticForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Inclusive syllable tolerance for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance {
    pub min: usize,
    pub max: usize,
}

impl Tolerance {
    pub const fn new(min: usize, max: usize) -> Self {
        Tolerance { min, max }
    }

    pub fn contains(self, count: usize) -> bool {
        self.as_range().contains(&count)
    }

    pub fn as_range(self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

/// Haiku: three lines of exactly 5, 7, 5 syllables.
pub const HAIKU_TARGETS: [usize; 3] = [5, 7, 5];

/// Limerick long lines (rhyme class A: lines 1, 2, 5).
pub const LIMERICK_LONG: Tolerance = Tolerance::new(7, 10);
/// Limerick short lines (rhyme class B: lines 3, 4).
pub const LIMERICK_SHORT: Tolerance = Tolerance::new(5, 7);
/// Limerick slots in AABBA order.
pub const LIMERICK_SLOTS: [Tolerance; 5] = [
    LIMERICK_LONG,
    LIMERICK_LONG,
    LIMERICK_SHORT,
    LIMERICK_SHORT,
    LIMERICK_LONG,
];

/// Sonnet lines approximate iambic pentameter: 9-11 syllables, every line.
pub const SONNET_RANGE: Tolerance = Tolerance::new(9, 11);
const SONNET_LINES: usize = 14;
const VILLANELLE_LINES: usize = 19;

/// A form's structural rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRule {
    /// Exact target per slot; lines past the last slot are extra.
    Exact(&'static [usize]),
    /// Tolerance per slot; lines past the last slot are extra.
    Classes(&'static [Tolerance]),
    /// One tolerance for every line index, no line limit.
    Uniform(Tolerance),
    /// No structural rule.
    Open,
}

/// The rule that applies to one line of a poem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    /// Must have exactly this many syllables.
    Exact(usize),
    /// Must fall inside this tolerance.
    Within(Tolerance),
    /// Line is past the form's last slot and has content.
    Extra,
    /// Anything goes.
    Open,
}

impl FormRule {
    /// Resolve the rule for the line at `index`.
    ///
    /// Lines past the end of an `Exact` or `Classes` table are `Extra` when
    /// they have content and fall through to `Open` when empty, so a trailing
    /// blank line never gets flagged.
    pub fn line_rule(self, index: usize, is_empty: bool) -> LineRule {
        let slot = match self {
            FormRule::Exact(targets) => targets.get(index).map(|&t| LineRule::Exact(t)),
            FormRule::Classes(slots) => slots.get(index).map(|&t| LineRule::Within(t)),
            FormRule::Uniform(tolerance) => return LineRule::Within(tolerance),
            FormRule::Open => return LineRule::Open,
        };
        match slot {
            Some(rule) => rule,
            None if is_empty => LineRule::Open,
            None => LineRule::Extra,
        }
    }

    /// Number of defined slots, for tables that end.
    pub fn slot_count(self) -> Option<usize> {
        match self {
            FormRule::Exact(targets) => Some(targets.len()),
            FormRule::Classes(slots) => Some(slots.len()),
            FormRule::Uniform(_) | FormRule::Open => None,
        }
    }
}

/// One-line description of a form's structure, for UI guidance.
///
/// Unknown ids get the free-structure fallback.
pub fn rule_summary(form_id: &str) -> &'static str {
    match form_id {
        "haiku" => "Structure: 3 lines (5 - 7 - 5 syllables)",
        "sonnet" => "Structure: 14 lines, ~10 syllables/line",
        "limerick" => "Structure: 5 lines (AABBA), 7-10/5-7 syllables",
        "villanelle" => "Structure: 19 lines (5 tercets + 1 quatrain)",
        _ => "Form: Free structure",
    }
}
