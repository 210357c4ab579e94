// Prosody core for the VerseCraft poetry editor.
//
// Estimates syllables line by line and checks each line against the
// structural rules of the selected poetic form, producing the verdicts the
// editor shows in its gutter. Everything here is pure and synchronous; no
// call depends on another, and none touches the network or the filesystem.
//
// Architecture:
// - `syllables.rs`: Vowel-cluster syllable estimator
// - `forms.rs`: `PoeticForm`, per-form rule tables, `rule_summary()`
// - `validate.rs`: `validate_line()` / `validate_poem()` verdicts
// - `gutter.rs`: Editor gutter rows and their plain-text rendering
// - `session.rs`: Session file import/export
// - `types.rs`: Catalog records (`FormInfo`, `SamplePoem`)
// - `error.rs`: `VerseError` for the fallible edges
// - `lib.rs` (this file): `FormCatalog`, loads and queries the JSON catalog
//
// The catalog is loaded from `data/poetic_forms.json` and
// `data/sample_poems.json` via `FormCatalog::from_json()`. The
// `default_catalog()` convenience function embeds both with `include_str!`.
// The catalog is display data only; rule tables never read it.

pub mod error;
pub mod forms;
pub mod gutter;
pub mod session;
pub mod syllables;
pub mod types;
pub mod validate;

// Re-export key items at crate root for convenience.
pub use error::{VerseError, VerseResult};
pub use forms::{FormRule, LineRule, PoeticForm, Tolerance, rule_summary};
pub use gutter::{GutterRow, Marker, gutter_rows, render_gutter};
pub use session::PoetrySession;
pub use syllables::estimate_syllables;
pub use types::{FormInfo, SamplePoem};
pub use validate::{LineValidation, PoemReport, validate_line, validate_poem};

/// The top-level JSON structure for a catalog file.
#[derive(Debug, serde::Deserialize)]
struct CatalogFile {
    #[serde(default)]
    forms: Vec<FormInfo>,
    #[serde(default)]
    samples: Vec<SamplePoem>,
}

/// Selectable forms and sample poems.
///
/// Preserves file order so the form picker and sample list render in the
/// order the data files list them.
#[derive(Debug, Clone, Default)]
pub struct FormCatalog {
    forms: Vec<FormInfo>,
    samples: Vec<SamplePoem>,
}

impl FormCatalog {
    /// Parse a catalog from a JSON string. Both `forms` and `samples` are
    /// optional.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(json)?;
        tracing::debug!(
            forms = file.forms.len(),
            samples = file.samples.len(),
            "loaded form catalog"
        );
        Ok(FormCatalog {
            forms: file.forms,
            samples: file.samples,
        })
    }

    /// Append another catalog's forms and samples after this one's.
    pub fn merge(mut self, other: FormCatalog) -> Self {
        self.forms.extend(other.forms);
        self.samples.extend(other.samples);
        self
    }

    /// All forms, in file order.
    pub fn forms(&self) -> &[FormInfo] {
        &self.forms
    }

    /// Look up a form by id.
    pub fn form(&self, id: &str) -> Option<&FormInfo> {
        self.forms.iter().find(|f| f.id == id)
    }

    /// All sample poems, in file order.
    pub fn samples(&self) -> &[SamplePoem] {
        &self.samples
    }

    /// Look up a sample by id.
    pub fn sample(&self, id: &str) -> Option<&SamplePoem> {
        self.samples.iter().find(|s| s.id == id)
    }

    /// Like `sample()`, but a missing id is an error.
    pub fn require_sample(&self, id: &str) -> VerseResult<&SamplePoem> {
        self.sample(id)
            .ok_or_else(|| VerseError::UnknownSample(id.to_string()))
    }

    /// Samples written in the given form.
    pub fn samples_for(&self, form_id: &str) -> Vec<&SamplePoem> {
        self.samples.iter().filter(|s| s.form_id == form_id).collect()
    }
}

/// Load the default catalog embedded at compile time.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_catalog() -> FormCatalog {
    let forms = include_str!("../../data/poetic_forms.json");
    let samples = include_str!("../../data/sample_poems.json");
    let forms = FormCatalog::from_json(forms).expect("embedded poetic_forms.json is malformed");
    let samples =
        FormCatalog::from_json(samples).expect("embedded sample_poems.json is malformed");
    forms.merge(samples)
}
