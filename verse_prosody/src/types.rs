// Catalog types: selectable poetic forms and bundled sample poems.
//
// These are the JSON-loadable records behind the form picker and the sample
// library. They carry display text only; the structural rules live in
// `forms.rs` and are looked up through `FormInfo::form()`.

use crate::forms::PoeticForm;
use serde::{Deserialize, Serialize};

/// A selectable form as shown in the form picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInfo {
    /// Stable id, e.g. "haiku". Matches `PoeticForm::id()` for known forms.
    pub id: String,
    /// Display name, e.g. "Shakespearean Sonnet".
    pub name: String,
    pub description: String,
    /// Short description of the expected structure.
    pub structure: String,
    /// Opening of a well-known example.
    pub example: String,
}

impl FormInfo {
    /// The rule-bearing form for this entry, if the validator knows it.
    pub fn form(&self) -> Option<PoeticForm> {
        PoeticForm::from_id(&self.id)
    }
}

/// A bundled sample poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePoem {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Quality level blurb, e.g. "Level: Good Bones (Orange)".
    pub description: String,
    /// Form the sample is written in.
    pub form_id: String,
    pub text: String,
}
