extern crate self as nametag;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;
mod samples;

pub use api::{
    CandidateTrace, GenerateResultVerbose, StepOutcome, StepTrace, generate, generate_parsed, generate_verbose,
    parse_name, rules_for,
};
pub use samples::{Sample, samples};

/// Maximum number of characters a label should fit within.
///
/// Rules try to satisfy this budget; exceeding it is not an error.
pub const CHARACTER_LIMIT: usize = 17;

// --- Culture ----------------------------------------------------------------

/// Naming convention that selects which rule set runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CultureType {
    #[default]
    #[serde(rename = "chineseEnglish")]
    ChineseEnglish,
    #[serde(rename = "malay")]
    Malay,
    #[serde(rename = "indian")]
    Indian,
}

impl CultureType {
    pub const ALL: [CultureType; 3] = [CultureType::ChineseEnglish, CultureType::Malay, CultureType::Indian];

    /// Wire tag, as used in JSON input records.
    pub fn tag(self) -> &'static str {
        match self {
            CultureType::ChineseEnglish => "chineseEnglish",
            CultureType::Malay => "malay",
            CultureType::Indian => "indian",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            CultureType::ChineseEnglish => "Chinese/English",
            CultureType::Malay => "Malay",
            CultureType::Indian => "Indian",
        }
    }
}

impl fmt::Display for CultureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown culture type '{0}' (expected chineseEnglish, malay or indian)")]
pub struct ParseCultureError(pub String);

impl FromStr for CultureType {
    type Err = ParseCultureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chineseenglish" | "chinese-english" | "chinese_english" | "chinese/english" => {
                Ok(CultureType::ChineseEnglish)
            }
            "malay" => Ok(CultureType::Malay),
            "indian" => Ok(CultureType::Indian),
            _ => Err(ParseCultureError(s.to_string())),
        }
    }
}

// --- Name records -------------------------------------------------------------

/// Raw input record, as collected from a form or a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameInput {
    /// Full name as printed on the identity document.
    pub name: String,
    #[serde(rename = "type")]
    pub culture: CultureType,
    /// Token positions that make up the surname (or father's name).
    #[serde(default)]
    pub surname_indices: Vec<usize>,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub is_mdes: bool,
    #[serde(default)]
    pub is_doctor: bool,
}

/// A name split into tokens, carried through the rule pipeline.
///
/// Surname indices are not validated: positions past the end of `tokens`
/// simply never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub tokens: Vec<String>,
    pub culture: CultureType,
    pub surname_indices: Vec<usize>,
    /// Rank as entered. Only printed when `is_mdes` is set and
    /// `is_doctor` is not.
    pub rank: String,
    pub is_mdes: bool,
    pub is_doctor: bool,
}

impl ParsedName {
    /// Return true when the token at `index` is part of the surname.
    pub fn is_surname(&self, index: usize) -> bool {
        self.surname_indices.contains(&index)
    }

    /// Copy of `self` with the token list replaced.
    pub(crate) fn with_tokens(&self, tokens: Vec<String>) -> Self {
        ParsedName { tokens, ..self.clone() }
    }
}

// --- Rules --------------------------------------------------------------------

/// Result of applying one rule: either keep going with a refined name, or
/// stop with a finished label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Continue(ParsedName),
    Final(String),
}

pub(crate) type Transform = fn(&ParsedName) -> Step;

/// A pipeline step: a description, a validation predicate (not enforced)
/// and an optional transform. Rules without a transform only document a
/// constraint.
pub(crate) struct Rule {
    pub name: &'static str,
    pub validate: fn(&ParsedName) -> bool,
    pub transform: Option<Transform>,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("transform", &self.transform.map(|_| "<function>"))
            .finish()
    }
}
