//! Pipeline traces.
//!
//! The plain [`run_rules`](super::run_rules) path keeps nothing but the final
//! label. [`run_rules_traced`](super::run_rules_traced) records what every
//! rule did so the CLI can show how a label was derived.

use serde::Serialize;

/// What a single rule did to the running value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum StepOutcome {
    /// The rule has no transform and only documents a constraint.
    Skipped,
    /// The rule produced a refined name, shown here rendered.
    Continued { rendered: String },
    /// The rule produced the final label and ended the pipeline.
    Finished { label: String },
}

/// One rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepTrace {
    pub rule: &'static str,
    /// Result of the rule's validation predicate. Recorded, not enforced.
    pub valid: bool,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// Trace of one candidate through the rule pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTrace {
    /// Tokens of the candidate before any rule ran.
    pub tokens: Vec<String>,
    pub surname_indices: Vec<usize>,
    pub steps: Vec<StepTrace>,
    /// True when no rule finished early and the label is the rendered
    /// final value.
    pub fallback: bool,
    /// Upper-cased label for this candidate.
    pub label: String,
}
