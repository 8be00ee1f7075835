//! Label generation engine.
//!
//! Turning an input record into labels is a short pipeline:
//!
//! ```text
//! NameInput ── parse_name (parser.rs)
//!                  │
//!                  v
//!             ParsedName ── candidates (candidates.rs)
//!                               │  1..3 variants (Chinese/English only
//!                               │  branches when the surname is interior)
//!                               v
//!                     run_rules per variant (pipeline.rs)
//!                       - rules from the culture's table (src/rules.rs)
//!                       - stop early on Step::Final
//!                       - fall back to render (render.rs)
//!                               │
//!                               v
//!                     upper-case + dedup (dedup.rs)
//!                               │
//!                               v
//!                          Vec<String>
//! ```
//!
//! ## Responsibilities by module
//!
//! - `parser.rs`: splits the raw name into tokens.
//! - `render.rs`: prefix selection and joining tokens into a label.
//! - `pipeline.rs`: runs an ordered rule list against one parsed name.
//! - `candidates.rs`: produces the parsed-name variants to try.
//! - `dedup.rs`: order-preserving removal of repeated labels.
//! - `trace.rs`: optional per-rule trace for debugging and the CLI.
//!
//! ## Debugging
//!
//! Rule application is logged through `tracing` at `trace` level and candidate
//! generation at `debug` level.

#[path = "engine/candidates.rs"]
mod candidates;
#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/render.rs"]
mod render;
#[path = "engine/trace.rs"]
mod trace;

pub(crate) use candidates::candidates;
pub(crate) use dedup::dedup_labels;
pub(crate) use parser::parse_name;
pub(crate) use pipeline::{run_rules, run_rules_traced};
pub(crate) use render::{fits, render};
pub use trace::{CandidateTrace, StepOutcome, StepTrace};
