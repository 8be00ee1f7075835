//! Rule pipeline executor.
//!
//! Rules run strictly in order. A rule without a transform is skipped. A
//! transform returning [`Step::Final`] ends the run with that label; a
//! [`Step::Continue`] value replaces the current name. When the list is
//! exhausted the last name is rendered. Every label is upper-cased.
//!
//! ```text
//! name ─▶ rule 1 ─▶ rule 2 ─▶ ... ─▶ rule n ─▶ render
//!            │         │                │
//!            └─────────┴──── Final ─────┴──▶ label
//! ```

use tracing::trace;

use super::render::render;
use super::trace::{CandidateTrace, StepOutcome, StepTrace};
use crate::{ParsedName, Rule, Step};

/// Run `rules` against `name` and return the upper-cased label.
pub(crate) fn run_rules(rules: &[Rule], name: &ParsedName) -> String {
    let mut current = name.clone();

    for rule in rules {
        let Some(transform) = rule.transform else {
            continue;
        };

        match transform(&current) {
            Step::Final(label) => {
                trace!(rule = rule.name, %label, "rule finished pipeline");
                return label.to_uppercase();
            }
            Step::Continue(next) => {
                trace!(rule = rule.name, tokens = ?next.tokens, "rule continued");
                current = next;
            }
        }
    }

    render(&current).to_uppercase()
}

/// Like [`run_rules`] but records every rule application.
pub(crate) fn run_rules_traced(rules: &[Rule], name: &ParsedName) -> CandidateTrace {
    let mut current = name.clone();
    let mut steps = Vec::with_capacity(rules.len());
    let mut finished: Option<String> = None;

    for rule in rules {
        let valid = (rule.validate)(&current);
        if !valid {
            trace!(rule = rule.name, "validation failed (not enforced)");
        }

        let Some(transform) = rule.transform else {
            steps.push(StepTrace { rule: rule.name, valid, outcome: StepOutcome::Skipped });
            continue;
        };

        match transform(&current) {
            Step::Final(label) => {
                steps.push(StepTrace { rule: rule.name, valid, outcome: StepOutcome::Finished { label: label.clone() } });
                finished = Some(label);
                break;
            }
            Step::Continue(next) => {
                steps.push(StepTrace { rule: rule.name, valid, outcome: StepOutcome::Continued { rendered: render(&next) } });
                current = next;
            }
        }
    }

    let fallback = finished.is_none();
    let label = finished.unwrap_or_else(|| render(&current)).to_uppercase();

    CandidateTrace {
        tokens: name.tokens.clone(),
        surname_indices: name.surname_indices.clone(),
        steps,
        fallback,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CultureType;

    fn sample() -> ParsedName {
        ParsedName {
            tokens: vec!["tan".to_string(), "bee".to_string(), "lian".to_string()],
            culture: CultureType::ChineseEnglish,
            surname_indices: vec![0],
            rank: String::new(),
            is_mdes: false,
            is_doctor: false,
        }
    }

    fn drop_last() -> Rule {
        rule! {
            name: "drop last token",
            transform: |value: &ParsedName| -> Step {
                let mut tokens = value.tokens.clone();
                tokens.pop();
                Step::Continue(value.with_tokens(tokens))
            },
        }
    }

    fn finish() -> Rule {
        rule! {
            name: "finish",
            transform: |value: &ParsedName| -> Step { Step::Final(format!("done {}", value.tokens.len())) },
        }
    }

    #[test]
    fn empty_rule_list_renders_input() {
        assert_eq!(run_rules(&[], &sample()), "TAN BEE LIAN");
    }

    #[test]
    fn continue_steps_chain_in_order() {
        let rules = vec![drop_last(), rule! { name: "placeholder" }, drop_last()];
        assert_eq!(run_rules(&rules, &sample()), "TAN");
    }

    #[test]
    fn final_step_short_circuits() {
        let rules = vec![drop_last(), finish(), drop_last()];
        assert_eq!(run_rules(&rules, &sample()), "DONE 2");
    }

    #[test]
    fn input_is_not_mutated() {
        let name = sample();
        let _ = run_rules(&[drop_last(), drop_last()], &name);
        assert_eq!(name, sample());
    }

    #[test]
    fn traced_run_matches_plain_run() {
        let rules = vec![drop_last(), rule! { name: "placeholder" }, finish(), drop_last()];
        let trace = run_rules_traced(&rules, &sample());

        assert_eq!(trace.label, run_rules(&rules, &sample()));
        assert!(!trace.fallback);
        assert_eq!(trace.steps.len(), 3);
        assert_eq!(trace.steps[0].outcome, StepOutcome::Continued { rendered: "tan bee".to_string() });
        assert_eq!(trace.steps[1].outcome, StepOutcome::Skipped);
        assert_eq!(trace.steps[2].outcome, StepOutcome::Finished { label: "done 2".to_string() });
        assert!(trace.steps.iter().all(|s| s.valid));
    }

    #[test]
    fn traced_run_marks_fallback_render() {
        let trace = run_rules_traced(&[drop_last()], &sample());
        assert!(trace.fallback);
        assert_eq!(trace.label, "TAN BEE");
        assert_eq!(trace.tokens, vec!["tan", "bee", "lian"]);
    }
}
