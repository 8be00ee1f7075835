use crate::rules::predicates::{is_abdul, is_mohammed};
use crate::rules::shared::{alphabet_only, exclude_fathers_name, only_first_given_name};
use crate::{ParsedName, Rule, Step};

/// Rule replacing Mohammed/Abdul spellings with `MD`/`AD`.
fn rule_abbreviate_md_and_ad() -> Rule {
    rule! {
        name: "MD and AD can used as abbreviation for Mohammed/Mohamad and Abdul respectively.",
        transform: |value: &ParsedName| -> Step {
            let tokens = value
                .tokens
                .iter()
                .map(|token| {
                    if is_mohammed(token) {
                        "MD".to_string()
                    } else if is_abdul(token) {
                        "AD".to_string()
                    } else {
                        token.clone()
                    }
                })
                .collect();
            Step::Continue(value.with_tokens(tokens))
        },
    }
}

/// Rules for Malay names.
pub fn get() -> Vec<Rule> {
    vec![exclude_fathers_name(), rule_abbreviate_md_and_ad(), only_first_given_name(), alphabet_only()]
}
