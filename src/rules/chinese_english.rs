use crate::engine::{fits, render};
use crate::rules::helpers::{first_given_name_index, initial, retain_tokens};
use crate::rules::shared::{alphabet_only, spell_in_full_if_possible, surname_printed_in_full};
use crate::{ParsedName, Rule, Step};

/// Rule matching every given name and cutting it down to its initial.
fn rule_abbreviate_given_names() -> Rule {
    rule! {
        name: "Given names to be abbreviated to initials before or after surname based on NRIC sequence.",
        transform: |value: &ParsedName| -> Step {
            let tokens = value
                .tokens
                .iter()
                .enumerate()
                .map(|(index, token)| if value.is_surname(index) { token.clone() } else { initial(token) })
                .collect();
            Step::Continue(value.with_tokens(tokens))
        },
    }
}

/// Rule dropping trailing initials until the label fits.
///
/// ```text
/// ME2-2 A M CHONG C K   (19, too long)
/// ME2-2 A M CHONG       (first two given names kept)
/// ME2-2 A CHONG         (fallback: first given name only)
/// ```
fn rule_truncate_abbreviated_names() -> Rule {
    rule! {
        name: "If abbreviated given names exceeds 17 characters, only first and/or second given names will be abbreviated to initials.",
        transform: |value: &ParsedName| -> Step {
            if fits(&render(value)) {
                return Step::Continue(value.clone());
            }

            let Some(first_given) = first_given_name_index(value) else {
                return Step::Continue(value.clone());
            };

            let two_given = value.with_tokens(retain_tokens(value, |index, _| {
                value.is_surname(index) || index <= first_given + 1
            }));
            if fits(&render(&two_given)) {
                return Step::Continue(two_given);
            }

            Step::Continue(value.with_tokens(retain_tokens(value, |index, _| {
                value.is_surname(index) || index <= first_given
            })))
        },
    }
}

/// Rules for Chinese and English names.
pub fn get() -> Vec<Rule> {
    vec![
        spell_in_full_if_possible(),
        rule_abbreviate_given_names(),
        rule_truncate_abbreviated_names(),
        alphabet_only(),
        surname_printed_in_full(),
    ]
}
