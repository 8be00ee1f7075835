//! Rules shared between several cultures.

use crate::engine::{fits, render};
use crate::rules::helpers::{first_spelt_given_name_index, retain_tokens};
use crate::rules::predicates::is_md_or_ad;
use crate::{ParsedName, Rule, Step};

/// Return the full rendering when it already fits the budget.
pub fn spell_in_full_if_possible() -> Rule {
    rule! {
        name: "Name spelt in full in accordance to NRIC if it is within 17 characters including MDES ranks or Doctor title, if applicable.",
        transform: |value: &ParsedName| -> Step {
            let spelt_in_full = render(value);
            if fits(&spelt_in_full) {
                return Step::Final(spelt_in_full);
            }
            Step::Continue(value.clone())
        },
    }
}

/// Drop every surname token (the father's name) and forget the surname
/// positions.
pub fn exclude_fathers_name() -> Rule {
    rule! {
        name: "Exclude father's name",
        transform: |value: &ParsedName| -> Step {
            let tokens = retain_tokens(value, |index, _| !value.is_surname(index));
            Step::Continue(ParsedName { tokens, surname_indices: Vec::new(), ..value.clone() })
        },
    }
}

/// Keep surname tokens, `MD`/`AD` abbreviations and the first given name.
pub fn only_first_given_name() -> Rule {
    rule! {
        name: "Only first given name will be spelt in full.",
        transform: |value: &ParsedName| -> Step {
            let first_given = first_spelt_given_name_index(value);
            let tokens = retain_tokens(value, |index, token| {
                value.is_surname(index) || Some(index) == first_given || is_md_or_ad(token)
            });
            Step::Continue(ParsedName { tokens, surname_indices: Vec::new(), ..value.clone() })
        },
    }
}

pub fn alphabet_only() -> Rule {
    rule! { name: "Should only include letters from A to Z" }
}

pub fn surname_printed_in_full() -> Rule {
    rule! { name: "Surname is to be printed in full" }
}
