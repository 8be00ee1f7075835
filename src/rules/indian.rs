use crate::Rule;
use crate::rules::shared::{alphabet_only, exclude_fathers_name, only_first_given_name};

/// Rules for Indian names. Same shape as the Malay set, without the
/// MD/AD abbreviation step.
pub fn get() -> Vec<Rule> {
    vec![exclude_fathers_name(), only_first_given_name(), alphabet_only()]
}
