use crate::engine;
use crate::rules;
use crate::{CultureType, NameInput, ParsedName};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

pub use crate::engine::{CandidateTrace, StepOutcome, StepTrace};

/// Result from [`generate_verbose`].
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResultVerbose {
    /// Distinct labels, in candidate order.
    pub labels: Vec<String>,
    /// One trace per candidate, before deduplication.
    pub candidates: Vec<CandidateTrace>,
    /// Descriptions of the rules that ran.
    pub rules: Vec<&'static str>,
    /// Total elapsed time.
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Split the raw name into tokens and carry the metadata over.
pub fn parse_name(input: &NameInput) -> ParsedName {
    engine::parse_name(input)
}

/// Generate the candidate labels for `input`.
///
/// The result is never empty and holds no duplicates. The first label is the
/// one derived from the unmodified name.
///
/// # Example
/// ```
/// use nametag::{CultureType, NameInput, generate};
///
/// let input = NameInput {
///     name: "TAN ZHI QING".to_string(),
///     culture: CultureType::ChineseEnglish,
///     surname_indices: vec![0],
///     rank: "ME3-2".to_string(),
///     is_mdes: true,
///     is_doctor: false,
/// };
/// assert_eq!(generate(&input), vec!["ME3-2 TAN Z Q"]);
/// ```
pub fn generate(input: &NameInput) -> Vec<String> {
    generate_parsed(&engine::parse_name(input))
}

/// Generate the candidate labels for an already parsed name.
pub fn generate_parsed(name: &ParsedName) -> Vec<String> {
    let rules = rules::for_culture(name.culture);
    let candidates = engine::candidates(name);
    debug!(culture = name.culture.tag(), candidates = candidates.len(), "generating labels");

    engine::dedup_labels(candidates.iter().map(|candidate| engine::run_rules(rules, candidate)))
}

/// Generate labels for `input` and return a per-candidate rule trace.
///
/// The plain [`generate`] path does not allocate these traces.
pub fn generate_verbose(input: &NameInput) -> GenerateResultVerbose {
    let start = Instant::now();
    let name = engine::parse_name(input);
    let rules = rules::for_culture(name.culture);

    let candidates: Vec<CandidateTrace> =
        engine::candidates(&name).iter().map(|candidate| engine::run_rules_traced(rules, candidate)).collect();
    let labels = engine::dedup_labels(candidates.iter().map(|trace| trace.label.clone()));

    GenerateResultVerbose { labels, candidates, rules: rules_for(name.culture), elapsed: start.elapsed() }
}

/// Human-readable descriptions of the rules applied to `culture`, in order.
pub fn rules_for(culture: CultureType) -> Vec<&'static str> {
    rules::for_culture(culture).iter().map(|rule| rule.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CHARACTER_LIMIT;

    fn input(name: &str, culture: CultureType, surname_indices: &[usize], rank: &str, mdes: bool, dr: bool) -> NameInput {
        NameInput {
            name: name.to_string(),
            culture,
            surname_indices: surname_indices.to_vec(),
            rank: rank.to_string(),
            is_mdes: mdes,
            is_doctor: dr,
        }
    }

    #[test]
    fn generate_is_deterministic() {
        let i = input("ALEXANDER MAXIMUS CHONG CHEE KEONG", CultureType::ChineseEnglish, &[2], "ME2-2", true, false);
        assert_eq!(generate(&i), generate(&i));
    }

    #[test]
    fn generate_verbose_agrees_with_generate() {
        for culture in CultureType::ALL {
            let i = input("mohamed ahmad abdul rahman bin baharudin", culture, &[2, 4], "ME4-3", true, false);
            let verbose = generate_verbose(&i);
            assert_eq!(verbose.labels, generate(&i));
            assert_eq!(verbose.rules, rules_for(culture));
            assert!(verbose.candidates.iter().all(|c| !c.steps.is_empty()));
        }
    }

    #[test]
    fn empty_input_yields_one_label() {
        assert_eq!(generate(&NameInput::default()), vec![""]);

        let doctor = input("", CultureType::Indian, &[0], "", false, true);
        assert_eq!(generate(&doctor), vec!["DR"]);
    }

    #[test]
    fn labels_are_upper_case() {
        let i = input("tan bee lian", CultureType::ChineseEnglish, &[0], "me1t", true, false);
        assert_eq!(generate(&i), vec!["ME1T TAN BEE LIAN"]);
    }

    #[test]
    fn rule_descriptions_per_culture() {
        assert_eq!(rules_for(CultureType::ChineseEnglish).len(), 5);
        assert_eq!(rules_for(CultureType::Malay).len(), 4);
        assert_eq!(rules_for(CultureType::Indian).len(), 3);
        assert_eq!(rules_for(CultureType::Indian)[0], "Exclude father's name");
        assert!(rules_for(CultureType::ChineseEnglish)[0].contains(&CHARACTER_LIMIT.to_string()));
    }

    #[test]
    fn verbose_result_serializes() {
        let i = input("TAN BEE LIAN", CultureType::ChineseEnglish, &[0], "", false, false);
        let json = serde_json::to_value(generate_verbose(&i)).unwrap();

        assert_eq!(json["labels"][0], "TAN BEE LIAN");
        assert_eq!(json["candidates"][0]["steps"][0]["outcome"], "finished");
        assert_eq!(json["candidates"][0]["fallback"], false);
    }
}
