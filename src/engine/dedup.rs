//! Label deduplication.
//!
//! Several candidates often collapse to the same label once rules have
//! abbreviated them. Labels are kept in first-seen order so the unmodified
//! name's label always comes first.

use std::collections::HashSet;

pub(crate) fn dedup_labels(labels: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    labels.into_iter().filter(|label| seen.insert(label.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        let labels = ["B", "A", "B", "C", "A"].map(String::from);
        assert_eq!(dedup_labels(labels), vec!["B", "A", "C"]);
    }

    #[test]
    fn empty_labels_are_kept_once() {
        let labels = ["", ""].map(String::from);
        assert_eq!(dedup_labels(labels), vec![""]);
    }
}
