//! Reference names with the label each one is expected to produce first.

use crate::{CultureType, NameInput};

/// A reference input and its expected first label.
#[derive(Debug, Clone)]
pub struct Sample {
    pub input: NameInput,
    pub expected: &'static str,
}

fn sample(name: &str, culture: CultureType, surname_indices: &[usize], rank: &str, is_mdes: bool, is_doctor: bool, expected: &'static str) -> Sample {
    Sample {
        input: NameInput {
            name: name.to_string(),
            culture,
            surname_indices: surname_indices.to_vec(),
            rank: rank.to_string(),
            is_mdes,
            is_doctor,
        },
        expected,
    }
}

/// The reference table shown alongside the generator.
pub fn samples() -> Vec<Sample> {
    vec![
        sample("TAN BEE LIAN", CultureType::ChineseEnglish, &[0], "CPT", false, false, "TAN BEE LIAN"),
        sample("TAN ZHI QING", CultureType::ChineseEnglish, &[0], "ME3-2", true, false, "ME3-2 TAN Z Q"),
        sample("TAN JUN WEI", CultureType::ChineseEnglish, &[0], "CPT", false, true, "DR TAN JUN WEI"),
        sample("ALEXANDER MAXIMUS CHONG CHEE KEONG", CultureType::ChineseEnglish, &[2], "ME2-2", true, false, "ME2-2 A M CHONG"),
        sample("MOHAMED AHMAD BIN BAHARUDIN", CultureType::Malay, &[2, 3], "CPL", false, false, "MD AHMAD"),
        sample("ADYA D/O NARAIN", CultureType::Indian, &[1, 2], "ME4-3", true, false, "ME4-3 ADYA"),
    ]
}
