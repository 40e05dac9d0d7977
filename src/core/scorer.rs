// File: src/core/scorer.rs
use crate::core::types::CodingLabel;

/// Below this many matched words the label only reports direction, never strength.
pub const MINIMUM_WORDS: usize = 5;
/// A relative difference above this (roughly twice as many words of one gender)
/// is labelled "strongly" coded.
pub const STRONG_CUTOFF: f64 = 0.33;

/// Converts the two match counts into a coding label. Rules are checked in
/// order and the first one that applies wins.
pub fn assess_coding(masculine_count: usize, feminine_count: usize) -> CodingLabel {
    let total = masculine_count + feminine_count;
    let diff = feminine_count as i64 - masculine_count as i64;

    if total == 0 {
        CodingLabel::Empty
    } else if diff == 0 {
        CodingLabel::Neutral
    } else if total < MINIMUM_WORDS && diff > 0 {
        CodingLabel::FeminineCoded
    } else if total < MINIMUM_WORDS {
        CodingLabel::MasculineCoded
    } else {
        let score = diff as f64 / total as f64;
        if score > STRONG_CUTOFF {
            CodingLabel::StronglyFeminineCoded
        } else if score > 0.0 {
            CodingLabel::FeminineCoded
        } else if score < -STRONG_CUTOFF {
            CodingLabel::StronglyMasculineCoded
        } else {
            CodingLabel::MasculineCoded
        }
    }
}
