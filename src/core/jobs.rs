//! Job label classification.
//!
//! The sheet stores free-text job labels; the status engine and the report
//! tabs only care about a handful of categories. The legacy pages tested
//! substrings inline and drifted apart; here the rules live in one ordered
//! table, first match wins.

/// Category of a job label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobCategory {
    /// "Entering shift" labels that mark the start of a work period.
    ShiftEntry,
    /// Day-time duty at the weekday-only stations.
    DayTime,
    Patrol,
    Maintenance,
    Other,
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Substring match on the label as written (the Thai labels carry no case).
    Verbatim(&'static str),
    /// Substring match on the lowercased label.
    Lowercase(&'static str),
}

/// Ordered classification rules. ShiftEntry must come first: a label like
/// "เข้าปฏิบัติงาน Day Time" counts as entering a shift.
const RULES: [(Pattern, JobCategory); 4] = [
    (Pattern::Verbatim("เข้าปฏิบัติงาน"), JobCategory::ShiftEntry),
    (Pattern::Lowercase("day time"), JobCategory::DayTime),
    (Pattern::Lowercase("patrol"), JobCategory::Patrol),
    (Pattern::Verbatim("บำรุงรักษา"), JobCategory::Maintenance),
];

/// Classify a free-text job label.
pub fn classify(label: &str) -> JobCategory {
    let lower = label.to_lowercase();
    for (pattern, category) in &RULES {
        let hit = match pattern {
            Pattern::Verbatim(p) => label.contains(p),
            Pattern::Lowercase(p) => lower.contains(p),
        };
        if hit {
            return *category;
        }
    }
    JobCategory::Other
}
