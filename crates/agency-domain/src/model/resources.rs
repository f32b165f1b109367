//! Resources - What an objective is expected to cost
//!
//! Difficulty and ResourceEstimate are Value Objects.
//! Each objective variant owns a fixed lookup table keyed only by
//! difficulty; nothing else about the objective affects the estimate.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How hard an objective is expected to be
///
/// Ordered `Low < Medium < High`; every table below is monotonic in it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Difficulty {
    Low,
    #[default]
    Medium,
    High,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        }
    }

    /// All levels, easiest first
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Low, Difficulty::Medium, Difficulty::High]
    }
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::str::FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Difficulty::Low),
            "medium" => Ok(Difficulty::Medium),
            "high" => Ok(Difficulty::High),
            _ => Err(DomainError::unknown("difficulty", s)),
        }
    }
}

impl From<Difficulty> for &'static str {
    fn from(value: Difficulty) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for Difficulty {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Personnel, equipment and time an objective needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEstimate {
    pub personnel: u32,
    pub equipment: Vec<String>,
    pub estimated_duration: String,
}

impl ResourceEstimate {
    fn new(personnel: u32, equipment: &[&str], estimated_duration: &str) -> Self {
        Self {
            personnel,
            equipment: equipment.iter().map(|e| e.to_string()).collect(),
            estimated_duration: estimated_duration.to_string(),
        }
    }
}

#[cfg(test)]
impl ResourceEstimate {
    pub(crate) fn requires(&self, item: &str) -> bool {
        self.equipment.iter().any(|e| e == item)
    }
}

// ========== Lookup Tables ==========

/// Observation grows from a single operator to a week-long team
pub fn surveillance(difficulty: Difficulty) -> ResourceEstimate {
    match difficulty {
        Difficulty::Low => ResourceEstimate::new(1, &["cameras"], "1 day"),
        Difficulty::Medium => {
            ResourceEstimate::new(2, &["cameras", "listening devices"], "3 days")
        }
        Difficulty::High => ResourceEstimate::new(
            3,
            &["cameras", "listening devices", "drones"],
            "7 days",
        ),
    }
}

pub fn elimination(difficulty: Difficulty) -> ResourceEstimate {
    match difficulty {
        Difficulty::Low => ResourceEstimate::new(2, &["weapons"], "1 day"),
        Difficulty::Medium => ResourceEstimate::new(3, &["weapons", "tactical gear"], "2 days"),
        Difficulty::High => ResourceEstimate::new(
            5,
            &["weapons", "tactical gear", "explosives"],
            "5 days",
        ),
    }
}

/// Extraction scales from one vehicle run to air-supported withdrawal
pub fn exfiltration(difficulty: Difficulty) -> ResourceEstimate {
    match difficulty {
        Difficulty::Low => ResourceEstimate::new(2, &["transport vehicles"], "12 hours"),
        Difficulty::Medium => ResourceEstimate::new(
            3,
            &["transport vehicles", "forged documents"],
            "1 day",
        ),
        Difficulty::High => ResourceEstimate::new(
            4,
            &["transport vehicles", "forged documents", "air support"],
            "3 days",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Durations in the tables, converted to hours for comparison
    fn hours(duration: &str) -> u32 {
        let (n, unit) = duration.split_once(' ').unwrap();
        let n: u32 = n.parse().unwrap();
        match unit {
            "hour" | "hours" => n,
            "day" | "days" => n * 24,
            other => panic!("unexpected unit {other}"),
        }
    }

    fn assert_monotonic(table: fn(Difficulty) -> ResourceEstimate) {
        for pair in Difficulty::all().windows(2) {
            let easier = table(pair[0]);
            let harder = table(pair[1]);
            assert!(harder.personnel >= easier.personnel);
            assert!(harder.equipment.len() >= easier.equipment.len());
            assert!(hours(&harder.estimated_duration) >= hours(&easier.estimated_duration));
        }
    }

    #[test]
    fn test_tables_are_monotonic() {
        assert_monotonic(surveillance);
        assert_monotonic(elimination);
        assert_monotonic(exfiltration);
    }

    #[test]
    fn test_known_points() {
        let high_watch = surveillance(Difficulty::High);
        assert_eq!(high_watch.personnel, 3);
        assert!(high_watch.requires("cameras"));
        assert_eq!(high_watch.estimated_duration, "7 days");

        let medium_strike = elimination(Difficulty::Medium);
        assert_eq!(medium_strike.personnel, 3);
        assert!(medium_strike.requires("weapons"));

        let low_extract = exfiltration(Difficulty::Low);
        assert_eq!(low_extract.personnel, 2);
        assert!(low_extract.requires("transport vehicles"));
        assert_eq!(low_extract.estimated_duration, "12 hours");
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("HIGH".parse::<Difficulty>().unwrap(), Difficulty::High);
        assert_eq!(" low ".parse::<Difficulty>().unwrap(), Difficulty::Low);
        assert!(matches!(
            "extreme".parse::<Difficulty>(),
            Err(DomainError::UnknownValue { kind: "difficulty", .. })
        ));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_estimate_serializes_camel_case() {
        let json = serde_json::to_value(exfiltration(Difficulty::Low)).unwrap();
        assert_eq!(json["personnel"], 2);
        assert_eq!(json["estimatedDuration"], "12 hours");
        assert_eq!(json["equipment"][0], "transport vehicles");
    }
}
