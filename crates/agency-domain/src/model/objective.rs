//! Objective - A unit of work handed to an agent
//!
//! An Objective carries the fields every piece of work shares
//! (description, priority, status, creation date) plus an
//! [`ObjectiveKind`] payload. Surveillance, elimination and exfiltration
//! are variants of the kind, so each of them *is* an Objective.
//!
//! Status transitions are unrestricted: any status may overwrite any other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resources::{self, Difficulty, ResourceEstimate};
use crate::clock::Clock;
use crate::error::DomainError;

/// How urgent an objective is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::str::FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(DomainError::unknown("priority", s)),
        }
    }
}

impl From<Priority> for &'static str {
    fn from(value: Priority) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for Priority {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where an objective stands
///
/// A closed set. Arbitrary text is rejected at parse time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ObjectiveStatus {
    /// Not started yet
    #[default]
    Pending,
    /// Being worked on
    InProgress,
    /// Done; set automatically when an agent completes the objective
    Completed,
}

impl ObjectiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectiveStatus::Pending => "pending",
            ObjectiveStatus::InProgress => "in-progress",
            ObjectiveStatus::Completed => "completed",
        }
    }
}

impl core::fmt::Display for ObjectiveStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::str::FromStr for ObjectiveStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ObjectiveStatus::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(ObjectiveStatus::InProgress),
            "completed" => Ok(ObjectiveStatus::Completed),
            _ => Err(DomainError::unknown("objective status", s)),
        }
    }
}

impl From<ObjectiveStatus> for &'static str {
    fn from(value: ObjectiveStatus) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for ObjectiveStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The specialization of an objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ObjectiveKind {
    /// Plain objective with no resource table
    General,
    /// Observe a subject
    Surveillance {
        target: String,
        #[serde(default)]
        difficulty: Difficulty,
    },
    /// Neutralize a subject
    Elimination {
        target: String,
        #[serde(default)]
        difficulty: Difficulty,
    },
    /// Extract from a location
    Exfiltration {
        location: String,
        #[serde(default)]
        difficulty: Difficulty,
    },
}

impl ObjectiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectiveKind::General => "general",
            ObjectiveKind::Surveillance { .. } => "surveillance",
            ObjectiveKind::Elimination { .. } => "elimination",
            ObjectiveKind::Exfiltration { .. } => "exfiltration",
        }
    }

    /// Look up this variant's table. `General` has none.
    pub fn estimate_resources(&self) -> Option<ResourceEstimate> {
        match self {
            ObjectiveKind::General => None,
            ObjectiveKind::Surveillance { difficulty, .. } => {
                Some(resources::surveillance(*difficulty))
            }
            ObjectiveKind::Elimination { difficulty, .. } => {
                Some(resources::elimination(*difficulty))
            }
            ObjectiveKind::Exfiltration { difficulty, .. } => {
                Some(resources::exfiltration(*difficulty))
            }
        }
    }
}

/// Objective - work owned by exactly one agent at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    description: String,
    priority: Priority,
    status: ObjectiveStatus,
    created_date: DateTime<Utc>,
    kind: ObjectiveKind,
}

impl Objective {
    /// Create a general objective: medium priority, pending
    pub fn new(description: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::with_kind(description, ObjectiveKind::General, clock)
    }

    fn with_kind(description: impl Into<String>, kind: ObjectiveKind, clock: &dyn Clock) -> Self {
        Self {
            description: description.into(),
            priority: Priority::default(),
            status: ObjectiveStatus::default(),
            created_date: clock.now(),
            kind,
        }
    }

    /// Builder: set priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Builder: set initial status
    pub fn with_status(mut self, status: ObjectiveStatus) -> Self {
        self.status = status;
        self
    }

    // ========== Convenience Constructors ==========

    /// A pending objective with high priority
    pub fn urgent(description: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::new(description, clock).with_priority(Priority::High)
    }

    pub fn surveillance(
        description: impl Into<String>,
        target: impl Into<String>,
        difficulty: Difficulty,
        clock: &dyn Clock,
    ) -> Self {
        Self::with_kind(
            description,
            ObjectiveKind::Surveillance {
                target: target.into(),
                difficulty,
            },
            clock,
        )
    }

    pub fn elimination(
        description: impl Into<String>,
        target: impl Into<String>,
        difficulty: Difficulty,
        clock: &dyn Clock,
    ) -> Self {
        Self::with_kind(
            description,
            ObjectiveKind::Elimination {
                target: target.into(),
                difficulty,
            },
            clock,
        )
    }

    pub fn exfiltration(
        description: impl Into<String>,
        location: impl Into<String>,
        difficulty: Difficulty,
        clock: &dyn Clock,
    ) -> Self {
        Self::with_kind(
            description,
            ObjectiveKind::Exfiltration {
                location: location.into(),
                difficulty,
            },
            clock,
        )
    }

    // ========== Getters ==========

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> ObjectiveStatus {
        self.status
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    pub fn kind(&self) -> &ObjectiveKind {
        &self.kind
    }

    /// Subject of a surveillance or elimination
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            ObjectiveKind::Surveillance { target, .. }
            | ObjectiveKind::Elimination { target, .. } => Some(target.as_str()),
            _ => None,
        }
    }

    /// Extraction point of an exfiltration
    pub fn location(&self) -> Option<&str> {
        match &self.kind {
            ObjectiveKind::Exfiltration { location, .. } => Some(location.as_str()),
            _ => None,
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match &self.kind {
            ObjectiveKind::General => None,
            ObjectiveKind::Surveillance { difficulty, .. }
            | ObjectiveKind::Elimination { difficulty, .. }
            | ObjectiveKind::Exfiltration { difficulty, .. } => Some(*difficulty),
        }
    }

    // ========== Predicates ==========

    pub fn is_surveillance(&self) -> bool {
        matches!(self.kind, ObjectiveKind::Surveillance { .. })
    }

    pub fn is_elimination(&self) -> bool {
        matches!(self.kind, ObjectiveKind::Elimination { .. })
    }

    pub fn is_exfiltration(&self) -> bool {
        matches!(self.kind, ObjectiveKind::Exfiltration { .. })
    }

    // ========== Mutations ==========

    /// Overwrite the status, returning the new value
    pub fn update_status(&mut self, status: ObjectiveStatus) -> ObjectiveStatus {
        self.status = status;
        self.status
    }

    /// Resources this objective needs, keyed only by its difficulty
    pub fn estimate_resources(&self) -> Option<ResourceEstimate> {
        self.kind.estimate_resources()
    }
}
