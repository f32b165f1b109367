//! Agent - An operative who carries objectives
//!
//! Agent is an Entity. It owns two ordered lists of objectives:
//! active work in assignment order, and history in completion order.
//! An objective lives in exactly one of the two lists; completing it
//! moves it from the first to the end of the second.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::objective::{Objective, ObjectiveStatus};
use crate::clock::Clock;
use crate::error::{DomainError, Result};

/// Identifier for an Agent
///
/// Meant to be unique within an agency, but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standing of an agent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AgentStatus {
    #[default]
    Active,
    Inactive,
    Compromised,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Inactive => "inactive",
            AgentStatus::Compromised => "compromised",
        }
    }

}

impl core::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::str::FromStr for AgentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(AgentStatus::Active),
            "inactive" => Ok(AgentStatus::Inactive),
            "compromised" => Ok(AgentStatus::Compromised),
            _ => Err(DomainError::unknown("agent status", s)),
        }
    }
}

impl From<AgentStatus> for &'static str {
    fn from(value: AgentStatus) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for AgentStatus {
    type Error = DomainError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Agent - identity plus a roster of objectives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    id: AgentId,
    name: String,
    status: AgentStatus,
    join_date: DateTime<Utc>,
    objectives: Vec<Objective>,
    completed_objectives: Vec<Objective>,
}

impl Agent {
    /// Create an active agent with no objectives
    pub fn new(name: impl Into<String>, id: AgentId, clock: &dyn Clock) -> Self {
        Self {
            id,
            name: name.into(),
            status: AgentStatus::default(),
            join_date: clock.now(),
            objectives: Vec::new(),
            completed_objectives: Vec::new(),
        }
    }

    /// Builder: set initial status
    pub fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = status;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> AgentStatus {
        self.status
    }

    pub fn join_date(&self) -> DateTime<Utc> {
        self.join_date
    }

    /// Active objectives, in assignment order
    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// Finished objectives, in completion order
    pub fn completed_objectives(&self) -> &[Objective] {
        &self.completed_objectives
    }

    pub fn active_count(&self) -> usize {
        self.objectives.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_objectives.len()
    }

    // ========== Mutations ==========

    /// Append an objective to the active list. Duplicates are allowed.
    pub fn assign_objective(&mut self, objective: Objective) {
        debug!(
            agent_id = %self.id,
            kind = objective.kind().name(),
            description = objective.description(),
            "objective assigned"
        );
        self.objectives.push(objective);
    }

    /// Move the active objective at `index` to the completed list
    ///
    /// The objective's status becomes `Completed`. Returns the moved
    /// objective, now the last completed entry. An out-of-range index
    /// leaves the agent untouched.
    pub fn complete_objective(&mut self, index: usize) -> Result<&Objective> {
        if index >= self.objectives.len() {
            warn!(
                agent_id = %self.id,
                index,
                len = self.objectives.len(),
                "objective index out of range"
            );
            return Err(DomainError::ObjectiveOutOfRange {
                index,
                len: self.objectives.len(),
            });
        }

        let mut objective = self.objectives.remove(index);
        objective.update_status(ObjectiveStatus::Completed);
        debug!(
            agent_id = %self.id,
            description = objective.description(),
            "objective completed"
        );
        self.completed_objectives.push(objective);

        Ok(&self.completed_objectives[self.completed_objectives.len() - 1])
    }

    /// Overwrite the status, returning the new value
    pub fn update_status(&mut self, status: AgentStatus) -> AgentStatus {
        debug!(agent_id = %self.id, from = %self.status, to = %status, "agent status changed");
        self.status = status;
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::resources::Difficulty;
    use chrono::TimeZone;

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_agent_creation() {
        let clock = clock();
        let agent = Agent::new("Test Agent", AgentId::new("001"), &clock);

        assert_eq!(agent.name(), "Test Agent");
        assert_eq!(agent.id().as_str(), "001");
        assert_eq!(agent.status(), AgentStatus::Active);
        assert_eq!(agent.join_date(), clock.now());
        assert!(agent.objectives().is_empty());
        assert!(agent.completed_objectives().is_empty());
    }

    #[test]
    fn test_agent_with_status() {
        let agent =
            Agent::new("Test Agent", AgentId::new("001"), &clock()).with_status(AgentStatus::Inactive);
        assert_eq!(agent.status(), AgentStatus::Inactive);
    }

    #[test]
    fn test_update_status() {
        let mut agent = Agent::new("Test Agent", AgentId::new("001"), &clock());

        let new_status = agent.update_status(AgentStatus::Compromised);
        assert_eq!(new_status, AgentStatus::Compromised);
        assert_eq!(agent.status(), AgentStatus::Compromised);
    }

    #[test]
    fn test_assign_appends_in_order() {
        let clock = clock();
        let mut agent = Agent::new("Test Agent", AgentId::new("001"), &clock);

        agent.assign_objective(Objective::new("First", &clock));
        agent.assign_objective(Objective::exfiltration("Second", "Dock 9", Difficulty::Low, &clock));

        assert_eq!(agent.active_count(), 2);
        assert_eq!(agent.objectives()[1].description(), "Second");
        assert!(agent.completed_objectives().is_empty());
    }

    #[test]
    fn test_assign_leaves_history_untouched() {
        let clock = clock();
        let mut agent = Agent::new("Test Agent", AgentId::new("001"), &clock);
        agent.assign_objective(Objective::new("Done", &clock));
        agent.complete_objective(0).unwrap();
        let history = agent.completed_objectives().to_vec();

        agent.assign_objective(Objective::urgent("Next", &clock));

        assert_eq!(agent.completed_objectives(), history.as_slice());
        assert_eq!(agent.objectives().last().unwrap().description(), "Next");
    }

    #[test]
    fn test_assign_allows_duplicates() {
        let clock = clock();
        let mut agent = Agent::new("Test Agent", AgentId::new("001"), &clock);
        let objective = Objective::new("Same", &clock);

        agent.assign_objective(objective.clone());
        agent.assign_objective(objective);

        assert_eq!(agent.active_count(), 2);
        assert_eq!(agent.objectives()[0], agent.objectives()[1]);
    }

    #[test]
    fn test_complete_objective_moves_it() {
        let clock = clock();
        let mut agent = Agent::new("Test Agent", AgentId::new("001"), &clock);
        let objective = Objective::new("Test Objective", &clock);
        agent.assign_objective(objective.clone());

        let completed = agent.complete_objective(0).unwrap();
        assert_eq!(completed.description(), objective.description());
        assert_eq!(completed.status(), ObjectiveStatus::Completed);

        assert_eq!(agent.objectives().len(), 0);
        assert_eq!(agent.completed_objectives().len(), 1);
        assert_eq!(
            agent.completed_objectives()[0].status(),
            ObjectiveStatus::Completed
        );
    }

    #[test]
    fn test_complete_middle_objective_keeps_order() {
        let clock = clock();
        let mut agent = Agent::new("Test Agent", AgentId::new("001"), &clock);
        for description in ["a", "b", "c"] {
            agent.assign_objective(Objective::new(description, &clock));
        }

        agent.complete_objective(1).unwrap();
        agent.complete_objective(0).unwrap();

        let active: Vec<_> = agent.objectives().iter().map(|o| o.description()).collect();
        let done: Vec<_> = agent
            .completed_objectives()
            .iter()
            .map(|o| o.description())
            .collect();
        assert_eq!(active, ["c"]);
        assert_eq!(done, ["b", "a"]);
    }

    #[test]
    fn test_complete_out_of_range() {
        let clock = clock();
        let mut agent = Agent::new("Test Agent", AgentId::new("001"), &clock);
        agent.assign_objective(Objective::new("Only", &clock));

        let result = agent.complete_objective(1);
        assert_eq!(
            result.unwrap_err(),
            DomainError::ObjectiveOutOfRange { index: 1, len: 1 }
        );

        // Agent is unchanged
        assert_eq!(agent.active_count(), 1);
        assert_eq!(agent.completed_count(), 0);
        assert_eq!(agent.objectives()[0].status(), ObjectiveStatus::Pending);
    }

    #[test]
    fn test_complete_on_empty_agent() {
        let mut agent = Agent::new("Test Agent", AgentId::new("001"), &clock());
        assert!(matches!(
            agent.complete_objective(0),
            Err(DomainError::ObjectiveOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_status_parsing() {
        for status in [
            AgentStatus::Active,
            AgentStatus::Inactive,
            AgentStatus::Compromised,
        ] {
            assert_eq!(status.as_str().parse::<AgentStatus>().unwrap(), status);
        }
        assert!("retired".parse::<AgentStatus>().is_err());
    }
}
