//! Agency - A named roster of agents
//!
//! Agency is the aggregate root. Its roster keeps insertion order and
//! does NOT enforce unique agent ids: duplicates coexist, and lookup
//! returns the first match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::agent::{Agent, AgentId};
use crate::clock::Clock;

/// The canned roster of an elite agency, in order: (name, id)
const ELITE_ROSTER: [(&str, &str); 3] = [
    ("Alpha", "elite-001"),
    ("Bravo", "elite-002"),
    ("Charlie", "elite-003"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    name: String,
    location: Option<String>,
    founded_date: DateTime<Utc>,
    agent_list: Vec<Agent>,
}

impl Agency {
    /// Create an empty agency with no location
    pub fn new(name: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            name: name.into(),
            location: None,
            founded_date: clock.now(),
            agent_list: Vec::new(),
        }
    }

    /// Builder: set location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// An agency staffed with the fixed elite roster
    ///
    /// Always three agents, Alpha first, whatever the name and location.
    pub fn elite(
        name: impl Into<String>,
        location: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        let mut agency = Self::new(name, clock).with_location(location);
        for (agent_name, id) in ELITE_ROSTER {
            agency.add_agent(Agent::new(agent_name, AgentId::new(id), clock));
        }
        debug!(agency = %agency.name, agents = agency.len(), "elite roster built");
        agency
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn founded_date(&self) -> DateTime<Utc> {
        self.founded_date
    }

    /// Agents in the order they were added
    pub fn agents(&self) -> &[Agent] {
        &self.agent_list
    }

    pub fn len(&self) -> usize {
        self.agent_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agent_list.is_empty()
    }

    // ========== Roster ==========

    /// Append an agent. No uniqueness check.
    pub fn add_agent(&mut self, agent: Agent) {
        debug!(agency = %self.name, agent_id = %agent.id(), "agent added");
        self.agent_list.push(agent);
    }

    /// First agent whose id equals `id`, scanning in insertion order
    pub fn find_agent_by_id(&self, id: &str) -> Option<&Agent> {
        self.agent_list.iter().find(|a| a.id().as_str() == id)
    }

    /// Mutable variant of [`Agency::find_agent_by_id`]
    pub fn find_agent_by_id_mut(&mut self, id: &str) -> Option<&mut Agent> {
        self.agent_list.iter_mut().find(|a| a.id().as_str() == id)
    }
}
