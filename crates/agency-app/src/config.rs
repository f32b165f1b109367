//! Roster configuration - seed an Agency from a JSON or YAML file
//!
//! ```yaml
//! name: Field Office
//! location: Lisbon
//! agents:
//!   - name: Ana
//!     id: "001"
//!     status: active
//!     objectives:
//!       - type: surveillance
//!         description: Watch the harbour
//!         target: Freighter
//!         difficulty: high
//! ```

use std::path::Path;

use agency_domain::{
    Agency, Agent, AgentId, AgentStatus, Clock, Objective, ObjectiveKind, ObjectiveStatus,
    Priority,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported roster format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// Top-level roster file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterConfig {
    pub name: String,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub agents: Vec<AgentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    pub name: String,
    pub id: String,

    #[serde(default)]
    pub status: AgentStatus,

    /// Assigned in file order
    #[serde(default)]
    pub objectives: Vec<ObjectiveConfig>,
}

/// One objective; `type` selects the variant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveConfig {
    pub description: String,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub status: ObjectiveStatus,

    #[serde(flatten)]
    pub kind: ObjectiveKind,
}

impl ObjectiveConfig {
    pub fn to_objective(&self, clock: &dyn Clock) -> Objective {
        let objective = match &self.kind {
            ObjectiveKind::General => Objective::new(&self.description, clock),
            ObjectiveKind::Surveillance { target, difficulty } => {
                Objective::surveillance(&self.description, target, *difficulty, clock)
            }
            ObjectiveKind::Elimination { target, difficulty } => {
                Objective::elimination(&self.description, target, *difficulty, clock)
            }
            ObjectiveKind::Exfiltration {
                location,
                difficulty,
            } => Objective::exfiltration(&self.description, location, *difficulty, clock),
        };
        objective
            .with_priority(self.priority)
            .with_status(self.status)
    }
}

impl RosterConfig {
    /// Load a roster, choosing the parser by file extension
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let content = std::fs::read_to_string(path)?;
        let config = match extension.as_str() {
            "json" => Self::from_json(&content)?,
            "yaml" | "yml" => Self::from_yaml(&content)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        info!(
            path = %path.display(),
            agency = %config.name,
            agents = config.agents.len(),
            "roster loaded"
        );
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Build the agency, stamping every date from `clock`
    pub fn build(&self, clock: &dyn Clock) -> Agency {
        let mut agency = Agency::new(&self.name, clock);
        if let Some(location) = &self.location {
            agency = agency.with_location(location);
        }

        for agent_config in &self.agents {
            let mut agent = Agent::new(&agent_config.name, AgentId::new(&agent_config.id), clock)
                .with_status(agent_config.status);
            for objective in &agent_config.objectives {
                agent.assign_objective(objective.to_objective(clock));
            }
            agency.add_agent(agent);
        }

        agency
    }
}
