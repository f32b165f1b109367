//! # Agency Application
//!
//! Wires the domain to the outside world:
//!
//! - `config` - roster files (JSON / YAML) turned into an Agency
//! - `report` - text and JSON output
//! - `apply_completions` - `AGENT_ID:INDEX` completions requested on the command line

pub mod config;
pub mod report;

use agency_domain::Agency;
use anyhow::{anyhow, Context};
use tracing::info;

/// Parse `AGENT_ID:INDEX`. The id may itself contain colons.
pub fn parse_completion(entry: &str) -> anyhow::Result<(String, usize)> {
    let (id, index) = entry
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("expected AGENT_ID:INDEX, got '{}'", entry))?;
    let index = index
        .parse::<usize>()
        .with_context(|| format!("invalid objective index in '{}'", entry))?;
    Ok((id.to_string(), index))
}

/// Complete objectives on rostered agents, in the order given
pub fn apply_completions(agency: &mut Agency, entries: &[String]) -> anyhow::Result<()> {
    for entry in entries {
        let (id, index) = parse_completion(entry)?;
        let agent = agency
            .find_agent_by_id_mut(&id)
            .ok_or_else(|| anyhow!("no agent with id '{}'", id))?;
        let objective = agent.complete_objective(index)?;
        info!(agent_id = %id, objective = objective.description(), "objective completed");
    }
    Ok(())
}
