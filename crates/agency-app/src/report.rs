//! Plain-text rendering of agencies and estimates

use std::fmt::{self, Write};

use agency_domain::{Agency, Agent, Difficulty, Objective, ResourceEstimate};
use clap::ValueEnum;
use serde::Serialize;

/// Objective variants that carry a resource table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EstimateKind {
    Surveillance,
    Elimination,
    Exfiltration,
}

impl EstimateKind {
    pub fn estimate(&self, difficulty: Difficulty) -> ResourceEstimate {
        use agency_domain::model::resources;

        match self {
            EstimateKind::Surveillance => resources::surveillance(difficulty),
            EstimateKind::Elimination => resources::elimination(difficulty),
            EstimateKind::Exfiltration => resources::exfiltration(difficulty),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EstimateKind::Surveillance => "surveillance",
            EstimateKind::Elimination => "elimination",
            EstimateKind::Exfiltration => "exfiltration",
        }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn render_estimate(estimate: &ResourceEstimate) -> String {
    format!(
        "{} personnel, {} [{}]",
        estimate.personnel,
        estimate.estimated_duration,
        estimate.equipment.join(", ")
    )
}

fn render_objective(out: &mut String, index: usize, objective: &Objective) -> fmt::Result {
    write!(
        out,
        "      {}. [{}] {} ({}, {} priority",
        index,
        objective.kind().name(),
        objective.description(),
        objective.status(),
        objective.priority(),
    )?;
    if let Some(difficulty) = objective.difficulty() {
        write!(out, ", {} difficulty", difficulty)?;
    }
    out.push(')');
    if let Some(target) = objective.target() {
        write!(out, " target={}", target)?;
    }
    if let Some(location) = objective.location() {
        write!(out, " location={}", location)?;
    }
    out.push('\n');
    if let Some(estimate) = objective.estimate_resources() {
        writeln!(out, "         needs: {}", render_estimate(&estimate))?;
    }
    Ok(())
}

fn render_agent(out: &mut String, agent: &Agent) -> fmt::Result {
    writeln!(
        out,
        "  • {} ({}) - {}, joined {}",
        agent.name(),
        agent.id(),
        agent.status(),
        agent.join_date().format("%Y-%m-%d")
    )?;

    writeln!(out, "    Active: {}", agent.active_count())?;
    for (i, objective) in agent.objectives().iter().enumerate() {
        render_objective(out, i, objective)?;
    }

    writeln!(out, "    Completed: {}", agent.completed_count())?;
    for (i, objective) in agent.completed_objectives().iter().enumerate() {
        render_objective(out, i, objective)?;
    }
    Ok(())
}

pub fn render_agency(agency: &Agency) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "Agency: {} ({})",
        agency.name(),
        agency.location().unwrap_or("location unknown")
    )?;
    writeln!(out, "Founded: {}", agency.founded_date().to_rfc3339())?;
    writeln!(out, "Agents: {}", agency.len())?;
    for agent in agency.agents() {
        render_agent(&mut out, agent)?;
    }
    Ok(out)
}
