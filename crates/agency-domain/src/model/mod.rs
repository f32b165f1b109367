//! Domain Models - The vocabulary of the agency
//!
//! Agency owns Agents; an Agent owns its Objectives.
//! Nothing points back up the tree.

pub mod agency;
pub mod agent;
pub mod objective;
pub mod resources;
