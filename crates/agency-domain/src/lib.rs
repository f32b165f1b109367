//! # Agency Domain Layer
//!
//! Agencies, their agents, and the objectives those agents carry.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/  - Agency, Agent, Objective, resource tables         ││
//! │  │  clock   - Time source port (injected into constructors)     ││
//! │  │  error   - DomainError                                       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is synchronous and in-memory. No I/O.

pub mod clock;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, Result};

pub use model::{
    agency::Agency,
    agent::{Agent, AgentId, AgentStatus},
    objective::{Objective, ObjectiveKind, ObjectiveStatus, Priority},
    resources::{Difficulty, ResourceEstimate},
};
