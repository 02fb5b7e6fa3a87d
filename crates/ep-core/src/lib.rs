//! `ep-core`: foundational types for the spatial SIR epidemic simulator.
//!
//! This crate is a dependency of every other `ep-*` crate.  It intentionally
//! has no `ep-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`                                   |
//! | [`sir`]         | `SirState` compartment enum and its transitions       |
//! | [`entity`]      | `Entity` occupants and the `EntityKind` filter        |
//! | [`config`]      | `SimConfig`, `Topology`, `Policy`, `ZoneTracking`     |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (the single seeded run generator)            |
//! | [`error`]       | `EpError`, `EpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public types (JSON config)    |

pub mod config;
pub mod entity;
pub mod error;
pub mod ids;
pub mod rng;
pub mod sir;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FieldKind, Policy, SimConfig, Topology, ZoneTracking};
pub use entity::{Entity, EntityKind};
pub use error::{EpError, EpResult};
pub use ids::{AgentId, NodeId};
pub use rng::SimRng;
pub use sir::SirState;
pub use time::Tick;
