//! `ep-agent`: agent state, storage, and population generation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`agent`]     | `Agent` value type, `Compliance` flags                     |
//! | [`store`]     | `AgentStore` (SoA arrays indexed by `AgentId`)             |
//! | [`generator`] | `AgentGenerator`, `Spawn`, `populate`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod agent;
pub mod generator;
pub mod store;


pub use agent::{Agent, Compliance};
pub use generator::{AgentGenerator, Spawn, populate};
pub use store::AgentStore;
