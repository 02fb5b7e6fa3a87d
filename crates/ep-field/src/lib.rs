//! `ep-field`: the spaces agents live in.
//!
//! A field maps locations to at most one occupant and carries a quarantine
//! zone that is tracked independently of occupancy.  Two implementations
//! share the [`Field`] trait: a toroidal grid and a contact network built
//! from a graph.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`field`]      | `Field` trait, `rank_by_crowding`, `first_outside_zone`    |
//! | [`grid`]       | `Grid`, `GridLocation`                                     |
//! | [`network`]    | `ContactNetwork` (CSR adjacency), `NetworkBuilder`         |
//! | [`generators`] | Kleinberg small-world and Barabási–Albert generators      |
//! | [`zone`]       | `QuarantineZone`                                           |
//! | [`error`]      | `FieldError`, `FieldResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `serde`   | Derives `Serialize`/`Deserialize` on public location types. |
//! | `fx-hash` | Uses FxHash for the quarantine-zone sets.                  |

pub mod error;
pub mod field;
pub mod generators;
pub mod grid;
pub mod network;
pub mod zone;

#[cfg(test)]
mod tests;

pub use error::{FieldError, FieldResult};
pub use field::{Field, first_outside_zone, rank_by_crowding};
pub use generators::{scale_free, small_world};
pub use grid::{Grid, GridLocation};
pub use network::{ContactNetwork, NetworkBuilder};
pub use zone::QuarantineZone;
