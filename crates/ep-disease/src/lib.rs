//! `ep-disease`: who is exposed, and who catches it.
//!
//! Transmission is computed in two passes per tick.  [`ContactSnapshot`] is
//! captured from the field before any agent acts; after all agents have
//! acted, [`TransmissionModel::newly_infected`] rolls one trial per exposed
//! agent against that snapshot and [`infect_all`] applies the outcome.
//! Movement during the tick therefore never changes who was exposed.
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`contact`]    | `ContactSnapshot`, `Exposure`                          |
//! | [`transmission`] | `TransmissionModel`, `infection_probability`, `infect_all` |

pub mod contact;
pub mod transmission;

#[cfg(test)]
mod tests;

pub use contact::{ContactSnapshot, Exposure};
pub use transmission::{TransmissionModel, infect_all, infection_probability};
