//! `ep-behavior`: what agents do on their turn.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`intent`]  | `Intent` enum (`MoveTo`, `BeginQuarantine`, `EndQuarantine`), `Decision` |
//! | [`context`] | `TickContext<'a, F>`: the mutable world one agent acts on       |
//! | [`action`]  | `Action`: the five decision rules                               |
//! | [`chain`]   | `ActionChain`: first-handled-wins rule priority                 |
//! | [`model`]   | `BehaviorModel` trait                                           |
//! | [`noop`]    | `NoopBehavior`: agents never act                                |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! Each rule is a pure function of the agent, the field and the policy: it
//! reads, it never writes, and returns a [`Decision`] listing the
//! [`Intent`]s it wants.  [`TickContext::apply`] is the only place intents
//! mutate the field and the agent store.  The chain applies one rule's
//! intents before asking the next rule, so a rule that falls through (an
//! agent leaving quarantine) leaves the zone updated for the rules below it.

pub mod action;
pub mod chain;
pub mod context;
pub mod error;
pub mod intent;
pub mod model;
pub mod noop;


pub use action::Action;
pub use chain::ActionChain;
pub use context::TickContext;
pub use error::{BehaviorError, BehaviorResult};
pub use intent::{Decision, Intent};
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
