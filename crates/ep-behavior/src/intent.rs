//! Agent intents: the changes a rule asks for.

/// A change one agent wants made to the world.
///
/// Intents are produced by [`Action::decide`](crate::Action::decide) and
/// consumed by [`TickContext::apply`](crate::TickContext::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent<L> {
    /// Move to `L`.  Moving to the current location is a no-op.
    MoveTo(L),

    /// Start quarantining, contributing these locations to the zone.
    BeginQuarantine(Vec<L>),

    /// Stop quarantining.  The locations are the agent's adjacency as of
    /// now; they are what a flat zone removes, while a tracked zone releases
    /// whatever the agent originally contributed.
    EndQuarantine(Vec<L>),
}

/// The outcome of asking one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision<L> {
    /// `true` ends the chain for this agent's turn.
    pub handled: bool,
    pub intents: Vec<Intent<L>>,
}

impl<L> Decision<L> {
    /// Rule does not apply; nothing to do.
    pub fn pass() -> Self {
        Self { handled: false, intents: Vec::new() }
    }

    /// Rule applies and ends the turn.
    pub fn handled(intents: Vec<Intent<L>>) -> Self {
        Self { handled: true, intents }
    }

    /// Rule produced intents but lets the next rule run too.
    pub fn fall_through(intents: Vec<Intent<L>>) -> Self {
        Self { handled: false, intents }
    }

    /// Handled, with a single move if `to` is `Some`.
    pub fn handled_move(to: Option<L>) -> Self {
        Self::handled(to.map(Intent::MoveTo).into_iter().collect())
    }
}
