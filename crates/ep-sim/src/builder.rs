//! Fluent builder for constructing a [`Sim`].

use ep_behavior::{ActionChain, BehaviorModel};
use ep_core::{EpError, SimConfig};
use ep_field::Field;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<F, B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: dimensions, seed, probabilities, policies, …
/// - `F: Field`: the spatial structure agents live on; its kind must match
///   `config.topology`
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                    |
/// |-----------------|----------------------------|
/// | `.behavior(b)`  | `ActionChain::standard()`  |
///
/// # Example
///
/// ```rust,ignore
/// let grid = Grid::new(config.depth, config.width);
/// let mut sim = SimBuilder::new(config, grid).build()?;
/// sim.reset(&mut NoopObserver)?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<F: Field, B: BehaviorModel> {
    config:   SimConfig,
    field:    F,
    behavior: B,
}

impl<F: Field> SimBuilder<F, ActionChain> {
    /// Create a builder running the standard action chain.
    pub fn new(config: SimConfig, field: F) -> Self {
        Self { config, field, behavior: ActionChain::standard() }
    }
}

impl<F: Field, B: BehaviorModel> SimBuilder<F, B> {
    /// Replace the behavior model.
    pub fn behavior<B2: BehaviorModel>(self, behavior: B2) -> SimBuilder<F, B2> {
        SimBuilder { config: self.config, field: self.field, behavior }
    }

    /// Validate inputs and construct the [`Sim`].
    ///
    /// The returned sim is uninitialised; call [`Sim::reset`] before stepping.
    ///
    /// # Errors
    ///
    /// - [`EpError::Config`] if the configuration is out of range.
    /// - [`EpError::TopologyMismatch`] if the field is not the kind
    ///   `config.topology` describes.
    pub fn build(self) -> SimResult<Sim<F, B>> {
        self.config.validate()?;

        let expected = self.config.topology.field_kind();
        let got = self.field.kind();
        if expected != got {
            return Err(EpError::TopologyMismatch {
                configured: self.config.topology.name(),
                expected,
                got,
            }
            .into());
        }

        Ok(Sim::new(self.config, self.field, self.behavior))
    }
}
