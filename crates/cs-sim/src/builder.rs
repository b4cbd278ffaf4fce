//! Fluent builder for constructing a [`CheckoutSim`].

use cs_core::{CheckoutConfig, Mode, SimRng};

use crate::{CheckoutSim, SimResult};

/// Fluent builder for [`CheckoutSim`].
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                                              |
/// |--------------|------------------------------------------------------|
/// | `.mode(m)`   | `config.mode`                                        |
/// | `.rng(r)`    | seeded from `config.seed`, else from OS entropy      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(CheckoutConfig::default())
///     .mode(Mode::PerStation)
///     .rng(SimRng::new(42))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: CheckoutConfig,
    rng:    Option<SimRng>,
}

impl SimBuilder {
    pub fn new(config: CheckoutConfig) -> Self {
        Self { config, rng: None }
    }

    /// Override the routing discipline.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Inject the random stream.  Takes precedence over `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration and return an engine ready to
    /// [`start`](CheckoutSim::start).
    pub fn build(self) -> SimResult<CheckoutSim> {
        self.config.validate()?;
        let rng = self
            .rng
            .unwrap_or_else(|| SimRng::from_seed_option(self.config.seed));
        Ok(CheckoutSim::new(self.config, rng))
    }
}
