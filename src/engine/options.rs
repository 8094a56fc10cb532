//! Options methods for BlochEngine

use super::BlochEngine;
use crate::options::Options;

impl BlochEngine {
    /// Options in use.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace all options.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
    }

    /// Mutable access for targeted overrides (e.g. from command-line flags).
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
