//! Random link code generation.

use linktrade_intake::QueueSettings;
use linktrade_types::LinkCode;
use std::ops::RangeInclusive;

/// Draws link codes uniformly from an inclusive range.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    range: RangeInclusive<u32>,
}

impl CodeGenerator {
    /// Builds a generator over the settings' code range. Bounds above
    /// [`LinkCode::MAX`] or an inverted range collapse to the valid part.
    pub fn new(settings: &QueueSettings) -> Self {
        let max = settings.trade_code_max.min(LinkCode::MAX);
        let min = settings.trade_code_min.min(max);
        Self { range: min..=max }
    }

    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }

    /// Draws a fresh code.
    pub fn next(&self) -> LinkCode {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        LinkCode::saturating(rng.gen_range(self.range.clone()))
    }
}
