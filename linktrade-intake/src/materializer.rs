use crate::rules::{MaterializeStatus, Materialized, RulesEngine};
use linktrade_types::{IdentityOverrides, Template};
use tracing::{debug, warn};

/// Expands `template` with the generator seeded for `generation`, then
/// stamps the requester's identity overrides onto the result.
///
/// Never fails: a generator that cannot satisfy the template still yields
/// its best attempt, flagged through [`Materialized::status`].
pub fn materialize(
    rules: &dyn RulesEngine,
    template: &Template,
    overrides: &IdentityOverrides,
    generation: u8,
) -> Materialized {
    let trainer = rules.trainer_context(generation);
    let mut materialized = rules.materialize(template, &trainer);

    match materialized.status {
        MaterializeStatus::Regenerated => {
            debug!(species = %template.species, "template materialized");
        }
        status => {
            warn!(species = %template.species, ?status, "generator returned a best attempt");
        }
    }

    materialized.entity.apply_overrides(overrides);
    materialized
}
