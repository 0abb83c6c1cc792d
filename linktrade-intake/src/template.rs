use crate::error::Rejection;
use crate::rules::RulesEngine;
use crate::splitter::SplitSpec;
use linktrade_types::Template;
use tracing::debug;

/// Parses the description lines of `split` into a template.
///
/// Splitter extras and parser diagnostics are combined, extras first. If
/// the combined list is non-empty the template is refused and the rejection
/// lists every offending line.
pub fn build_template(rules: &dyn RulesEngine, split: &SplitSpec) -> Result<Template, Rejection> {
    let template = rules.parse_set(&split.description_text());

    if split.invalid.is_empty() && template.is_clean() {
        return Ok(template);
    }

    let lines: Vec<String> = split
        .invalid
        .iter()
        .chain(template.invalid_lines.iter())
        .cloned()
        .collect();
    debug!(
        extras = split.invalid.len(),
        parser = template.invalid_lines.len(),
        "set has unparseable lines"
    );
    Err(Rejection::ParseDiagnostic { lines })
}
