/// Strips chat code-fence markup from a pasted set.
///
/// Handles a leading ```` ``` ```` fence (with or without a language tag on
/// the same line), a trailing fence, and inline single backticks. The result
/// is trimmed. Text without fences is only trimmed.
///
/// The first line is dropped only when it is empty or a known language tag
/// ([`LANGUAGE_TAGS`]); anything else on the fence line, such as a species
/// written right after the fence, is kept.
pub fn strip_code_block(content: &str) -> String {
    let mut body = content.trim();

    if let Some(rest) = body.strip_prefix("```") {
        body = match rest.split_once('\n') {
            Some((tag, remainder)) if is_language_tag(tag.trim()) => remainder,
            _ => rest,
        };
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }

    body.replace('`', "").trim().to_string()
}

/// Language tags chat clients put after an opening fence.
pub const LANGUAGE_TAGS: [&str; 6] = ["yaml", "yml", "txt", "text", "plaintext", "md"];

fn is_language_tag(tag: &str) -> bool {
    tag.is_empty() || LANGUAGE_TAGS.contains(&tag)
}
