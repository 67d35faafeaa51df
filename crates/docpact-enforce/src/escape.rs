//! The contract's narrow escape hatch.
//!
//! A definition-level violation is suppressed only when its definition line
//! carries a recognized token followed by a written reason. An escape
//! without a stated reason is not honored.

/// Check a captured definition line for an escape token with a non-empty
/// trailing reason. Token matching is case-insensitive; the first token
/// found decides.
pub fn has_escape_with_reason(line_text: &str, tokens: &[String]) -> bool {
    let lower = line_text.to_lowercase();
    for token in tokens {
        let token_lower = token.to_lowercase();
        let Some(idx) = lower.find(&token_lower) else {
            continue;
        };
        let after = lower[idx + token_lower.len()..].trim();
        return !after.is_empty();
    }
    false
}
