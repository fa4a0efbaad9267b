/**
 * ============================================================================
 * CONFIG VALIDATION MODULE
 * ============================================================================
 *
 * PURPOSE: Input validation shared by the interactive session and the
 * batch-mode config loader
 *
 * RULES:
 * - Names: lowercase alnum + underscore, never empty
 * - Namespaces: absolute, slash-separated alnum/underscore segments
 * - Frame ids / topics: same segment grammar, no leading slash
 * - Selections: comma-separated indices or "all"; duplicates are accepted
 *
 * ============================================================================
 */

use once_cell::sync::Lazy;
use regex::Regex;

// Absolute namespace: /segment(/segment)*
static NAMESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/([A-Za-z0-9_]+/)*[A-Za-z0-9_]+$").unwrap());

// Relative name: segment(/segment)*
static REL_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+(/[A-Za-z0-9_]+)*$").unwrap());

/**
 * Sanitize a friendly camera name: trim, lowercase, spaces to underscores,
 * strip everything outside [a-z0-9_]. An empty result is an error.
 */
pub fn sanitize_name(name: &str) -> Result<String, String> {
    let lowered = name.trim().to_lowercase().replace(' ', "_");
    let sanitized: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect();

    if sanitized.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    Ok(sanitized)
}

// True when value is a well-formed absolute ROS namespace
pub fn is_valid_namespace(value: &str) -> bool {
    NAMESPACE_PATTERN.is_match(value)
}

// True when value is a well-formed relative topic or frame id
pub fn is_valid_rel_name(value: &str) -> bool {
    REL_NAME_PATTERN.is_match(value)
}

// Fully qualified topic from namespace + relative topic
pub fn join_topic(namespace: &str, image_topic: &str) -> String {
    format!(
        "{}/{}",
        namespace.trim_end_matches('/'),
        image_topic.trim_start_matches('/')
    )
}

/**
 * Parse a device selection string against `max_idx` devices.
 *
 * "all"/"a" (any case) selects every index. Otherwise the input is a
 * comma-separated list of nonnegative integers, each < max_idx. Duplicate
 * indices are kept as entered.
 */
pub fn parse_selection(raw: &str, max_idx: usize) -> Result<Vec<usize>, String> {
    let raw = raw.trim().to_lowercase();
    if raw == "a" || raw == "all" {
        return Ok((0..max_idx).collect());
    }

    let mut selected = Vec::new();
    for part in raw.split(',').map(|p| p.trim()).filter(|p| !p.is_empty()) {
        if !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Invalid selection: {}", part));
        }
        let idx: usize = part
            .parse()
            .map_err(|_| format!("Invalid selection: {}", part))?;
        if idx >= max_idx {
            return Err(format!("Out of range: {}", idx));
        }
        selected.push(idx);
    }

    if selected.is_empty() {
        return Err("No selection".to_string());
    }
    Ok(selected)
}

/**
 * Parse a selection and require exactly `expected_count` entries.
 *
 * The count is checked against the raw token count, so duplicated indices
 * each count once. "0,0" with an expected count of 2 is accepted and
 * configures the same physical device twice.
 */
pub fn parse_selection_with_count(
    raw: &str,
    max_idx: usize,
    expected_count: usize,
) -> Result<Vec<usize>, String> {
    let selected = parse_selection(raw, max_idx)?;
    if selected.len() != expected_count {
        return Err(format!(
            "Expected {} devices, got {}",
            expected_count,
            selected.len()
        ));
    }
    Ok(selected)
}
