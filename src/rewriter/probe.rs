//! Line Probe
//!
//! Prefix tests and in-place edits for a single line.
//! No fence state lives here - the engine decides when each edit applies.

/// Opening fence with the `rust` language tag
pub const RUST_FENCE: &str = "```rust";

/// Bare fence marker
pub const FENCE: &str = "```";

/// Build the copy of a line used for prefix tests
///
/// Surrounding whitespace (including the newline) is trimmed and a single
/// space appended, so a bare `#` line still reads as `"# "`.
pub fn test_copy(line: &str) -> String {
    let mut probe = String::with_capacity(line.len() + 1);
    probe.push_str(line.trim());
    probe.push(' ');
    probe
}

/// `"# "` - a level-1 heading (or a lone `#`)
pub fn is_level_one_heading(probe: &str) -> bool {
    probe.starts_with("# ")
}

/// `"##"` - a level-2-or-deeper heading
pub fn is_nested_heading(probe: &str) -> bool {
    probe.starts_with("##")
}

/// ```` ```rust ```` - a fence carrying the `rust` tag
pub fn is_rust_fence(probe: &str) -> bool {
    probe.starts_with(RUST_FENCE)
}

/// ```` ``` ```` - any fence marker, tagged or not
pub fn is_fence(probe: &str) -> bool {
    probe.starts_with(FENCE)
}

/// Replace the first `##` with `#`, keeping the text on both sides
pub fn demote_heading(line: &str) -> String {
    match line.split_once("##") {
        Some((before, after)) => format!("{before}#{after}"),
        None => line.to_string(),
    }
}

/// Keep the text up to and including the first ```` ```rust ````
///
/// Everything after the tag is dropped, newline included. A line without
/// the tag comes back unchanged.
pub fn truncate_after_rust_tag(line: &str) -> String {
    match line.split_once(RUST_FENCE) {
        Some((before, _)) => format!("{before}{RUST_FENCE}"),
        None => line.to_string(),
    }
}

/// Rewrite a fence-open line to end right after its `rust` tag
///
/// Returns `None` when the line carries no ```` ```rust ```` marker.
pub fn clean_rust_fence_open(line: &str) -> Option<String> {
    line.split_once(RUST_FENCE)
        .map(|(before, _)| format!("{before}{RUST_FENCE}\n"))
}
