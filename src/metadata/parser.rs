/// Line prefix that introduces the comma-separated requirement list
pub const REQUIRES_MARKER: &str = "Requires:";

/// Extract the direct requirements from package metadata text
///
/// Only the first line starting with [`REQUIRES_MARKER`] is considered.
/// Tokens are trimmed and blank tokens are dropped, so a malformed list such
/// as `Requires: a,, b ,` yields `["a", "b"]`. Names keep the order in which
/// they appear; repeated names are reported once.
pub fn parse_requirements(metadata: &str) -> Vec<String> {
    let Some(line) = metadata
        .lines()
        .find(|line| line.starts_with(REQUIRES_MARKER))
    else {
        return Vec::new();
    };

    let mut requirements: Vec<String> = Vec::new();
    for token in line[REQUIRES_MARKER.len()..].split(',') {
        let name = token.trim();
        if !name.is_empty() && !requirements.iter().any(|existing| existing == name) {
            requirements.push(name.to_string());
        }
    }

    requirements
}
