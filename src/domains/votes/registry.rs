//! Tool Registry - the default set of vote-able tools.
//!
//! The store is seeded from this list unless `VOTE_TOOLS` overrides it.
//! When adding a new tool, add it here; canonical casing is taken as written.

/// Canonical names registered when no override is configured.
pub const DEFAULT_TOOLS: &[&str] = &[
    "Ansible",
    "Visual_studio",
    "Docker",
    "Prometheus",
    "Git",
    "Jenkins",
];

/// Get the list of default tool names as owned strings.
pub fn tool_names() -> Vec<String> {
    DEFAULT_TOOLS.iter().map(|name| name.to_string()).collect()
}

/// Parse a comma-separated tool list, dropping empty entries.
///
/// Returns `None` if nothing usable remains, so callers can fall back
/// to the defaults.
pub fn parse_tool_list(raw: &str) -> Option<Vec<String>> {
    let names: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if names.is_empty() { None } else { Some(names) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_names() {
        let names = tool_names();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"Docker".to_string()));
        assert!(names.contains(&"Visual_studio".to_string()));
    }

    #[test]
    fn test_parse_tool_list() {
        let names = parse_tool_list(" Terraform, Helm ,,Vault ").unwrap();
        assert_eq!(names, vec!["Terraform", "Helm", "Vault"]);
    }

    #[test]
    fn test_parse_tool_list_empty() {
        assert!(parse_tool_list("").is_none());
        assert!(parse_tool_list(" , ,").is_none());
    }
}
