use regex::RegexBuilder;

use crate::config::{
    BranchConfiguration, Configuration, DEVELOP_BRANCH_PATTERN, RELEASE_BRANCH_PATTERN,
};
use crate::error::{Result, VersetError};

/// Map a raw branch key to the canonical pattern used in the branch map.
///
/// Short aliases for the built-in branch families normalize to the family's
/// canonical regex, so an override written as `develop` replaces the built-in
/// `dev(elop)?(ment)?$`-family entry instead of sitting next to it. Any other
/// key is treated as already canonical and used verbatim, which is how
/// user-defined families like `bug[/-]` come in.
///
/// Normalization is stable: a canonical pattern passes through unchanged.
pub fn normalize_branch_pattern(raw: &str) -> &str {
    match raw {
        "develop" | "development" | "dev" => DEVELOP_BRANCH_PATTERN,
        "release" | "releases" | "release[/-]" => RELEASE_BRANCH_PATTERN,
        other => other,
    }
}

/// Find the branch rule matching a concrete branch name.
///
/// Patterns are matched as case-insensitive regexes, in the deterministic
/// order of the branch map; the first match wins.
///
/// # Returns
/// * `Ok(Some((pattern, branch)))` - The matching rule and its canonical pattern
/// * `Ok(None)` - No configured pattern matches the branch name
/// * `Err` - A configured pattern is not a valid regex
pub fn find_branch_configuration<'a>(
    config: &'a Configuration,
    branch_name: &str,
) -> Result<Option<(&'a str, &'a BranchConfiguration)>> {
    for (pattern, branch) in &config.branches {
        let matcher = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| VersetError::InvalidBranchPattern {
                pattern: pattern.clone(),
                source,
            })?;

        if matcher.is_match(branch_name) {
            return Ok(Some((pattern.as_str(), branch)));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_develop_aliases_normalize_to_family_pattern() {
        assert_eq!(normalize_branch_pattern("develop"), DEVELOP_BRANCH_PATTERN);
        assert_eq!(
            normalize_branch_pattern("development"),
            DEVELOP_BRANCH_PATTERN
        );
        assert_eq!(normalize_branch_pattern("dev"), DEVELOP_BRANCH_PATTERN);
    }

    #[test]
    fn test_release_aliases_normalize_to_family_pattern() {
        assert_eq!(normalize_branch_pattern("release"), RELEASE_BRANCH_PATTERN);
        assert_eq!(normalize_branch_pattern("releases"), RELEASE_BRANCH_PATTERN);
        assert_eq!(
            normalize_branch_pattern("release[/-]"),
            RELEASE_BRANCH_PATTERN
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        assert_eq!(
            normalize_branch_pattern(DEVELOP_BRANCH_PATTERN),
            DEVELOP_BRANCH_PATTERN
        );
        assert_eq!(
            normalize_branch_pattern(RELEASE_BRANCH_PATTERN),
            RELEASE_BRANCH_PATTERN
        );
    }

    #[test]
    fn test_unknown_keys_pass_through_verbatim() {
        assert_eq!(normalize_branch_pattern("bug[/-]"), "bug[/-]");
        assert_eq!(normalize_branch_pattern("hotfix"), "hotfix");
    }

    #[test]
    fn test_find_matches_develop_family() {
        let config = Configuration::default();
        let (pattern, branch) = find_branch_configuration(&config, "develop")
            .unwrap()
            .unwrap();
        assert_eq!(pattern, DEVELOP_BRANCH_PATTERN);
        assert_eq!(branch.tag.as_deref(), Some("unstable"));
    }

    #[test]
    fn test_find_matches_release_family_with_either_separator() {
        let config = Configuration::default();
        for name in ["release/1.0", "release-1.0", "releases/2.1"] {
            let (pattern, _) = find_branch_configuration(&config, name)
                .unwrap()
                .unwrap_or_else(|| panic!("expected a match for {}", name));
            assert_eq!(pattern, RELEASE_BRANCH_PATTERN);
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let config = Configuration::default();
        let matched = find_branch_configuration(&config, "Release/1.0").unwrap();
        assert!(matched.is_some());
    }

    #[test]
    fn test_find_returns_none_without_match() {
        let config = Configuration::default();
        let matched = find_branch_configuration(&config, "feature/login").unwrap();
        assert!(matched.is_none());
    }

    #[test]
    fn test_find_reports_invalid_pattern() {
        let mut config = Configuration::default();
        config
            .branches
            .insert("(".to_string(), BranchConfiguration::default());
        let err = find_branch_configuration(&config, "anything").unwrap_err();
        assert!(matches!(err, VersetError::InvalidBranchPattern { .. }));
    }
}
