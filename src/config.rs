use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, VersetError};

/// Tag prefix applied when no document overrides it.
///
/// Exposed as a constant so callers can match tags against the default
/// convention without resolving a document first.
pub const DEFAULT_TAG_PREFIX: &str = "[vV]";

/// Canonical pattern for the development branch family.
pub const DEVELOP_BRANCH_PATTERN: &str = "dev(elop)?(ment)?$";

/// Canonical pattern for the release branch family, supporting both
/// `release/` and `release-` naming.
pub const RELEASE_BRANCH_PATTERN: &str = "releases?[/-]";

/// Scheme used to derive assembly version numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssemblyVersioningScheme {
    Major,
    MajorMinor,
    MajorMinorPatch,
    MajorMinorPatchTag,
}

impl AssemblyVersioningScheme {
    pub const ALLOWED: &'static [&'static str] = &[
        "Major",
        "MajorMinor",
        "MajorMinorPatch",
        "MajorMinorPatchTag",
    ];
}

impl FromStr for AssemblyVersioningScheme {
    type Err = VersetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Major" => Ok(AssemblyVersioningScheme::Major),
            "MajorMinor" => Ok(AssemblyVersioningScheme::MajorMinor),
            "MajorMinorPatch" => Ok(AssemblyVersioningScheme::MajorMinorPatch),
            "MajorMinorPatchTag" => Ok(AssemblyVersioningScheme::MajorMinorPatchTag),
            other => Err(VersetError::invalid_enum(
                "assembly-versioning-scheme",
                other,
                Self::ALLOWED,
            )),
        }
    }
}

impl fmt::Display for AssemblyVersioningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssemblyVersioningScheme::Major => "Major",
            AssemblyVersioningScheme::MajorMinor => "MajorMinor",
            AssemblyVersioningScheme::MajorMinorPatch => "MajorMinorPatch",
            AssemblyVersioningScheme::MajorMinorPatchTag => "MajorMinorPatchTag",
        };
        write!(f, "{}", name)
    }
}

/// How continuous the versioning flow is between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VersioningMode {
    ContinuousDelivery,
    ContinuousDeployment,
}

impl VersioningMode {
    pub const ALLOWED: &'static [&'static str] = &["ContinuousDelivery", "ContinuousDeployment"];
}

impl FromStr for VersioningMode {
    type Err = VersetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ContinuousDelivery" => Ok(VersioningMode::ContinuousDelivery),
            "ContinuousDeployment" => Ok(VersioningMode::ContinuousDeployment),
            other => Err(VersetError::invalid_enum("mode", other, Self::ALLOWED)),
        }
    }
}

impl fmt::Display for VersioningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersioningMode::ContinuousDelivery => "ContinuousDelivery",
            VersioningMode::ContinuousDeployment => "ContinuousDeployment",
        };
        write!(f, "{}", name)
    }
}

/// Which version component a branch increments by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum IncrementStrategy {
    None,
    Major,
    Minor,
    #[default]
    Patch,
}

impl IncrementStrategy {
    pub const ALLOWED: &'static [&'static str] = &["None", "Major", "Minor", "Patch"];
}

impl FromStr for IncrementStrategy {
    type Err = VersetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "None" => Ok(IncrementStrategy::None),
            "Major" => Ok(IncrementStrategy::Major),
            "Minor" => Ok(IncrementStrategy::Minor),
            "Patch" => Ok(IncrementStrategy::Patch),
            other => Err(VersetError::invalid_enum("increment", other, Self::ALLOWED)),
        }
    }
}

impl fmt::Display for IncrementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IncrementStrategy::None => "None",
            IncrementStrategy::Major => "Major",
            IncrementStrategy::Minor => "Minor",
            IncrementStrategy::Patch => "Patch",
        };
        write!(f, "{}", name)
    }
}

/// Per-branch overrides, keyed in `Configuration::branches` by their
/// canonical pattern.
///
/// `tag` distinguishes an explicit empty value (`Some("")`, no tag) from an
/// unspecified one (`None`). `versioning_mode` and `increment` fall back to
/// the top-level configuration when unset; resolution happens at read time
/// through the accessors on [`Configuration`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BranchConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(rename = "mode", skip_serializing_if = "Option::is_none")]
    pub versioning_mode: Option<VersioningMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment: Option<IncrementStrategy>,
}

/// The fully resolved versioning configuration for a repository.
///
/// Produced by the merge engine; every scalar the versioning flow depends on
/// is populated once a document has been resolved against the defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    pub assembly_versioning_scheme: AssemblyVersioningScheme,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_informational_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_version: Option<String>,

    pub tag_prefix: String,

    #[serde(rename = "mode")]
    pub versioning_mode: VersioningMode,

    pub branches: BTreeMap<String, BranchConfiguration>,
}

impl Configuration {
    /// Versioning mode for a branch, inheriting the top-level mode when the
    /// branch leaves it unset.
    pub fn versioning_mode_for(&self, branch: &BranchConfiguration) -> VersioningMode {
        branch.versioning_mode.unwrap_or(self.versioning_mode)
    }

    /// Increment strategy for a branch, falling back to the built-in default
    /// when the branch leaves it unset.
    pub fn increment_for(&self, branch: &BranchConfiguration) -> IncrementStrategy {
        branch.increment.unwrap_or_default()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        let mut branches = BTreeMap::new();
        branches.insert(
            DEVELOP_BRANCH_PATTERN.to_string(),
            BranchConfiguration {
                tag: Some("unstable".to_string()),
                versioning_mode: Some(VersioningMode::ContinuousDeployment),
                increment: Some(IncrementStrategy::Minor),
            },
        );
        branches.insert(
            RELEASE_BRANCH_PATTERN.to_string(),
            BranchConfiguration {
                tag: Some("beta".to_string()),
                versioning_mode: None,
                increment: Some(IncrementStrategy::Patch),
            },
        );

        Configuration {
            assembly_versioning_scheme: AssemblyVersioningScheme::MajorMinorPatch,
            assembly_informational_format: None,
            next_version: None,
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            versioning_mode: VersioningMode::ContinuousDelivery,
            branches,
        }
    }
}

/// Loads the versioning configuration from file or returns defaults.
///
/// Attempts to load the document in the following order:
/// 1. Custom path provided as parameter
/// 2. `verset.toml` in current directory
/// 3. `~/.config/.verset.toml` in user config directory
/// 4. Built-in default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Configuration)` - Resolved or default configuration
/// * `Err` - If a file exists but cannot be read, parsed, or resolved
pub fn load_config(config_path: Option<&str>) -> Result<Configuration> {
    let document_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./verset.toml").exists() {
        fs::read_to_string("./verset.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".verset.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Configuration::default());
        }
    } else {
        return Ok(Configuration::default());
    };

    crate::resolve::resolve_from_str(&document_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.tag_prefix, DEFAULT_TAG_PREFIX);
        assert_eq!(config.versioning_mode, VersioningMode::ContinuousDelivery);
        assert_eq!(
            config.assembly_versioning_scheme,
            AssemblyVersioningScheme::MajorMinorPatch
        );
        assert_eq!(config.next_version, None);
        assert_eq!(config.assembly_informational_format, None);
    }

    #[test]
    fn test_default_branch_rules() {
        let config = Configuration::default();
        let develop = config.branches.get(DEVELOP_BRANCH_PATTERN).unwrap();
        assert_eq!(develop.tag.as_deref(), Some("unstable"));
        assert_eq!(
            develop.versioning_mode,
            Some(VersioningMode::ContinuousDeployment)
        );
        assert_eq!(develop.increment, Some(IncrementStrategy::Minor));

        let release = config.branches.get(RELEASE_BRANCH_PATTERN).unwrap();
        assert_eq!(release.tag.as_deref(), Some("beta"));
        assert_eq!(release.versioning_mode, None);
        assert_eq!(release.increment, Some(IncrementStrategy::Patch));
    }

    #[test]
    fn test_versioning_mode_inherits_from_top_level() {
        let config = Configuration::default();
        let release = config.branches.get(RELEASE_BRANCH_PATTERN).unwrap();
        assert_eq!(
            config.versioning_mode_for(release),
            VersioningMode::ContinuousDelivery
        );

        let develop = config.branches.get(DEVELOP_BRANCH_PATTERN).unwrap();
        assert_eq!(
            config.versioning_mode_for(develop),
            VersioningMode::ContinuousDeployment
        );
    }

    #[test]
    fn test_increment_falls_back_to_patch() {
        let config = Configuration::default();
        let unset = BranchConfiguration::default();
        assert_eq!(config.increment_for(&unset), IncrementStrategy::Patch);
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!(
            "MajorMinorPatch".parse::<AssemblyVersioningScheme>().unwrap(),
            AssemblyVersioningScheme::MajorMinorPatch
        );
        assert_eq!(
            "MajorMinorPatchTag"
                .parse::<AssemblyVersioningScheme>()
                .unwrap(),
            AssemblyVersioningScheme::MajorMinorPatchTag
        );
    }

    #[test]
    fn test_scheme_parsing_rejects_unknown_value() {
        let err = "MajorOnly".parse::<AssemblyVersioningScheme>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'assembly-versioning-scheme'"));
        assert!(msg.contains("'MajorOnly'"));
        assert!(msg.contains("MajorMinorPatchTag"));
    }

    #[test]
    fn test_mode_parsing_rejects_unknown_value() {
        let err = "Continuous".parse::<VersioningMode>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'mode'"));
        assert!(msg.contains("ContinuousDelivery, ContinuousDeployment"));
    }

    #[test]
    fn test_increment_parsing() {
        assert_eq!(
            "None".parse::<IncrementStrategy>().unwrap(),
            IncrementStrategy::None
        );
        assert!("Semantic".parse::<IncrementStrategy>().is_err());
    }

    #[test]
    fn test_enum_display_round_trips() {
        for name in AssemblyVersioningScheme::ALLOWED {
            let parsed: AssemblyVersioningScheme = name.parse().unwrap();
            assert_eq!(parsed.to_string(), *name);
        }
        for name in VersioningMode::ALLOWED {
            let parsed: VersioningMode = name.parse().unwrap();
            assert_eq!(parsed.to_string(), *name);
        }
        for name in IncrementStrategy::ALLOWED {
            let parsed: IncrementStrategy = name.parse().unwrap();
            assert_eq!(parsed.to_string(), *name);
        }
    }
}
