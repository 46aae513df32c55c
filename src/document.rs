use serde::Deserialize;
use toml::{Table, Value};

use crate::error::Result;

/// Parse a configuration document into the generic mapping tree.
///
/// The tree keeps keys in document order, which the legacy-key detector
/// relies on when reporting violations.
pub fn parse_document(text: &str) -> Result<Table> {
    let table: Table = toml::from_str(text)?;
    Ok(table)
}

/// Typed view of the top-level document mapping.
///
/// Every field is optional: `None` means the key was absent and the default
/// configuration value survives the merge. Unknown keys are ignored so newer
/// documents keep loading on older binaries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigDocument {
    pub assembly_versioning_scheme: Option<String>,

    pub assembly_informational_format: Option<String>,

    pub next_version: Option<NextVersion>,

    pub tag_prefix: Option<String>,

    pub mode: Option<String>,

    /// Raw branch mappings, in document order. Each value is converted to a
    /// [`BranchDocument`] during the merge.
    #[serde(default)]
    pub branches: Table,
}

impl ConfigDocument {
    /// Build the typed view from an already-parsed document tree.
    pub fn from_table(table: Table) -> Result<Self> {
        let document = Value::Table(table).try_into()?;
        Ok(document)
    }
}

/// Typed view of one branch-level mapping.
///
/// `tag: Some("")` is a valid explicit "no tag" override, distinct from the
/// key being absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BranchDocument {
    pub mode: Option<String>,

    pub tag: Option<String>,

    pub increment: Option<String>,
}

impl BranchDocument {
    pub fn from_value(value: Value) -> Result<Self> {
        let document = value.try_into()?;
        Ok(document)
    }
}

/// The shape a `next-version` scalar was written in.
///
/// Document authors write bare integers (`2`), decimals (`2.1`) and quoted
/// strings (`"2.12.654651698"`); the merge engine coerces all three to a
/// version string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NextVersion {
    Integer(i64),
    Decimal(f64),
    Text(String),
}
