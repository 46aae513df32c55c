use toml::{Table, Value};

use crate::error::{Result, VersetError};

/// First line of every `OldConfiguration` failure message.
pub const OLD_CONFIGURATION_HEADER: &str =
    "The configuration document contains deprecated settings, please fix the following errors:";

/// Deprecated keys with a direct replacement in the current layout.
const REPLACED_KEYS: &[(&str, &str)] = &[("assemblyVersioningScheme", "assembly-versioning-scheme")];

/// Deprecated branch-tag keys. These have no one-for-one replacement and
/// always point at branch specific configuration instead.
const BRANCH_TAG_KEYS: &[&str] = &["develop-branch-tag", "release-branch-tag"];

const BRANCH_TAG_GUIDANCE: &str =
    "branch specific configuration (see the 'branches' section of the configuration reference)";

/// Scan a parsed document for keys from deprecated layouts.
///
/// Both the top-level mapping and every branch-level mapping are checked.
/// Detection runs to completion so a single failure reports every violation,
/// in document order, instead of forcing a fix-rerun-fix loop.
pub fn check_for_old_keys(document: &Table) -> Result<()> {
    let mut violations = Vec::new();

    collect_violations(document, &mut violations);
    if let Some(Value::Table(branches)) = document.get("branches") {
        for branch in branches.values() {
            if let Value::Table(branch) = branch {
                collect_violations(branch, &mut violations);
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(VersetError::old_configuration(
            OLD_CONFIGURATION_HEADER,
            &violations,
        ))
    }
}

fn collect_violations(table: &Table, violations: &mut Vec<String>) {
    for key in table.keys() {
        if let Some((old, replacement)) = REPLACED_KEYS.iter().find(|(old, _)| *old == key.as_str()) {
            violations.push(format!("{} has been replaced by {}", old, replacement));
        } else if BRANCH_TAG_KEYS.contains(&key.as_str()) {
            violations.push(format!(
                "{} has been replaced by {}",
                key, BRANCH_TAG_GUIDANCE
            ));
        }
    }
}
