use crate::branches::normalize_branch_pattern;
use crate::config::Configuration;
use crate::document::{BranchDocument, ConfigDocument, NextVersion};
use crate::error::Result;
use crate::legacy;

/// Full pipeline from document text to an effective configuration.
///
/// Parses the text into the generic tree, rejects deprecated layouts before
/// any merge happens, then overlays the typed document onto the built-in
/// defaults.
pub fn resolve_from_str(text: &str) -> Result<Configuration> {
    let raw = crate::document::parse_document(text)?;
    legacy::check_for_old_keys(&raw)?;
    let document = ConfigDocument::from_table(raw)?;
    resolve(&document)
}

/// Overlay a document onto the built-in default configuration.
pub fn resolve(document: &ConfigDocument) -> Result<Configuration> {
    resolve_with_defaults(document, &Configuration::default())
}

/// Overlay a document onto the given defaults, presence-wins per field.
///
/// The defaults are cloned before anything is touched, so the template is
/// never mutated and repeated calls with the same inputs produce identical
/// configurations.
pub fn resolve_with_defaults(
    document: &ConfigDocument,
    defaults: &Configuration,
) -> Result<Configuration> {
    let mut config = defaults.clone();

    if let Some(scheme) = &document.assembly_versioning_scheme {
        config.assembly_versioning_scheme = scheme.parse()?;
    }
    if let Some(format) = &document.assembly_informational_format {
        config.assembly_informational_format = Some(format.clone());
    }
    if let Some(next_version) = &document.next_version {
        config.next_version = Some(coerce_next_version(next_version));
    }
    if let Some(tag_prefix) = &document.tag_prefix {
        config.tag_prefix = tag_prefix.clone();
    }
    if let Some(mode) = &document.mode {
        config.versioning_mode = mode.parse()?;
    }

    for (raw_key, value) in &document.branches {
        let pattern = normalize_branch_pattern(raw_key);
        let branch_document = BranchDocument::from_value(value.clone())?;

        // Existing entries merge per field; a new pattern starts from an
        // empty rule so unset fields inherit from the top level at read time.
        let branch = config.branches.entry(pattern.to_string()).or_default();
        if let Some(tag) = &branch_document.tag {
            branch.tag = Some(tag.clone());
        }
        if let Some(mode) = &branch_document.mode {
            branch.versioning_mode = Some(mode.parse()?);
        }
        if let Some(increment) = &branch_document.increment {
            branch.increment = Some(increment.parse()?);
        }
    }

    Ok(config)
}

/// Promote a `next-version` scalar to a version string.
///
/// A bare integer becomes `<int>.0`; anything already carrying dot-separated
/// components is kept verbatim, with no range check on individual components.
/// Content that does not look numeric at all passes through untouched.
fn coerce_next_version(next_version: &NextVersion) -> String {
    let text = match next_version {
        NextVersion::Integer(value) => value.to_string(),
        NextVersion::Decimal(value) => value.to_string(),
        NextVersion::Text(value) => value.clone(),
    };

    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}.0", text)
    } else {
        text
    }
}
