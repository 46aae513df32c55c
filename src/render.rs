use crate::config::Configuration;
use crate::error::Result;

/// Serialize an effective configuration to canonical TOML.
///
/// Output is deterministic: scalar fields come out in declaration order and
/// branch tables in sorted pattern order, so two equal configurations always
/// render byte-identically. Used for display and approved-output comparison;
/// no coercion or validation happens here.
pub fn render(config: &Configuration) -> Result<String> {
    let rendered = toml::to_string(config)?;
    Ok(rendered)
}
