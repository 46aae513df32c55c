use crate::config::{BranchConfiguration, Configuration};

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

/// Print the canonical rendering of an effective configuration under a
/// bold heading.
pub fn display_effective_configuration(source: &str, rendered: &str) {
    println!("\x1b[1mEffective configuration ({})\x1b[0m\n", source);
    println!("{}", rendered);
}

/// Print the rule matching a branch name, with inherited fields resolved
/// against the top-level configuration.
pub fn display_branch_rule(
    branch_name: &str,
    pattern: &str,
    branch: &BranchConfiguration,
    config: &Configuration,
) {
    println!(
        "\x1b[1mBranch '{}' matches pattern '{}'\x1b[0m",
        branch_name, pattern
    );
    match branch.tag.as_deref() {
        Some("") => println!("  tag:       (none)"),
        Some(tag) => println!("  tag:       {}", tag),
        None => println!("  tag:       (unset)"),
    }
    println!("  mode:      {}", config.versioning_mode_for(branch));
    println!("  increment: {}", config.increment_for(branch));
}

pub fn display_no_matching_branch(branch_name: &str) {
    println!(
        "No configured branch pattern matches '{}'; top-level settings apply.",
        branch_name
    );
}
