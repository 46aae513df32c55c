use anyhow::Result;
use clap::Parser;

use verset::branches::find_branch_configuration;
use verset::config::{load_config, Configuration};
use verset::{render, ui};

#[derive(clap::Parser)]
#[command(
    name = "verset",
    about = "Resolve repository versioning configuration with branch-specific overrides"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Validate the configuration document and exit")]
    check: bool,

    #[arg(long, help = "Show the built-in default configuration and exit")]
    defaults: bool,

    #[arg(short, long, help = "Show the rule matching a branch name")]
    branch: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("verset {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.defaults {
        let rendered = render::render(&Configuration::default())?;
        ui::display_effective_configuration("built-in defaults", &rendered);
        return Ok(());
    }

    // Resolve the document against the built-in defaults
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.check {
        ui::display_success("Configuration document is valid");
        return Ok(());
    }

    if let Some(branch_name) = args.branch {
        match find_branch_configuration(&config, &branch_name) {
            Ok(Some((pattern, branch))) => {
                ui::display_branch_rule(&branch_name, pattern, branch, &config);
            }
            Ok(None) => {
                ui::display_no_matching_branch(&branch_name);
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let source = args.config.as_deref().unwrap_or("resolved");
    let rendered = render::render(&config)?;
    ui::display_effective_configuration(source, &rendered);

    Ok(())
}
