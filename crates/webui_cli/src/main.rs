//! WebUI CLI
//!
//! Generate client state runtimes, event handler snippets, and
//! modifier-prefixed utility classes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use webui_state::{ButtonAction, JavaScriptGenerator, StateManager};
use webui_style::{combine, Modifier};

mod config;

use config::WebuiConfig;

#[derive(Parser)]
#[command(name = "webui")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "WebUI markup and state tooling", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the complete client state runtime
    Script {
        /// Configuration file (webui.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// State snapshot as exported JSON ({ scope: { key: value } })
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// WebSocket endpoint for server sync
        #[arg(long)]
        server_url: Option<String>,

        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply a modifier chain to utility classes
    Classes {
        /// Modifier to apply (repeatable, outermost first)
        #[arg(long = "on", value_name = "MODIFIER")]
        modifiers: Vec<String>,

        /// Classes to prefix
        #[arg(required = true)]
        classes: Vec<String>,
    },

    /// Generate a click handler for a button
    Button {
        /// Element id of the button
        button_id: String,

        /// State id the button acts on
        state_id: String,

        /// increment, decrement, toggle, or a custom statement using $STATE_ID
        action: String,
    },

    /// Generate a submit handler for a form
    Form {
        /// Element id of the form
        form_id: String,

        /// Field to state mappings as field=state
        #[arg(required = true)]
        fields: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Script {
            config,
            state,
            server_url,
            output,
        } => cmd_script(
            config.as_deref(),
            state.as_deref(),
            server_url.as_deref(),
            output.as_deref(),
        ),

        Commands::Classes { modifiers, classes } => cmd_classes(&modifiers, classes),

        Commands::Button {
            button_id,
            state_id,
            action,
        } => cmd_button(&button_id, &state_id, &action),

        Commands::Form { form_id, fields } => cmd_form(&form_id, &fields),
    }
}

fn cmd_script(
    config_path: Option<&Path>,
    state_path: Option<&Path>,
    server_url: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => WebuiConfig::load(path)?,
        None => WebuiConfig::default(),
    };

    let manager = StateManager::new(config.state);
    if let Some(path) = state_path {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let count = manager
            .import_state_json(&json)
            .with_context(|| format!("Failed to import state from {}", path.display()))?;
        debug!("Imported {} state entries from {}", count, path.display());
    }

    let mut generator = JavaScriptGenerator::default();
    if let Some(url) = server_url.or(config.script.server_url.as_deref()) {
        generator = generator.with_server_url(url);
    }

    let script = manager.generate_javascript_with(&generator);
    emit(&script, output)
}

fn cmd_classes(modifiers: &[String], classes: Vec<String>) -> Result<()> {
    let modifiers = modifiers
        .iter()
        .map(|name| name.parse::<Modifier>())
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid --on modifier")?;

    println!("{}", combine(classes, &modifiers).join(" "));
    Ok(())
}

fn cmd_button(button_id: &str, state_id: &str, action: &str) -> Result<()> {
    let action: ButtonAction = match action.parse() {
        Ok(action) => action,
        Err(never) => match never {},
    };

    let script =
        JavaScriptGenerator::default().generate_button_handler(button_id, state_id, &action);
    print!("{}", script);
    Ok(())
}

fn cmd_form(form_id: &str, fields: &[String]) -> Result<()> {
    let pairs = fields
        .iter()
        .map(|mapping| parse_field_mapping(mapping))
        .collect::<Result<Vec<_>>>()?;

    let script = JavaScriptGenerator::default().generate_form_handler(form_id, pairs);
    print!("{}", script);
    Ok(())
}

fn parse_field_mapping(mapping: &str) -> Result<(&str, &str)> {
    match mapping.split_once('=') {
        Some((field, state)) if !field.is_empty() && !state.is_empty() => Ok((field, state)),
        _ => anyhow::bail!("Invalid field mapping '{}'. Expected field=state", mapping),
    }
}

fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_field_mapping() {
        assert_eq!(
            parse_field_mapping("firstName=user_first").unwrap(),
            ("firstName", "user_first")
        );
        assert!(parse_field_mapping("firstName").is_err());
        assert!(parse_field_mapping("=user_first").is_err());
    }

    #[test]
    fn test_classes_arguments() {
        let cli = Cli::try_parse_from(["webui", "classes", "--on", "md", "--on", "hover", "p-4"])
            .unwrap();
        match cli.command {
            Commands::Classes { modifiers, classes } => {
                assert_eq!(modifiers, vec!["md", "hover"]);
                assert_eq!(classes, vec!["p-4"]);
            }
            _ => panic!("expected classes command"),
        }
    }
}
