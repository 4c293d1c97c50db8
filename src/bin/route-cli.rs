use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use mycows_web::config::{load_config, ConfigError, SpaConfig};
use mycows_web::routing::{Location, RouteTable};

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Inspect the MyCows route table offline", long_about = None)]
struct Cli {
    /// Config file to read routes from. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which page a path renders
    Resolve {
        /// Path or URL, e.g. /animals/123?tab=scores
        path: String,
    },
    /// List the route table in evaluation order
    Routes,
    /// Validate the config file
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path),
        None => Ok(SpaConfig::default()),
    };

    let (output, ok) = match (cli.command, config) {
        (Commands::Check, Ok(config)) => (
            json!({ "valid": true, "routes": config.routes.len() }),
            true,
        ),
        (_, Err(e)) => (error_json(&e), false),
        (Commands::Resolve { path }, Ok(config)) => {
            let table = RouteTable::from_config(&config.routes);
            let location = Location::parse(&path);
            let route_match = table.resolve(&location.pathname);
            (
                json!({
                    "location": location,
                    "match": route_match,
                    "component": route_match.page.component_name(),
                }),
                true,
            )
        }
        (Commands::Routes, Ok(config)) => (
            Value::Array(
                config
                    .routes
                    .iter()
                    .map(|r| {
                        json!({
                            "name": r.name,
                            "path": r.path,
                            "exact": r.exact,
                            "sensitive": r.sensitive,
                            "component": r.page.component_name(),
                        })
                    })
                    .collect(),
            ),
            true,
        ),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn error_json(err: &ConfigError) -> Value {
    match err {
        ConfigError::Validation(errors) => json!({
            "valid": false,
            "errors": errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        }),
        other => json!({ "valid": false, "errors": [other.to_string()] }),
    }
}
