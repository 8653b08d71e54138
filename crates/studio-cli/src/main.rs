//! Form Studio command-line tool.
//!
//! Generates React Native screens from designs saved by the builder.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use studio_codegen::{screen_identifier, ScreenGenerator};
use studio_registry::DefinitionRegistry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod input;

use config::StudioConfig;

#[derive(Debug, Parser)]
#[command(name = "studio", version, about = "Generate React Native screens from Form Studio designs")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the screen source for a design.
    Generate {
        /// Saved design or node array (JSON).
        design: PathBuf,
        /// Component name of the screen. Defaults to the design file name.
        #[arg(long)]
        screen_name: Option<String>,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the component files a design needs.
    Files {
        /// Saved design or node array (JSON).
        design: PathBuf,
    },
    /// Re-save a design with a fresh expiry from the `[design]` settings.
    Save {
        /// Saved design or node array (JSON).
        design: PathBuf,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the available components.
    Palette {
        /// Print definitions as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = StudioConfig::load(cli.config.as_deref())?;
    let generator = ScreenGenerator::new(DefinitionRegistry::with_builtins(), config.generator);

    match cli.command {
        Command::Generate {
            design,
            screen_name,
            output,
        } => {
            let nodes = input::load_design(&design, now_ms())?;
            let screen_name = resolve_screen_name(screen_name.as_deref(), &design, &generator);
            let code = generator.generate(&nodes, &screen_name);

            match output {
                Some(path) => {
                    std::fs::write(&path, &code)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote {} to {}", screen_name, path.display());
                    let files = generator.required_file_names(&nodes);
                    if !files.is_empty() {
                        println!("Copy these files too: {}", files.join(", "));
                    }
                }
                None => print!("{}", code),
            }
        }
        Command::Files { design } => {
            let nodes = input::load_design(&design, now_ms())?;
            for file in generator.required_file_names(&nodes) {
                println!("{}", file);
            }
        }
        Command::Save { design, output } => {
            let now = now_ms();
            let nodes = input::load_design(&design, now)?;
            let saved = input::stamp_design(nodes, now, &config.design)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &saved)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!(
                        "Saved {} (valid for {} minutes)",
                        path.display(),
                        config.design.ttl_minutes
                    );
                }
                None => println!("{}", saved),
            }
        }
        Command::Palette { json } => {
            let palette = generator.registry().palette();
            if json {
                println!("{}", serde_json::to_string_pretty(&palette)?);
            } else {
                for group in palette {
                    println!("{}", group.category.as_str());
                    for definition in group.definitions {
                        println!("  {:<18} {}", definition.component_type, definition.name);
                    }
                }
            }
        }
    }

    Ok(())
}

/// The explicit name, else the design file stem, as a component identifier.
fn resolve_screen_name(explicit: Option<&str>, design: &Path, generator: &ScreenGenerator) -> String {
    let fallback = &generator.config().default_screen_name;
    let raw = explicit
        .map(str::to_string)
        .or_else(|| {
            design
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_default();
    screen_identifier(&raw, fallback)
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
