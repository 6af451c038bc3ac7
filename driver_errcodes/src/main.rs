use clap::{Parser, Subcommand};
use driver_errcodes::catalog::{check_catalog, MessageCatalog};
use driver_errcodes::config::runtime::{LoggingPreferences, RegistryPreferences};
use driver_errcodes::registry::{self, ErrorDescriptor, Subsystem};
use driver_errcodes::{export, logging, SqlState};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "errcodes",
    author,
    version,
    about = "Inspect the client driver error code registry"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered errors in declaration order
    List {
        /// Emit JSON instead of plain lines
        #[arg(long, conflicts_with = "markdown")]
        json: bool,

        /// Emit a Markdown table
        #[arg(long)]
        markdown: bool,

        /// Only entries with this SQLSTATE
        #[arg(long)]
        state: Option<String>,

        /// Only entries owned by this subsystem digit
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=9))]
        subsystem: Option<u32>,
    },

    /// Resolve an error name to its code and SQLSTATE
    Lookup { name: String },

    /// Resolve a numeric code to its entry
    Describe { code: u32 },

    /// Compare a message catalog against the registry
    CheckCatalog {
        path: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Build the registry and report its size
    Validate {
        /// Also print logging and build configuration
        #[arg(long)]
        diagnostics: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::config::init_runtime_preferences(LoggingPreferences::default())?;
    logging::init_global_logging()?;

    if RegistryPreferences::default().eager_initialization {
        registry::init_registry()?;
    }

    match cli.command {
        Command::List {
            json,
            markdown,
            state,
            subsystem,
        } => list(json, markdown, state.as_deref(), subsystem)?,
        Command::Lookup { name } => {
            let descriptor = registry::init_registry()?.lookup(&name)?;
            println!("{}", descriptor);
        }
        Command::Describe { code } => match registry::init_registry()?.describe(code) {
            Some(descriptor) => println!("{}", descriptor),
            None => {
                println!("No error registered with code {}", code);
                process::exit(1);
            }
        },
        Command::CheckCatalog { path, json } => {
            let catalog = MessageCatalog::load(&path)?;
            let report = check_catalog(registry::init_registry()?, &catalog);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Catalog {}: {}", path.display(), report.summary());
                for descriptor in &report.missing {
                    println!("  missing   {}", descriptor);
                }
                for code in &report.orphaned {
                    println!("  orphaned  {}", code);
                }
                for key in &report.invalid_keys {
                    println!("  invalid   {}", key);
                }
            }

            if !report.is_complete() {
                process::exit(1);
            }
        }
        Command::Validate { diagnostics } => {
            let registry = registry::init_registry()?;
            println!(
                "Registry valid: {} entries in partition {}",
                registry.len(),
                registry.partition()
            );
            if diagnostics {
                println!();
                println!("{}", logging::get_system_diagnostics());
            }
        }
    }

    Ok(())
}

fn list(
    json: bool,
    markdown: bool,
    state: Option<&str>,
    subsystem: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = match state {
        Some(raw) => Some(
            SqlState::parse(raw).ok_or_else(|| format!("Unknown SQLSTATE '{}'", raw))?,
        ),
        None => None,
    };
    let subsystem = subsystem.map(Subsystem::from_digit);

    let entries: Vec<&ErrorDescriptor> = registry::init_registry()?
        .all()
        .iter()
        .filter(|d| state.map_or(true, |s| d.state() == s))
        .filter(|d| subsystem.map_or(true, |s| d.subsystem() == s))
        .collect();

    if json {
        println!("{}", export::to_json(entries)?);
    } else if markdown {
        print!("{}", export::to_markdown(entries));
    } else {
        for descriptor in entries {
            println!(
                "{:<8} {}  {}",
                descriptor.code(),
                descriptor.state(),
                descriptor.name()
            );
        }
    }

    Ok(())
}
