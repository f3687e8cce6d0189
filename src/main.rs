use clap::{Parser, Subcommand};
use periodic_cipher::config::{Config, OutputFormat};
use periodic_cipher::utils::{logger, report};
use periodic_cipher::{io, Catalog, CipherResult, PeriodicCipher};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pcipher", version, about = "Periodic table letter substitution cipher")]
struct Cli {
    /// Use a catalog data asset instead of the built-in one
    #[arg(long, global = true, env = "PCIPHER_CATALOG")]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt plain text into coordinates
    Encrypt {
        text: String,
        /// Print every step as it is produced
        #[arg(long)]
        steps: bool,
        /// Emit the full outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decrypt coordinates back into text
    Decrypt {
        text: String,
        #[arg(long)]
        steps: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the letter -> element catalog
    Catalog {
        /// Write the catalog as a JSON data asset instead of printing it
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Show reference data for an element symbol
    Element { symbol: String },
    /// Persist the current flags as defaults
    SaveConfig {
        #[arg(long)]
        steps: bool,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (config, config_msg) = Config::load();

    let level = match cli.verbose {
        0 => config.level_filter(),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    if let Err(e) = logger::init(level) {
        eprintln!("Logger already set: {}", e);
    }
    log::info!("{}", config_msg);

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

// Steps go to stderr when stdout carries a JSON document
fn step_printer(to_stderr: bool) -> impl FnMut(&str) {
    move |line: &str| {
        if to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

fn run(cli: Cli, config: Config) -> CipherResult<()> {
    let loaded;
    let catalog = match cli.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => {
            loaded = io::load_catalog(path)?;
            &loaded
        }
        None => Catalog::builtin(),
    };
    let cipher = PeriodicCipher::with_catalog(catalog);
    let json_default = config.output_format == OutputFormat::Json;

    match cli.command {
        Command::Encrypt { text, steps, json } => {
            let as_json = json || json_default;
            let mut print_step = step_printer(as_json);
            let out = if steps || config.show_steps {
                cipher.encrypt_with(&text, &mut print_step)
            } else {
                cipher.encrypt(&text)
            };
            if as_json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", out.result);
                if !out.matches.is_empty() {
                    eprint!("\n{}", report::matches_table(&out.matches));
                }
            }
        }
        Command::Decrypt { text, steps, json } => {
            let as_json = json || json_default;
            let mut print_step = step_printer(as_json);
            let out = if steps || config.show_steps {
                cipher.decrypt_with(&text, &mut print_step)
            } else {
                cipher.decrypt(&text)
            };
            if as_json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", out.result);
                if !out.alternatives.is_empty() {
                    eprint!("\n{}", report::alternatives_table(&out.alternatives));
                }
            }
        }
        Command::Catalog { export } => match export {
            Some(path) => {
                io::save_catalog(&path, catalog)?;
                log::info!("Catalog written to {:?}", path);
            }
            None => print!("{}", report::catalog_table(catalog)),
        },
        Command::Element { symbol } => {
            print!("{}", report::element_summary(catalog, &symbol));
        }
        Command::SaveConfig { steps, json } => {
            let updated = Config {
                show_steps: steps,
                output_format: if json { OutputFormat::Json } else { OutputFormat::Text },
                catalog_path: cli.catalog.or(config.catalog_path),
                ..config
            };
            println!("{}", updated.save());
        }
    }

    Ok(())
}
