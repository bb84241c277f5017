//! shieldconv - SHIELD-HIT12A input converter
//!
//! Writes engine input files for a simulation setup and turns the engine's
//! binary results back into JSON.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shield_convert::{
    assign_body_ids, assign_material_ids, parse_results_with, read_result_files, serialize,
    tables, DecodeOptions, SimulationContext,
};
use shield_ir::Setup;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "shieldconv")]
#[command(about = "SHIELD-HIT12A input converter and result decoder", long_about = None)]
struct Cli {
    /// Config file (default: shieldconv.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write mat.dat, geo.dat, beam.dat and detect.dat for a setup
    Convert {
        /// Setup file (.json or .toml)
        setup: PathBuf,
        /// Directory receiving the input files and the context
        out_dir: PathBuf,
    },
    /// Decode every .bdo file of a run
    Decode {
        /// Context written by `convert`
        context: PathBuf,
        /// Directory holding the .bdo files
        results_dir: PathBuf,
        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Display entity counts and engine numbering of a setup
    Info {
        /// Setup file (.json or .toml)
        setup: PathBuf,
    },
    /// Resolve a name to its engine code, or a code to its name
    Lookup {
        /// Table to search
        #[arg(value_enum)]
        table: Table,
        /// Name or numeric code
        key: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Table {
    Material,
    Isotope,
    Particle,
    Scoring,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Some(Commands::Convert { setup, out_dir }) => {
            convert(&config, &setup, &out_dir)?;
        }
        Some(Commands::Decode {
            context,
            results_dir,
            output,
        }) => {
            decode(&config, &context, &results_dir, output.as_deref())?;
        }
        Some(Commands::Info { setup }) => {
            show_info(&setup)?;
        }
        Some(Commands::Lookup { table, key }) => {
            println!("{}", lookup(table, &key)?);
        }
        None => {
            anyhow::bail!("No command given, see --help");
        }
    }

    Ok(())
}

fn init_logging(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse a setup, TOML when the extension says so, JSON otherwise.
fn parse_setup(text: &str, extension: Option<&str>) -> Result<Setup> {
    match extension {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(toml::from_str(text)?),
        _ => Ok(Setup::from_json(text)?),
    }
}

fn load_setup(path: &Path) -> Result<Setup> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading setup {}", path.display()))?;
    parse_setup(&text, path.extension().and_then(|e| e.to_str()))
        .with_context(|| format!("parsing setup {}", path.display()))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn convert(config: &Config, setup: &Path, out_dir: &Path) -> Result<()> {
    let setup = load_setup(setup)?;
    let out = serialize(&setup)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    for (name, content) in &out.files {
        let path = out_dir.join(name);
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        info!(file = %path.display(), bytes = content.len(), "input file written");
    }
    let context_path = out_dir.join(&config.context_file);
    std::fs::write(&context_path, to_json(&out.context, config.pretty)?)
        .with_context(|| format!("writing {}", context_path.display()))?;

    println!(
        "Wrote {} input files and {} to {}",
        out.files.len(),
        config.context_file,
        out_dir.display()
    );
    Ok(())
}

fn decode(
    config: &Config,
    context: &Path,
    results_dir: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let json = std::fs::read_to_string(context)
        .with_context(|| format!("reading context {}", context.display()))?;
    let context = SimulationContext::from_json(&json)
        .with_context(|| format!("parsing context {}", context.display()))?;

    let files = read_result_files(results_dir)
        .with_context(|| format!("reading results from {}", results_dir.display()))?;
    if files.is_empty() {
        anyhow::bail!("No .bdo files in {}", results_dir.display());
    }
    let options = DecodeOptions {
        parallel: config.decode.parallel,
    };
    let result = parse_results_with(&files, &context, options);
    let json = to_json(&result, config.pretty)?;

    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!(
                "Decoded {} of {} result files to {}",
                result.detectors.len(),
                files.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn show_info(path: &Path) -> Result<()> {
    let setup = load_setup(path)?;

    println!("Setup: {}", path.display());
    println!("  Bodies:    {}", setup.bodies.len());
    println!("  Zones:     {}", setup.zones.len());
    println!("  Materials: {}", setup.materials.len());
    println!("  Detectors: {}", setup.detectors.len());
    println!("  Beam:      {:?}", setup.beam.particle_type);

    let materials = assign_material_ids(&setup.materials)?;
    println!("\nMedia (engine <- material):");
    for (engine, domain) in materials.iter() {
        println!("  {:>3} <- {}", engine, domain);
    }

    let bodies = assign_body_ids(&setup.bodies)?;
    println!("\nBodies (engine <- body):");
    for (engine, domain) in bodies.iter() {
        println!("  {:>3} <- {}", engine, domain);
    }

    match serialize(&setup) {
        Ok(out) => {
            println!("\nResult files:");
            for (file, detector) in &out.context.detector_files {
                println!("  {}.bdo <- detector {}", file, detector);
            }
        }
        Err(e) => println!("\nNot convertible: {}", e),
    }
    Ok(())
}

fn lookup(table: Table, key: &str) -> Result<String> {
    let code = key.parse::<i64>().ok();
    let found = match (table, code) {
        (Table::Material, Some(code)) => tables::predefined_material_name(code).map(str::to_string),
        (Table::Material, None) => tables::icru_code(key).map(|c| c.to_string()),
        (Table::Isotope, Some(code)) => tables::isotope_name(code).map(str::to_string),
        (Table::Isotope, None) => tables::nuclid_code(key).map(|c| c.to_string()),
        (Table::Particle, Some(code)) => tables::particle_name(code).map(str::to_string),
        (Table::Particle, None) => tables::predefined_particle_code(key).map(|c| c.to_string()),
        (Table::Scoring, _) => tables::scoring_tag(key)
            .or_else(|| tables::scoring_name(key))
            .map(str::to_string),
    };
    found.with_context(|| format!("{:?} not found", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_directions() {
        assert_eq!(lookup(Table::Material, "water_liquid").unwrap(), "276");
        assert_eq!(lookup(Table::Material, "276").unwrap(), "water_liquid");
        assert_eq!(lookup(Table::Isotope, "u-235").unwrap(), "103");
        assert_eq!(lookup(Table::Particle, "proton").unwrap(), "2");
        assert_eq!(lookup(Table::Particle, "25").unwrap(), "heavy_ion");
        assert_eq!(lookup(Table::Scoring, "dose").unwrap(), "DOSE");
        assert_eq!(lookup(Table::Scoring, "DOSE").unwrap(), "dose");
        assert!(lookup(Table::Material, "unobtainium").is_err());
    }

    #[test]
    fn test_parse_toml_setup() {
        let setup = parse_setup(
            r#"
[[bodies]]
id = 1
[bodies.geometry]
type = "sphere"
center = { x = 0.0, y = 0.0, z = 0.0 }
radius = 5.0

[[materials]]
id = 2
[materials.material]
type = "predefined"
name = "water_liquid"

[beam]
initialBaseEnergy = 150.0
"#,
            Some("toml"),
        )
        .unwrap();
        assert_eq!(setup.bodies.len(), 1);
        assert_eq!(setup.materials.len(), 1);
        assert_eq!(setup.beam.initial_base_energy, 150.0);
        assert!(setup.zones.is_empty());
    }

    #[test]
    fn test_parse_json_setup() {
        let setup = parse_setup(r#"{"bodies": []}"#, Some("json")).unwrap();
        assert!(setup.bodies.is_empty());
        assert!(parse_setup("not json", None).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::parse_from(["shieldconv", "-vv", "lookup", "particle", "proton"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Some(Commands::Lookup {
                table: Table::Particle,
                ..
            })
        ));
    }
}
