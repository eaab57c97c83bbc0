//! # Vehicle Loader
//!
//! Loads vehicle definition documents the way the game does and prints what
//! came out: every definition, its sprite coverage, and every diagnostic.
//!
//! ```text
//! vehicle_loader [--config loader.toml] [FILE_OR_DIR ...]
//! ```
//!
//! Directories listed in the config's `definition_dirs` are loaded first,
//! then the command-line paths in order.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use skyway::report::describe_registry;
use skyway::vehicles::{DirectoryImageResolver, LoadSummary, Severity, VehicleResult};
use skyway::{LoaderConfig, VehicleRegistry};

struct Args {
    config: Option<PathBuf>,
    paths: Vec<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut config = None;
    let mut paths = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                return Err("usage: vehicle_loader [--config loader.toml] [FILE_OR_DIR ...]".into())
            }
            _ => paths.push(PathBuf::from(arg)),
        }
    }
    Ok(Args { config, paths })
}

fn load_all(registry: &mut VehicleRegistry, paths: &[PathBuf]) -> VehicleResult<LoadSummary> {
    let mut total = LoadSummary::default();
    for path in paths {
        let summary = if path.is_dir() {
            registry.load_dir(path)?
        } else {
            registry.load_file(path)?
        };
        total.absorb(summary);
    }
    Ok(total)
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let config = match &args.config {
        Some(path) => match LoaderConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to read config {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => LoaderConfig::default(),
    };

    let images = Arc::new(DirectoryImageResolver::new(&config.image_root));
    let mut registry = VehicleRegistry::with_config(images, &config);

    let paths: Vec<PathBuf> = config
        .definition_dirs
        .iter()
        .cloned()
        .chain(args.paths)
        .collect();
    if paths.is_empty() {
        eprintln!("No definition files or directories given");
        return ExitCode::FAILURE;
    }

    let summary = match load_all(&mut registry, &paths) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("Load failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        defined = summary.defined,
        rejected = summary.rejected,
        "vehicle definitions loaded"
    );

    print!("{}", describe_registry(&registry, summary));
    let mut errors = 0;
    for diag in registry.diagnostics() {
        if diag.severity == Severity::Error {
            errors += 1;
        }
        println!("{diag}");
    }

    if errors == 0 && summary.rejected == 0 && summary.failed_documents == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
