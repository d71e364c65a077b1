pub mod build;
pub mod check;
pub mod targets;

use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use rayon::prelude::*;
use tracing::{debug, info};

use julia_wasm::{AssembleError, EmitConfig};

/// Emission options shared by `build` and `check`.
#[derive(Args, Clone, Debug)]
pub struct EmitArgs {
    /// Target backend (default: from julia-wasm.toml, else wasm)
    #[arg(long)]
    pub target: Option<String>,
    /// Spaces per indentation level
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
    /// Config file (default: nearest julia-wasm.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Resolve the effective config: config file first, then CLI overrides.
pub fn resolve_config(args: &EmitArgs, input: &Path) -> EmitConfig {
    let search_dir = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let path = args.config.clone().or_else(|| EmitConfig::find(search_dir));

    let mut config = match path {
        Some(path) => match EmitConfig::load(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        },
        None => EmitConfig::default(),
    };

    if let Some(target) = &args.target {
        config = config.with_target(target);
    }
    if let Some(width) = args.indent {
        config = config.with_indent_width(width);
    }
    config
}

pub enum Failure {
    Read(std::io::Error),
    Assemble(AssembleError),
}

/// Outcome of translating one input file.
pub struct Translated {
    pub input: PathBuf,
    pub result: Result<String, Failure>,
}

/// Read and translate every input. Translations are independent and run in parallel.
pub fn translate_all(inputs: &[PathBuf], config: &EmitConfig) -> Vec<Translated> {
    info!(count = inputs.len(), target = %config.target, "translating");
    inputs
        .par_iter()
        .map(|input| Translated {
            input: input.clone(),
            result: translate_file(input, config),
        })
        .collect()
}

fn translate_file(input: &Path, config: &EmitConfig) -> Result<String, Failure> {
    let json = std::fs::read_to_string(input).map_err(Failure::Read)?;
    julia_wasm::assemble_json(&json, config).map_err(Failure::Assemble)
}

/// Print a failed translation. Violations render against `source` when given.
pub fn report_failure(input: &Path, failure: &Failure, source: Option<&Path>) {
    let err = match failure {
        Failure::Read(e) => {
            eprintln!("error: cannot read '{}': {}", input.display(), e);
            return;
        }
        Failure::Assemble(err) => err,
    };
    let Some(diag) = err.diagnostic() else {
        eprintln!("error: {}: {}", input.display(), err);
        return;
    };
    match source {
        Some(source_path) => match std::fs::read_to_string(source_path) {
            Ok(text) => diag.render(&source_path.to_string_lossy(), &text),
            Err(e) => {
                eprintln!("warning: cannot read '{}': {}", source_path.display(), e);
                diag.render_plain(&input.to_string_lossy());
            }
        },
        None => diag.render_plain(&input.to_string_lossy()),
    }
}
