use std::path::PathBuf;
use std::process;

use clap::Args;

use super::{report_failure, resolve_config, translate_all, EmitArgs};

#[derive(Args)]
pub struct BuildArgs {
    /// Input syntax trees (.json)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
    /// Output .wat file (default: <input>.wat; single input only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Source text the tree was parsed from, used to label violations (single input only)
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,
    #[command(flatten)]
    pub emit: EmitArgs,
}

pub fn cmd_build(args: BuildArgs) {
    let BuildArgs {
        inputs,
        output,
        source,
        emit,
    } = args;
    if inputs.len() > 1 && (output.is_some() || source.is_some()) {
        eprintln!("error: --output and --source take a single input");
        process::exit(1);
    }

    let config = resolve_config(&emit, &inputs[0]);
    let mut failed = false;
    for translated in translate_all(&inputs, &config) {
        let wat = match translated.result {
            Ok(wat) => wat,
            Err(e) => {
                report_failure(&translated.input, &e, source.as_deref());
                failed = true;
                continue;
            }
        };
        let out_path = output
            .clone()
            .unwrap_or_else(|| translated.input.with_extension("wat"));
        if let Err(e) = std::fs::write(&out_path, &wat) {
            eprintln!("error: cannot write '{}': {}", out_path.display(), e);
            process::exit(1);
        }
        eprintln!("Compiled -> {}", out_path.display());
    }
    if failed {
        process::exit(1);
    }
}
