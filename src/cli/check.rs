use std::path::PathBuf;
use std::process;

use clap::Args;

use super::{report_failure, resolve_config, translate_all, EmitArgs};

#[derive(Args)]
pub struct CheckArgs {
    /// Input syntax trees (.json)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
    #[command(flatten)]
    pub emit: EmitArgs,
}

pub fn cmd_check(args: CheckArgs) {
    let config = resolve_config(&args.emit, &args.inputs[0]);
    let mut failed = 0usize;
    for translated in translate_all(&args.inputs, &config) {
        match translated.result {
            Ok(_) => eprintln!("OK: {}", translated.input.display()),
            Err(e) => {
                report_failure(&translated.input, &e, None);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        eprintln!("{} of {} inputs failed", failed, args.inputs.len());
        process::exit(1);
    }
}
