// SPDX-License-Identifier: MPL-2.0
use recto_verso::app::{self, paths, Flags};
use recto_verso::logging::{self, Verbosity};
use std::process::ExitCode;

const HELP: &str = "\
Annotate paired recto/verso scans

USAGE:
  recto_verso [OPTIONS]

OPTIONS:
  -h, --help             Print help
  -r, --root DIR         Working directory holding cropped/ and metadata/
      --lang LOCALE      Interface language (en-US, fr)
      --config-dir DIR   Directory holding settings.toml
  -v, --verbose          Debug logging (RUST_LOG takes precedence)
";

struct Args {
    flags: Flags,
    verbose: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        verbose: args.contains(["-v", "--verbose"]),
        flags: Flags {
            root: args.opt_value_from_str(["-r", "--root"])?,
            lang: args.opt_value_from_str("--lang")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
        },
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    logging::init_logging(Verbosity::from_flag(args.verbose));
    paths::init_cli_overrides(args.flags.config_dir.clone());

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
