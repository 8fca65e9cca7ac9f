// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags, Startup};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_folio - personal portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --route <path>       Page to open (e.g. /projects)
  --data-dir <dir>     Directory for storage.cbor [env: ICED_FOLIO_DATA_DIR]
  --config-dir <dir>   Directory for settings.toml [env: ICED_FOLIO_CONFIG_DIR]
  -h, --help           Print this help

Log verbosity follows RUST_LOG (default: iced_folio=info).
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_folio=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let startup = match Startup::load(flags) {
        Ok(startup) => startup,
        Err(err) => {
            tracing::error!(error = %err, "failed to load embedded content");
            return ExitCode::FAILURE;
        }
    };

    match app::run(startup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

/// Parses CLI flags; `Ok(None)` means help was requested.
fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        route: args.opt_value_from_str("--route")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}
