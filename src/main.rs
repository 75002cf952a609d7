// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedFolio - photo portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  -h, --help              Print help information
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --config-dir <PATH>     Directory containing settings.toml

ENVIRONMENT:
  ICED_FOLIO_CONFIG_DIR   Same as --config-dir
  RUST_LOG                Log filter (default: iced_folio=info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    init_logging();

    let flags = Flags {
        lang: parse_option(&mut args, "--lang"),
        config_dir: parse_option(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());

    app::run(flags)
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_folio=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Reads `--name <value>`; a malformed value is logged and ignored.
fn parse_option(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = name, error = %err, "invalid command-line option");
            None
        }
    }
}
