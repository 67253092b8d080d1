// SPDX-License-Identifier: MPL-2.0
use deep_zoomer::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
DeepZoomer - explore the NASA image archive

USAGE:
  deep_zoomer [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --query <TEXT>           Open the gallery and search for TEXT
  --config-dir <PATH>      Directory holding settings.toml

ENVIRONMENT:
  DEEP_ZOOMER_CONFIG_DIR   Same as --config-dir
  RUST_LOG                 Log filter (default: warn)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        query: args.opt_value_from_str("--query")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
