// SPDX-License-Identifier: MPL-2.0
use astro_gallery::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `astro_gallery=debug`.
const LOG_ENV: &str = "ASTRO_GALLERY_LOG";
const DEFAULT_LOG_FILTER: &str = "astro_gallery=info";

const HELP: &str = "\
AstroGallery - astrophotography gallery

USAGE:
  astro_gallery [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --catalog <path>     Catalog TOML file to show instead of the built-in one
  --i18n-dir <dir>     Directory with .ftl files overriding the translations
  --config-dir <dir>   Directory holding settings.toml
  --data-dir <dir>     Directory holding the image cache
  -h, --help           Print this help

ENVIRONMENT:
  ASTRO_GALLERY_LOG          Log filter (default: astro_gallery=info)
  ASTRO_GALLERY_CONFIG_DIR   Config directory when --config-dir is absent
  ASTRO_GALLERY_DATA_DIR     Data directory when --data-dir is absent
";

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting AstroGallery");
    app::run(flags)
}

/// Returns `None` when help was requested.
fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_str("--catalog")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
