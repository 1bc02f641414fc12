// SPDX-License-Identifier: MPL-2.0
use focus_rail::app::{self, Flags};
use focus_rail::config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "focus_rail=info";
const USAGE: &str = "Usage: focus_rail [--items <file>] [--config-dir <dir>] \
                     [--scroll] [--no-loop] [--autoplay]";

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        items_path: args.opt_value_from_str("--items")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        scroll: args.contains("--scroll"),
        no_loop: args.contains("--no-loop"),
        autoplay: args.contains("--autoplay"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!(%err, "invalid command line");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    config::paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
