// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_reel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut args = pico_args::Arguments::from_env();

    let config_path = match args.opt_value_from_str::<_, PathBuf>("--config") {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!("Ignoring --config: {}", err);
            None
        }
    };

    let flags = Flags {
        gallery_path: args.finish().into_iter().next().map(PathBuf::from),
        config_path,
    };

    app::run(flags)
}
