// crates/cli/src/config.rs
use crate::args::Args;
use text_stats_engine::config::{Config, ConfigBuilder};
use text_stats_engine::source::InputSource;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        ConfigBuilder::default()
            .input(InputSource::from_path(args.path))
            .build()
            .expect("Failed to build config")
    }
}
