use thiserror::Error;

use eventscope_config::ConfigError;
use eventscope_core::EventError;
use eventscope_feed::FeedError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
