pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::{ChannelUpdater, LogNavigator, LogNotifier};
pub use adapters::http::RestApiClient;
pub use config::CliConfig;
pub use core::workflow::{Phase, RateWorkflow};
pub use utils::error::{LabelError, Result};
