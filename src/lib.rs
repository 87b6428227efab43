pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{ConsoleEmitter, HttpTeacherFactory, RestClient, TerminalPrompter};
pub use config::toml_config::TomlConfig;
pub use core::aggregator::SeedUriAggregator;
pub use core::bootstrap::{BootstrapRequest, TeacherBootstrapper};
pub use core::external_ip::ExternalAddressResolver;
pub use core::static_nodes::StaticNodeStore;
pub use core::teachers::HardcodedTeachers;
pub use utils::error::{Result, SeedError};
