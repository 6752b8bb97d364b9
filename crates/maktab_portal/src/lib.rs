pub mod adapters;
pub mod config;
pub mod error;
pub mod session;

pub use config::{Config, ConfigError};
pub use error::PortalError;
pub use session::{
    AdminPortal, AdminStore, InstructorPortal, InstructorStore, Portal, Session, SessionStore,
    Snapshot, StudentPortal, StudentStore,
};

use std::sync::Arc;

use adapters::{directory::FixtureDirectory, flags::MemoryFlagStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the three role stores over one shared flag store (one browser,
/// three distinct keys) and one credential directory. Each store stays
/// siloed; only the collaborators are shared.
pub fn build_stores(config: &Config) -> (StudentStore, InstructorStore, AdminStore) {
    let flags = Arc::new(MemoryFlagStore::new());
    let directory = Arc::new(FixtureDirectory::new(config.login_delay));
    (
        SessionStore::new(flags.clone(), directory.clone()),
        SessionStore::new(flags.clone(), directory.clone()),
        SessionStore::new(flags, directory),
    )
}

/// Installs the global tracing subscriber the way the embedding portal
/// binaries expect it: env-filterable, formatted output.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
