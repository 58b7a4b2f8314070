//! Composition root for the nearby item repository.
//!
//! Loads configuration, connects to the store, and wires every use case to
//! its adapters. Callers (a web layer, a job runner) hold an [`App`] and reach
//! the operations through [`App::container`].
//!
//! - config/: Environment-driven configuration (database, Yelp)
//! - setup/: Dependency injection

pub mod config {
    pub mod app_config;
    pub mod database_config;
    pub mod yelp_config;
}
pub mod setup {
    pub mod dependency_injection;
}

mod app;

pub use app::App;
pub use config::app_config::AppConfig;
pub use setup::dependency_injection::DependencyContainer;
