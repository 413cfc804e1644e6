// Infrastructure module - External dependencies and adapters
pub mod appliance;
pub mod config;
pub mod credentials;
pub mod logging;
