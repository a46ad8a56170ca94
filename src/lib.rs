// Infrastructure layer (shared components)
pub mod infrastructure;

pub use infrastructure::config;
pub use infrastructure::error;
pub use infrastructure::metrics;

// Domain layer (rendering model)
pub mod domain;

pub use domain::blueprint;
pub use domain::component;
pub use domain::template;

// Supporting modules
pub mod telemetry;
pub mod cli;
