mod settings;

pub use settings::{LoggingConfig, OutputConfig, Settings, TemplatesConfig};
