pub mod settings;

pub use settings::{AuthConfig, BackendConfig, ProcessorConfig, Settings};
