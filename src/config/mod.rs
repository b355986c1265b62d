mod settings;

pub use settings::{
    DirectoryConfig, LogConfig, LogFormat, RestorePolicy, SeedConfig, ServerConfig, SessionConfig,
    Settings,
};
