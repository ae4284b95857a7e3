mod error;
mod io;
mod settings;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, Result};
pub use io::{load_config, save_config};
pub use settings::{
    AppConfig, AuthConfig, DEFAULT_PROCESS_URL, DEFAULT_TOKEN_URL, ENV_CLIENT_ID,
    ENV_CLIENT_SECRET, ENV_PROCESS_URL, ENV_TOKEN_URL, HttpConfig, ImageryConfig,
};
