//! Service configuration.
//!
//! Settings come from an optional `config.{toml,yaml,json}` file in the
//! working directory, overridden by `SWRPG__`-prefixed environment variables
//! (`SWRPG__SERVER__PORT=9000`). Everything has a default, so the service
//! starts with no configuration at all.

mod loader;
mod static_config;

pub use loader::load_config;
pub use static_config::SessionConfig;
