use config::{Config, Environment, Map};
use log::debug;
use snafu::{ResultExt, Snafu};

use super::models::Settings;

pub fn load_config() -> Result<Settings, SettingsError> {
    // As Rust has no native support for .env files,
    // we use the dotenv_flow crate to import to actual ENV vars.
    if let Ok(dotenv_path) = dotenv_flow::dotenv_flow() {
        debug!("Loaded dotenv file: {:?}", dotenv_path);
    }

    load_config_from(None)
}

/// Builds the settings from `P2P_` prefixed variables, read from `source`
/// when given and from the process environment otherwise.
fn load_config_from(source: Option<Map<String, String>>) -> Result<Settings, SettingsError> {
    let mut builder = Config::builder()
        .add_source(Environment::default()
            .prefix("P2P")
            .separator("_")
            .prefix_separator("_")
            .source(source))
            .set_default("outputdir", ".").context(BuildSnafu)?
            .set_default("pkginfo.minimumosversion", "10.7.0").context(BuildSnafu)?;

    if let Ok(user) = std::env::var("USER") {
        builder = builder.set_default("pkginfo.createdby", user).context(BuildSnafu)?;
    }

    let config = builder.build().context(BuildSnafu)?;
    let settings: Settings = config.try_deserialize().context(DeserializeSnafu)?;
    debug!("Loaded settings: {:?}", settings);
    Ok(settings)
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("Could not assemble configuration sources"))]
    Build { source: config::ConfigError },

    #[snafu(display("Invalid configuration"))]
    Deserialize { source: config::ConfigError },
}
