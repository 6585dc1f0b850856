use super::ValidatorConfig;
use std::error::Error;
use std::fs;

use tracing::info;

/// Loads and parses the validator configuration from a YAML file
///
/// # Arguments
///
/// * `file_path` - Path to the YAML configuration file
///
/// # Returns
///
/// * `Result<ValidatorConfig, Box<dyn Error>>` - The parsed configuration on success,
///   or an error if loading/parsing fails
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into a ValidatorConfig
pub fn load_config(file_path: &str) -> Result<ValidatorConfig, Box<dyn Error>> {
    let yaml_str = fs::read_to_string(file_path)?;
    let config: ValidatorConfig = serde_yaml::from_str(&yaml_str)?;
    info!("Loaded validator configuration: {:?}", config.endpoint);
    Ok(config)
}
