use std::path::Path;

use tabmark_common::{ConfigError, TabmarkError};
use tabmark_config::toml_loader::{create_default_config, default_config_path, load_from_path};
use tabmark_config::{config_to_json, config_to_toml, save_config_to_path, validation, TabmarkConfig};

use crate::cli::{Args, ConfigCommand};

pub(super) fn run(args: &Args, cmd: &ConfigCommand) -> Result<(), TabmarkError> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    match cmd {
        ConfigCommand::Path => println!("{}", path.display()),
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(TabmarkError::Other(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            create_default_config(&path)?;
            println!("wrote {}", path.display());
        }
        ConfigCommand::Show { json } => {
            let config = tabmark_config::load_config(args.config.as_deref())?;
            if *json {
                println!("{}", config_to_json(&config));
            } else {
                print!("{}", config_to_toml(&config)?);
            }
        }
        ConfigCommand::SetHomepage { url } => {
            let homepage = set_homepage(&path, url)?;
            println!("homepage is now {homepage}");
        }
    }
    Ok(())
}

/// Store a normalized `url` as `navigation.homepage` in the file at
/// `path`, starting from defaults when there is no file yet.
fn set_homepage(path: &Path, url: &str) -> Result<String, TabmarkError> {
    let mut config = match load_from_path(path) {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => TabmarkConfig::default(),
        Err(e) => return Err(e.into()),
    };
    config.navigation.homepage = tabmark_url::normalize(url)?.into_string();
    validation::validate(&config)?;
    save_config_to_path(&config, path)?;
    Ok(config.navigation.homepage)
}
