use std::path::PathBuf;

use clap::Subcommand;
use weekplan_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "preferences.study_block_minutes")
        key: String,
        /// Config file (default: ~/.config/weekplan/config.toml)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
        /// Config file (default: ~/.config/weekplan/config.toml)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List all config values
    List {
        /// Config file (default: ~/.config/weekplan/config.toml)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Reset config to defaults
    Reset {
        /// Config file (default: ~/.config/weekplan/config.toml)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn load(file: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    Ok(match file {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    })
}

fn save(config: &Config, file: Option<&PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    match file {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    Ok(())
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key, file } => {
            let config = load(file.as_ref())?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value, file } => {
            let mut config = load(file.as_ref())?;
            config.set(&key, &value)?;
            save(&config, file.as_ref())?;
            println!("ok");
        }
        ConfigAction::List { file } => {
            let config = load(file.as_ref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset { file } => {
            save(&Config::default(), file.as_ref())?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
