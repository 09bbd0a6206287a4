use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ThemeName};

/// Superhero roster in the terminal.
#[derive(Debug, Parser)]
#[command(name = "herolist", version, about)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/herolist/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Load heroes from a TOML catalogue instead of the built-in roster.
    #[arg(long, value_name = "PATH")]
    pub heroes: Option<PathBuf>,

    /// Show the list without the entrance animation.
    #[arg(long)]
    pub no_animation: bool,

    /// Colour theme.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeName>,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Flags win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.heroes {
            config.data.heroes_file = Some(path.clone());
        }
        if self.no_animation {
            config.animation.enabled = false;
        }
        if let Some(theme) = self.theme {
            config.ui.theme = theme;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leave_config_alone() {
        let cli = Cli::parse_from(["herolist"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "herolist",
            "--heroes",
            "/tmp/heroes.toml",
            "--no-animation",
            "--theme",
            "light",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(
            config.data.heroes_file,
            Some(PathBuf::from("/tmp/heroes.toml"))
        );
        assert!(!config.animation.enabled);
        assert_eq!(config.ui.theme, ThemeName::Light);
    }

    #[test]
    fn explicit_config_path_wins() {
        let cli = Cli::parse_from(["herolist", "--config", "/tmp/custom.toml"]);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/custom.toml"));
    }
}
