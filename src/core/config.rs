use crate::config::{Config, migrate};
use crate::core::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", cfg.path.display());
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report keys the file lacks. Returns them for the caller.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist (run `fuellog init`)",
                path.display()
            )));
        }

        let missing = migrate::missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Missing fields (defaults in use): {}",
                missing.join(", ")
            ));
            info("Run `fuellog config --migrate` to write them to the file.");
        }
        Ok(missing)
    }

    pub fn migrate(cfg: &Config) -> AppResult<Vec<String>> {
        if !cfg.path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist (run `fuellog init`)",
                cfg.path.display()
            )));
        }

        let added = migrate::migrate_missing_fields(&cfg.path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added fields: {}", added.join(", ")));
            ttlog(
                &cfg.log_file(),
                "config_migrate",
                &cfg.path.display().to_string(),
                &format!("added {}", added.join(", ")),
            );
        }
        Ok(added)
    }

    /// Open the file in the requested editor, falling back to $EDITOR/$VISUAL
    /// or the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        if run_editor(&requested, path) {
            success(format!("Configuration file edited using '{requested}'"));
            return Ok(());
        }

        warning(format!(
            "Editor '{requested}' not available, falling back to '{default_editor}'"
        ));

        if requested != default_editor && run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited using fallback '{default_editor}'"
            ));
            return Ok(());
        }

        Err(AppError::Config(format!(
            "failed to edit {} with '{default_editor}'",
            path.display()
        )))
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
