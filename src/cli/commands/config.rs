use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::missing_fields;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let missing = missing_fields(&path)?;
            if missing.is_empty() {
                success(format!("{} is complete.", path.display()));
            } else {
                warning(format!(
                    "{} is missing: {} (defaults are used)",
                    path.display(),
                    missing.join(", ")
                ));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            let edited = Command::new(&editor_to_use)
                .arg(&path)
                .status()
                .map(|s| s.success())
                .unwrap_or(false);

            if edited {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
            } else if editor_to_use != default_editor {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                let ok = Command::new(&default_editor)
                    .arg(&path)
                    .status()
                    .map(|s| s.success())
                    .unwrap_or(false);
                if !ok {
                    return Err(AppError::Config(format!(
                        "failed to edit configuration file using '{}'",
                        default_editor
                    )));
                }
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
            } else {
                return Err(AppError::Config(format!(
                    "failed to edit configuration file using '{}'",
                    editor_to_use
                )));
            }
        }
    }

    Ok(())
}
