use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::process::Command;

/// Handle the `config` subcommand: print the effective configuration or
/// open the config file in an editor.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{}", yaml);
        }

        if *edit_config {
            let editor_to_use = editor.clone().unwrap_or_else(default_editor);
            let path = Config::config_file();

            let status = Command::new(&editor_to_use)
                .arg(&path)
                .status()
                .map_err(|e| {
                    AppError::Config(format!("could not launch editor '{}': {}", editor_to_use, e))
                })?;

            if !status.success() {
                return Err(AppError::Config(format!(
                    "editor '{}' exited with {}",
                    editor_to_use, status
                )));
            }

            success(format!("Configuration file edited with '{}'.", editor_to_use));
        }
    }

    Ok(())
}

/// $EDITOR, then $VISUAL, then a platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}
