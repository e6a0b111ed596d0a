use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::process::Command;

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

/// A config that parses but names an impossible offset or grid would
/// only fail later, on the first booking. Catch it here.
fn check_settings(cfg: &Config) -> AppResult<()> {
    cfg.shop_zone()?;
    if cfg.slot_interval == 0 {
        return Err(AppError::Config("slot_interval must be positive".into()));
    }
    if cfg.admin_grid()?.is_empty() {
        return Err(AppError::Config(format!(
            "admin grid {}-{} has no slots",
            cfg.admin_grid_start, cfg.admin_grid_end
        )));
    }
    Ok(())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", cfg.to_yaml()?);
    }

    if *edit_config {
        if !path.exists() {
            fs::create_dir_all(Config::config_dir())?;
            fs::write(&path, cfg.to_yaml()?)?;
        }

        let editor_to_use = editor.clone().unwrap_or_else(default_editor);
        let status = Command::new(&editor_to_use).arg(&path).status();
        if !matches!(status, Ok(s) if s.success()) {
            warning(format!("Editor '{}' exited with an error", editor_to_use));
        }

        let edited = Config::from_yaml(&fs::read_to_string(&path)?)?;
        check_settings(&edited)?;
        success(format!("Configuration saved: {}", path.display()));
    }

    Ok(())
}
