use crate::error::Result;
use crate::ui;
use server::config::write_default_config;
use std::path::Path;

pub fn execute(config_path: String, force: bool) -> Result<()> {
    ui::status_message("Creating configuration file");
    write_default_config(Path::new(&config_path), force)?;

    ui::success_message(&format!("Created {config_path}"));
    ui::info_message(&format!(
        "Edit the [identity] section of {config_path}, then run `bfhl serve`"
    ));
    Ok(())
}
