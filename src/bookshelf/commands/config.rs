use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShelfConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `config.json` in `config_dir`. Unknown keys and bad
/// values come back as error messages; only IO and parse failures are `Err`.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShelfConfig::load(config_dir)?;

    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => config
            .get(&key)
            .map(CmdMessage::info)
            .unwrap_or_else(|| CmdMessage::error(format!("Unknown config key: {}", key))),
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Err(e) => CmdMessage::error(e.to_string()),
            Ok(()) => {
                config.save(config_dir)?;
                let shown = config.get(&key).unwrap_or(value);
                let mut result = CmdResult::default().with_config(config);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
                return Ok(result);
            }
        },
    };

    let mut result = CmdResult::default();
    result.add_message(message);
    Ok(result)
}
