use std::path::Path;

/// Config file looked up in the current working directory
pub const LOCAL_CONFIG_FILE: &str = ".goals-todos.toml";

/// Load config file content from CWD first, then the config directory
///
/// Searches for:
/// 1. `.goals-todos.toml` in the current working directory
/// 2. `config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Some(content) = read_config(Path::new(LOCAL_CONFIG_FILE)) {
        return Some(content);
    }

    crate::paths::app_config_path()
        .ok()
        .and_then(|path| read_config(&path))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}
