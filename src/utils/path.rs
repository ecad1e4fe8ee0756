use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/condor, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join("condor")
}

/// Get the config file path (~/.config/condor/config.toml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory for the log file, under the platform cache dir
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("condor")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = get_config_path();
        assert!(path.ends_with(".config/condor/config.toml"));
    }

    #[test]
    fn test_log_dir_is_namespaced() {
        assert!(get_log_dir().ends_with("condor"));
    }
}
