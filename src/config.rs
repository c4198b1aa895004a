use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "MediScan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tracing filter used when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "mediscan=info"
}

/// Get the application data directory
pub fn app_data_dir() -> PathBuf {
    let data = dirs::data_dir().expect("Cannot determine data directory");
    data.join(APP_NAME)
}

/// Default location of the persisted checklist state blob.
pub fn checklist_state_path() -> PathBuf {
    app_data_dir().join("checklist.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_platform_data_dir() {
        let dir = app_data_dir();
        let data = dirs::data_dir().unwrap();
        assert!(dir.starts_with(data));
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn state_path_under_app_data() {
        let path = checklist_state_path();
        assert!(path.starts_with(app_data_dir()));
        assert!(path.ends_with("checklist.json"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
