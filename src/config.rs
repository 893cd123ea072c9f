//! Environment-driven settings. A `.env` file is loaded first when present.

use std::path::PathBuf;

pub const DEFAULT_REGISTRATIONS_URL: &str =
    "https://apsimdev.apsim.info/APSIM.Registration.Portal/ViewRegistrations.aspx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Web service returning the registrations CSV.
    pub registrations_url: String,
    /// Where the fetched payload is cached.
    pub registrations_file: PathBuf,
    /// Directory receiving map, frame and series output.
    pub output_dir: PathBuf,
    pub log_file_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            registrations_url: get("REGISTRATIONS_URL", DEFAULT_REGISTRATIONS_URL),
            registrations_file: get("REGISTRATIONS_FILE", "registrations.csv").into(),
            output_dir: get("OUTPUT_DIR", "output").into(),
            log_file_path: get("LOG_FILE_PATH", "logs/download_atlas.log").into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings.registrations_url, DEFAULT_REGISTRATIONS_URL);
        assert_eq!(settings.registrations_file, PathBuf::from("registrations.csv"));
        assert_eq!(settings.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("REGISTRATIONS_URL", "http://localhost:8080/regos"),
            ("OUTPUT_DIR", "  "),
            ("LOG_FILE_PATH", "/tmp/atlas.log"),
        ]);
        let settings = Settings::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(settings.registrations_url, "http://localhost:8080/regos");
        assert_eq!(settings.output_dir, PathBuf::from("output"));
        assert_eq!(settings.log_file_path, PathBuf::from("/tmp/atlas.log"));
    }
}
