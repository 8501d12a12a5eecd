use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Profile identity persisted between sessions. Builds and accounts are
/// session-only; this is the one thing the app remembers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub profile_name: String,
    pub profile_email: String,
    #[serde(default)]
    pub profile_tagline: String,
    #[serde(default = "default_member_since")]
    pub member_since: NaiveDate,
}

fn default_member_since() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_name: "John Doe".to_string(),
            profile_email: "john.doe@example.com".to_string(),
            profile_tagline: "PC Enthusiast".to_string(),
            member_since: default_member_since(),
        }
    }
}

impl Config {
    fn config_path() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".pcbuilder-tui").join("config.json"))
    }

    /// Load the saved profile. A missing or unreadable file is not an
    /// error; callers fall back to [`Config::default`].
    pub fn load() -> Option<Config> {
        let contents = fs::read_to_string(Self::config_path()?).ok()?;
        serde_json::from_str(&contents).ok()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path =
            Self::config_path().ok_or_else(|| anyhow::anyhow!("could not resolve HOME"))?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_take_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"profile_name":"Ada","profile_email":"ada@example.com"}"#)
                .unwrap();
        assert_eq!(config.profile_tagline, "");
        assert_eq!(config.member_since, default_member_since());
    }

    #[test]
    fn test_member_since_parses_iso_date() {
        let config: Config = serde_json::from_str(
            r#"{"profile_name":"Ada","profile_email":"a@b.co","member_since":"2022-07-04"}"#,
        )
        .unwrap();
        assert_eq!(
            config.member_since,
            NaiveDate::from_ymd_opt(2022, 7, 4).unwrap()
        );
    }
}
