//! Account profile management
//!
//! Profiles are named references to WebDAV storage accounts, including
//! endpoint, credentials and an optional cached capabilities document.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ConfigManager;
use crate::error::{Error, Result};

/// A profile represents a named WebDAV storage account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique name for this profile
    pub name: String,

    /// Server base URL
    pub endpoint: String,

    /// Account user name
    pub user: String,

    /// App password / token
    pub app_password: String,

    /// Allow insecure TLS connections
    #[serde(default)]
    pub insecure: bool,

    /// Path to a cached server capabilities document (JSON). When unset,
    /// the built-in default naming policy applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities_file: Option<String>,
}

impl Profile {
    /// Create a new profile with required fields
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        user: impl Into<String>,
        app_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            user: user.into(),
            app_password: app_password.into(),
            insecure: false,
            capabilities_file: None,
        }
    }

    /// Validate the endpoint as an absolute http(s) URL
    pub fn validate_endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::Config(format!(
                "Unsupported endpoint scheme '{other}' for profile '{}'",
                self.name
            ))),
        }
    }
}

/// Manager for profile operations
pub struct ProfileManager {
    config_manager: ConfigManager,
}

impl ProfileManager {
    /// Create a new ProfileManager with a specific ConfigManager
    pub fn with_config_manager(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    /// Create a new ProfileManager using the default config location
    pub fn new() -> Result<Self> {
        let config_manager = ConfigManager::new()?;
        Ok(Self { config_manager })
    }

    /// List all configured profiles
    pub fn list(&self) -> Result<Vec<Profile>> {
        let config = self.config_manager.load()?;
        Ok(config.profiles)
    }

    /// Get a profile by name
    pub fn get(&self, name: &str) -> Result<Profile> {
        let config = self.config_manager.load()?;
        config
            .profiles
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::ProfileNotFound(name.to_string()))
    }

    /// Add or update a profile
    pub fn set(&self, profile: Profile) -> Result<()> {
        let mut config = self.config_manager.load()?;

        // Remove existing profile with same name
        config.profiles.retain(|p| p.name != profile.name);
        config.profiles.push(profile);

        self.config_manager.save(&config)
    }

    /// Remove a profile
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut config = self.config_manager.load()?;
        let original_len = config.profiles.len();

        config.profiles.retain(|p| p.name != name);

        if config.profiles.len() == original_len {
            return Err(Error::ProfileNotFound(name.to_string()));
        }

        self.config_manager.save(&config)
    }

    /// Check if a profile exists
    pub fn exists(&self, name: &str) -> Result<bool> {
        let config = self.config_manager.load()?;
        Ok(config.profiles.iter().any(|p| p.name == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_profile_manager() -> (ProfileManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_manager = ConfigManager::with_path(config_path);
        let profile_manager = ProfileManager::with_config_manager(config_manager);
        (profile_manager, temp_dir)
    }

    #[test]
    fn test_profile_new() {
        let profile = Profile::new("cloud", "https://cloud.example.com", "alice", "secret");
        assert_eq!(profile.name, "cloud");
        assert_eq!(profile.endpoint, "https://cloud.example.com");
        assert!(!profile.insecure);
        assert!(profile.capabilities_file.is_none());
    }

    #[test]
    fn test_profile_validate_endpoint() {
        let profile = Profile::new("cloud", "https://cloud.example.com", "alice", "secret");
        assert!(profile.validate_endpoint().is_ok());

        let profile = Profile::new("bad", "ftp://cloud.example.com", "alice", "secret");
        assert!(profile.validate_endpoint().is_err());

        let profile = Profile::new("bad", "not a url", "alice", "secret");
        assert!(profile.validate_endpoint().is_err());
    }

    #[test]
    fn test_profile_manager_set_and_get() {
        let (manager, _temp_dir) = temp_profile_manager();

        let profile = Profile::new("cloud", "https://cloud.example.com", "alice", "secret");
        manager.set(profile).unwrap();

        let retrieved = manager.get("cloud").unwrap();
        assert_eq!(retrieved.name, "cloud");
        assert_eq!(retrieved.endpoint, "https://cloud.example.com");
    }

    #[test]
    fn test_profile_manager_list_and_remove() {
        let (manager, _temp_dir) = temp_profile_manager();

        manager
            .set(Profile::new("a", "https://a.example.com", "a", "a"))
            .unwrap();
        manager
            .set(Profile::new("b", "https://b.example.com", "b", "b"))
            .unwrap();
        assert_eq!(manager.list().unwrap().len(), 2);

        manager.remove("a").unwrap();
        assert!(!manager.exists("a").unwrap());
        assert_eq!(manager.list().unwrap().len(), 1);
    }

    #[test]
    fn test_profile_manager_not_found() {
        let (manager, _temp_dir) = temp_profile_manager();

        assert!(matches!(
            manager.get("nonexistent").unwrap_err(),
            Error::ProfileNotFound(_)
        ));
        assert!(matches!(
            manager.remove("nonexistent").unwrap_err(),
            Error::ProfileNotFound(_)
        ));
    }

    #[test]
    fn test_profile_update_existing() {
        let (manager, _temp_dir) = temp_profile_manager();

        manager
            .set(Profile::new("cloud", "https://old.example.com", "a", "b"))
            .unwrap();
        manager
            .set(Profile::new("cloud", "https://new.example.com", "c", "d"))
            .unwrap();

        let profiles = manager.list().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].endpoint, "https://new.example.com");
    }
}
