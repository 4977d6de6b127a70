//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Deploy destination configuration (`[deploy]` table)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Local artifact path, relative to the invocation directory
    #[serde(default = "default_artifact")]
    pub artifact: String,

    /// Deployment target host
    #[serde(default = "default_host")]
    pub host: String,

    /// Remote account; prompted interactively when empty
    #[serde(default)]
    pub user: String,

    /// Remote shell/transfer port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Destination file path on the remote host
    #[serde(default = "default_remote_path")]
    pub remote_path: String,

    /// Run the post-deploy HTTP check
    #[serde(default = "default_verify")]
    pub verify: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            artifact: default_artifact(),
            host: default_host(),
            user: String::new(),
            port: default_port(),
            remote_path: default_remote_path(),
            verify: default_verify(),
        }
    }
}

fn default_artifact() -> String {
    "dashboard.html".to_string()
}

fn default_host() -> String {
    "dashboard.finsight.in".to_string()
}

fn default_port() -> u16 {
    22
}

fn default_remote_path() -> String {
    "/var/www/html/dashboard.html".to_string()
}

fn default_verify() -> bool {
    true
}

/// Top-level configuration (`dashpush.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_dashboard() {
        let config = Config::default();
        assert_eq!(config.deploy.artifact, "dashboard.html");
        assert_eq!(config.deploy.host, "dashboard.finsight.in");
        assert_eq!(config.deploy.port, 22);
        assert_eq!(config.deploy.remote_path, "/var/www/html/dashboard.html");
        assert!(config.deploy.user.is_empty());
        assert!(config.deploy.verify);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [deploy]
            host = "staging.finsight.in"
            user = "ops"
            "#,
        )
        .unwrap();
        assert_eq!(config.deploy.host, "staging.finsight.in");
        assert_eq!(config.deploy.user, "ops");
        assert_eq!(config.deploy.port, 22);
        assert_eq!(config.deploy.remote_path, "/var/www/html/dashboard.html");
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.deploy.host, Config::default().deploy.host);
    }
}
