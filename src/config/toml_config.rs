use crate::core::external_ip::DEFAULT_ECHO_URL;
use crate::core::static_nodes::StaticNodeStore;
use crate::domain::model::{Domain, TeacherPolicy, TeacherUri};
use crate::utils::error::{Result, SeedError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DOMAIN: &str = "mainnet";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub address: AddressConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub teacher_uris: Vec<String>,
    #[serde(default)]
    pub min_stake: u64,
    #[serde(default)]
    pub federated_only: bool,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub config_root: Option<String>,
    pub static_nodes_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressConfig {
    pub echo_url: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SeedError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SeedError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SeedError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        for domain in &self.network.domains {
            crate::utils::validation::validate_non_empty_string("network.domains", domain)?;
        }

        if let Some(timeout) = self.network.request_timeout_seconds {
            crate::utils::validation::validate_positive_number(
                "network.request_timeout_seconds",
                timeout,
                1,
            )?;
        }

        if let Some(root) = &self.storage.config_root {
            crate::utils::validation::validate_path("storage.config_root", root)?;
        }
        if let Some(file) = &self.storage.static_nodes_file {
            crate::utils::validation::validate_path("storage.static_nodes_file", file)?;
        }

        crate::utils::validation::validate_url("address.echo_url", self.echo_url())?;

        Ok(())
    }

    /// Configured domains, or `mainnet` when none are set.
    pub fn domains(&self) -> BTreeSet<Domain> {
        if self.network.domains.is_empty() {
            return BTreeSet::from([DEFAULT_DOMAIN.to_string()]);
        }
        self.network.domains.iter().cloned().collect()
    }

    pub fn teacher_uris(&self) -> Vec<TeacherUri> {
        self.network
            .teacher_uris
            .iter()
            .map(|uri| TeacherUri::from(uri.as_str()))
            .collect()
    }

    pub fn policy(&self) -> TeacherPolicy {
        TeacherPolicy {
            min_stake: self.network.min_stake,
            federated_only: self.network.federated_only,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.network
                .request_timeout_seconds
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        )
    }

    pub fn config_root(&self) -> PathBuf {
        self.storage
            .config_root
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(super::default_config_root)
    }

    /// Explicit `static_nodes_file` wins over `<config root>/static-nodes.json`.
    pub fn static_node_store(&self) -> StaticNodeStore {
        match &self.storage.static_nodes_file {
            Some(file) => StaticNodeStore::new(file),
            None => StaticNodeStore::in_config_root(&self.config_root()),
        }
    }

    pub fn echo_url(&self) -> &str {
        self.address.echo_url.as_deref().unwrap_or(DEFAULT_ECHO_URL)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[network]
domains = ["lynx", "ibex"]
teacher_uris = ["https://10.0.0.5:9151"]
min_stake = 15000
federated_only = false
request_timeout_seconds = 3

[storage]
config_root = "/var/lib/seednodes"

[address]
echo_url = "https://echo.example/"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.domains().into_iter().collect::<Vec<_>>(),
            vec!["ibex".to_string(), "lynx".to_string()]
        );
        assert_eq!(config.teacher_uris(), vec![TeacherUri::from("https://10.0.0.5:9151")]);
        assert_eq!(config.policy().min_stake, 15000);
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(
            config.static_node_store().path(),
            Path::new("/var/lib/seednodes/static-nodes.json")
        );
        assert_eq!(config.echo_url(), "https://echo.example/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.domains(), BTreeSet::from([DEFAULT_DOMAIN.to_string()]));
        assert!(config.teacher_uris().is_empty());
        assert_eq!(config.policy(), TeacherPolicy::default());
        assert_eq!(
            config.request_timeout(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS)
        );
        assert_eq!(config.echo_url(), DEFAULT_ECHO_URL);
    }

    #[test]
    fn test_static_nodes_file_overrides_config_root() {
        let toml_content = r#"
[storage]
config_root = "/var/lib/seednodes"
static_nodes_file = "/etc/seednodes/peers.json"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.static_node_store().path(),
            Path::new("/etc/seednodes/peers.json")
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SEEDNODES_TEST_ECHO_URL", "https://echo.test/");

        let toml_content = r#"
[address]
echo_url = "${SEEDNODES_TEST_ECHO_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.echo_url(), "https://echo.test/");

        std::env::remove_var("SEEDNODES_TEST_ECHO_URL");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[network]
request_timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[address]
echo_url = "ftp://echo.example"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = TomlConfig::from_toml_str("[network\ndomains = 1").unwrap_err();
        assert!(matches!(err, SeedError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[network]\ndomains = [\"lynx\"]\nfederated_only = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.policy().federated_only);
        assert!(config.domains().contains("lynx"));
    }
}
