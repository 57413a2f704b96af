use std::path::PathBuf;

use serde::Deserialize;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_base_port() -> u16 {
    8088
}

fn default_port_attempts() -> u16 {
    16
}

fn default_max_connections() -> usize {
    64
}

fn default_root() -> PathBuf {
    PathBuf::from("web-root")
}

/// Server configuration.
///
/// Loadable from a YAML file; every field falls back to a default so a
/// partial file (or none at all) is fine.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Interface to bind; the co-located viewer always connects over loopback.
    #[serde(default = "default_host")]
    pub host: String,

    /// First port to try when binding.
    #[serde(default = "default_base_port")]
    pub base_port: u16,

    /// How many consecutive ports to try before giving up.
    #[serde(default = "default_port_attempts")]
    pub port_attempts: u16,

    /// Upper bound on concurrently handled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Directory tree the server is allowed to read from.
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            base_port: default_base_port(),
            port_attempts: default_port_attempts(),
            max_connections: default_max_connections(),
            root: default_root(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `CONFIG`, if set,
    /// then applies `DOC_ROOT` and `BASE_PORT` overrides from the environment.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)?;
                Self::from_yaml(&text)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(root) = std::env::var("DOC_ROOT") {
            cfg.root = PathBuf::from(root);
        }
        if let Ok(port) = std::env::var("BASE_PORT") {
            cfg.base_port = port.parse()?;
        }

        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
