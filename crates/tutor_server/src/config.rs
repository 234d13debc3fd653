//! Server configuration, read once from the environment at startup.

const DEFAULT_ADDR: &str = "0.0.0.0:8001";

#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API key; `None` means annotations degrade to the fallback
    /// text and the draw proxy reports an error, but the server still runs.
    pub groq_api_key: Option<String>,
    /// Socket address to bind, `TUTORBOARD_ADDR`.
    pub addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            groq_api_key: std::env::var("GROQ_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            addr: std::env::var("TUTORBOARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_port_8001() {
        let config = Config::default();
        assert_eq!(config.addr, "0.0.0.0:8001");
        assert!(config.groq_api_key.is_none());
    }
}
