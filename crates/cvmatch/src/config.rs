use anyhow::Result;

/// Default sentence-embedding model, matching the upstream extraction
/// pipeline so scores stay comparable across services.
pub const DEFAULT_EMBEDDING_MODEL: &str = "all-MiniLM-L6-v2";

/// Library configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sentence-embedding model name (`EMBEDDING_MODEL`). A
    /// `sentence-transformers/` prefix is tolerated and stripped.
    pub embedding_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let raw = std::env::var("EMBEDDING_MODEL")
            .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string());
        let embedding_model = raw
            .strip_prefix("sentence-transformers/")
            .unwrap_or(&raw)
            .to_string();

        Ok(Config { embedding_model })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_name() {
        assert_eq!(Config::default().embedding_model, "all-MiniLM-L6-v2");
    }
}
