use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub retrieval: RetrievalConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (trunk `dist`)
    pub static_dir: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    /// Chunks passed to the model as context
    pub top_k: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Model id used when the request does not name one
    pub default_model: String,
    pub temperature: f64,
    pub max_tokens: i32,
    pub models: Vec<LlmModelConfig>,
}

/// One entry of the model selector
#[derive(Debug, Deserialize, Clone)]
pub struct LlmModelConfig {
    /// Id sent by the UI (`llm` field)
    pub id: String,
    /// Model name passed to the API
    pub model: String,
    /// OpenAI-compatible base URL; the OpenAI default when absent
    #[serde(default)]
    pub api_endpoint: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

/// The workspace config.toml, embedded as the fallback
const DEFAULT_CONFIG: &str = include_str!("../../../../config.toml");

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if !config.llm.models.iter().any(|m| m.id == config.llm.default_model) {
        anyhow::bail!(
            "llm.default_model '{}' is not listed in llm.models",
            config.llm.default_model
        );
    }
    if config.retrieval.top_k == 0 {
        anyhow::bail!("retrieval.top_k must be at least 1");
    }
    Ok(config)
}
