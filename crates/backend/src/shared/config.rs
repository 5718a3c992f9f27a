use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub supabase: SupabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Каталог со сборкой фронтенда (trunk build)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[supabase]
url = "http://127.0.0.1:54321"
anon_key = ""
timeout_secs = 10
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// After that SUPABASE_URL, SUPABASE_ANON_KEY and BACKEND_PORT
/// from the environment take precedence.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match config_path_next_to_exe() {
        Some(path) if path.exists() => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str::<Config>(&contents)?
        }
        Some(path) => {
            tracing::warn!("config.toml not found at: {}", path.display());
            tracing::info!("Using default embedded configuration");
            toml::from_str::<Config>(DEFAULT_CONFIG)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str::<Config>(DEFAULT_CONFIG)?
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    if config.supabase.anon_key.is_empty() {
        tracing::warn!("Supabase anon key is empty, remote calls will likely be rejected");
    }

    Ok(config)
}

fn config_path_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("config.toml"))
}

/// Переопределение значений из переменных окружения
fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("SUPABASE_URL").filter(|v| !v.trim().is_empty()) {
        config.supabase.url = url.trim().to_string();
    }
    if let Some(key) = lookup("SUPABASE_ANON_KEY").filter(|v| !v.trim().is_empty()) {
        config.supabase.anon_key = key.trim().to_string();
    }
    if let Some(port) = lookup("BACKEND_PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid BACKEND_PORT '{}': {}", port, e))?;
    }
    Ok(())
}
