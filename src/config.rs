const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite:chamados.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) if url.trim().is_empty() => {
                anyhow::bail!("DATABASE_URL is set but empty")
            }
            Ok(url) => url,
            Err(std::env::VarError::NotPresent) => DEFAULT_DATABASE_URL.into(),
            Err(e) => return Err(anyhow::anyhow!("DATABASE_URL: {}", e)),
        };

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_url,
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}
