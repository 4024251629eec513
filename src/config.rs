use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// JSON array file holding the listings
    pub data_file: PathBuf,
    /// JSON array file holding the user accounts
    pub users_file: PathBuf,
    /// HMAC key for signing session cookies
    pub session_key: String,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let data_file = env::var("DATA_FILE")
            .unwrap_or_else(|_| "data.json".to_string())
            .into();
        let users_file = env::var("USERS_FILE")
            .unwrap_or_else(|_| "users.json".to_string())
            .into();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let session_key = env::var("SESSION_KEY")
            .map_err(|_| "SESSION_KEY must be set to sign session cookies")?;

        Ok(Config {
            server_host,
            server_port,
            data_file,
            users_file,
            session_key,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
