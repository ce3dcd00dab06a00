//! Server configuration, read from the environment with local defaults.

use std::env;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the site in the default browser shortly after startup.
    pub open_browser: bool,
}

impl ServerConfig {
    /// `SITE_HOST`, `SITE_PORT`, and `SITE_NO_OPEN` override the defaults;
    /// malformed values fall back rather than abort.
    pub fn from_env() -> Self {
        let host = env::var("SITE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SITE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let open_browser = env::var("SITE_NO_OPEN").is_err();
        Self {
            host,
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_host_and_port() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            open_browser: false,
        };
        assert_eq!(config.url(), "http://0.0.0.0:9000");
    }
}
