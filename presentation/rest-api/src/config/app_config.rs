use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server = ServerConfig::from_env();
        let cors = cors_config::init_cors(&server);
        Self { server, cors }
    }
}
