use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub client: ClientSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettings {
    pub api_base_url: String,
    /// Dataset slug of the section to show
    pub view: String,
    pub quarter: String,
    pub bar_width: usize,
}

/// `config/server.toml` (optional) layered over defaults, then `DASHBOARD__SERVER__*` env vars.
pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("server.data_dir", "data")?
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// `config/dashboard.toml` (optional) layered over defaults, then `DASHBOARD__CLIENT__*` env vars.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("client.api_base_url", "http://localhost:5000/api")?
        .set_default("client.view", "customer-type")?
        .set_default("client.quarter", "All")?
        .set_default("client.bar_width", 40)?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Join the API base URL and a dataset slug
pub fn dataset_url(base_url: &str, slug: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), slug)
}
