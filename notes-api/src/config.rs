use std::sync::OnceLock;

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_url")]
    pub database_url: String,

    // build
    #[serde(default = "default_local")]
    pub source: String,
    #[serde(default = "default_local")]
    pub git_commit: String,
    #[serde(default = "default_local")]
    pub version: String,
}

fn default_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "notes.db".into()
}

fn default_local() -> String {
    "local".into()
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Self>().unwrap();

        config
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}
