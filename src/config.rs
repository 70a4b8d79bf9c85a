use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        host: get_env_or_default("HOST", "0.0.0.0"),
        port: get_env_or_default("PORT", "8000")
            .parse()
            .unwrap_or_else(|_| panic!("PORT must be a valid port number")),
    }
});

pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
