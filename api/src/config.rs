use dotenv::dotenv;
use std::env;

#[derive(Clone, PartialEq, Debug)]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Clone, Copy, Debug)]
pub struct ConnectionPoolConfig {
    pub min: u32,
    pub max: u32,
}

#[derive(Clone)]
pub struct Config {
    pub allowed_origins: String,
    pub app_name: String,
    pub api_url: String,
    pub api_port: String,
    pub database_url: String,
    pub connection_pool: ConnectionPoolConfig,
    pub environment: Environment,
}

const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
const APP_NAME: &str = "APP_NAME";
const API_URL: &str = "API_URL";
const API_PORT: &str = "API_PORT";
const DATABASE_URL: &str = "DATABASE_URL";
const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";
const DATABASE_POOL_MIN: &str = "DATABASE_POOL_MIN";
const DATABASE_POOL_MAX: &str = "DATABASE_POOL_MAX";

impl Config {
    pub fn new(environment: Environment) -> Self {
        dotenv().ok();

        let app_name = env::var(&APP_NAME).unwrap_or_else(|_| "Gigboard".to_string());

        let database_url = match environment {
            Environment::Test => env::var(&TEST_DATABASE_URL)
                .unwrap_or_else(|_| panic!("{} must be defined.", TEST_DATABASE_URL)),
            _ => env::var(&DATABASE_URL)
                .unwrap_or_else(|_| panic!("{} must be defined.", DATABASE_URL)),
        };

        let connection_pool = ConnectionPoolConfig {
            min: env::var(&DATABASE_POOL_MIN)
                .map(|s| {
                    s.parse()
                        .expect("Not a valid integer for database pool min")
                })
                .unwrap_or(1),
            max: env::var(&DATABASE_POOL_MAX)
                .map(|s| {
                    s.parse()
                        .expect("Not a valid integer for database pool max")
                })
                .unwrap_or(20),
        };

        let allowed_origins = env::var(&ALLOWED_ORIGINS).unwrap_or_else(|_| "*".to_string());
        let api_url = env::var(&API_URL).unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = env::var(&API_PORT).unwrap_or_else(|_| "8088".to_string());

        Config {
            allowed_origins,
            app_name,
            api_url,
            api_port,
            database_url,
            connection_pool,
            environment,
        }
    }
}
