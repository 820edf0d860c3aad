use dotenv::dotenv;
use gigboard_api::config::{Config, Environment};
use gigboard_api::server::Server;
use gigboard_api::utils::logging;
use log::info;

#[actix_rt::main]
async fn main() {
    logging::setup_logger();
    info!("Loading environment");
    dotenv().ok();

    let config = Config::new(Environment::Development);
    info!("Starting {}", config.app_name);
    Server::start(config).await;
}
