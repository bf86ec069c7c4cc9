use std::process::ExitCode;

use stylegen::{logger, network, server::HttpServer, Config};

#[actix_web::main]
async fn main() -> ExitCode {
    let env_loaded = dotenv::dotenv().is_ok();

    if let Err(e) = logger::init_with_config(logger::LoggerConfig::from_env()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    if env_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    network::sanitize_proxy_env();

    let config = Config::from_env();
    logger::log_startup_info(stylegen::NAME, stylegen::VERSION, &config.bind_address());
    logger::log_config_info(&config);

    let server = match HttpServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            log::error!("❌ Failed to initialize server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match server.start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
