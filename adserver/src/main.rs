#![deny(clippy::all)]
#![deny(rust_2018_idioms)]

use adserver::{
    db::{MemoryAdStore, MongoAdStore},
    Application, EnvConfig,
};
use clap::{crate_version, Arg, Command};
use primitives::{config::configuration, util::logging::new_logger};
use slog::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Command::new("Ad server")
        .version(crate_version!())
        .arg(
            Arg::new("config")
                .help("the config file for the ad server")
                .takes_value(true),
        )
        .arg(
            Arg::new("memory")
                .long("memory")
                .short('m')
                .help("keep the Ads in memory instead of MongoDB, they are lost on shutdown"),
        )
        .get_matches();

    let env_config = EnvConfig::from_env()?;
    let config = configuration(env_config.env, cli.value_of("config"))?;
    let logger = new_logger("adserver");

    info!(&logger, "Starting in {:?} environment", env_config.env);

    if cli.is_present("memory") {
        Application::new(MemoryAdStore::default(), config, logger)
            .run(env_config.socket_addr())
            .await;
    } else {
        let store = MongoAdStore::connect(&config.mongodb, config.query_timeout(), &logger).await?;

        Application::new(store.clone(), config, logger.clone())
            .run(env_config.socket_addr())
            .await;

        store.close().await;
        info!(&logger, "Disconnected from MongoDB");
    }

    Ok(())
}
