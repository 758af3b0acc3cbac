pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod models;
pub mod render;
pub mod services;
pub mod validation;
pub mod web;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;
use validation::MovieForm;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.backend.as_deref() {
        config.backend.base_url = url.to_string();
    }
    config.validate()?;

    init_tracing(&config);

    match cli.command {
        Some(Commands::Serve { port }) => {
            if let Some(port) = port {
                config.server.port = port;
            }
            cli::cmd_serve(config).await
        }

        Some(Commands::List) => cli::cmd_list_movies(&config).await,

        Some(Commands::Add {
            title,
            year,
            genre,
            director,
            description,
            rating,
        }) => {
            let form = MovieForm {
                title,
                year,
                genre,
                director,
                description,
                rating,
            };
            cli::cmd_add_movie(&config, form).await
        }

        Some(Commands::Status) => cli::cmd_status(&config).await,

        Some(Commands::Init) => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists, leaving it untouched.");
            }
            Ok(())
        }

        None => {
            info!("No command given, starting web frontend");
            cli::cmd_serve(config).await
        }
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
