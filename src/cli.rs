use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use restdemo_db_memory::Connections;
use restdemo_webserver::{Cfg, Subreddits};

use crate::{config::Config, demo};

#[derive(Parser)]
#[command(name = "restdemo")]
#[command(version, about = "RESTful demo web server", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the product demo against an in-memory store
    Products,

    /// Save a person and print the full name
    People {
        #[arg(long)]
        first: String,

        #[arg(long)]
        last: String,
    },
}

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let connections = Connections::init();

    match cli.command {
        Some(Commands::Products) => demo::products(&connections, &mut io::stdout()),
        Some(Commands::People { first, last }) => {
            demo::person(&connections, first, last, &mut io::stdout())?;
            Ok(())
        }
        None => {
            let cfg = Config::try_load_from_file_or_default(cli.config.as_ref())?;
            let subreddits = match cfg.data.subreddits {
                Some(path) => restdemo_webserver::load_subreddits(&path).unwrap_or_else(|err| {
                    warn!("Unable to load subreddits from {}: {err}", path.display());
                    Subreddits::default()
                }),
                None => Subreddits::default(),
            };
            let enable_cors = cli.enable_cors || cfg.webserver.enable_cors;
            let web_cfg = Cfg {
                address: cfg.webserver.address,
                port: cfg.webserver.port,
            };
            restdemo_webserver::run(connections, subreddits, enable_cors, web_cfg).await;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_people_command() {
        let cli = Cli::parse_from(["restdemo", "people", "--first", "Tammy", "--last", "Chow"]);
        assert!(!cli.enable_cors);
        match cli.command {
            Some(Commands::People { first, last }) => {
                assert_eq!(first, "Tammy");
                assert_eq!(last, "Chow");
            }
            _ => panic!("Unexpected command"),
        }
    }

    #[test]
    fn no_command_runs_the_server() {
        let cli = Cli::parse_from(["restdemo", "--enable-cors", "--config", "custom.toml"]);
        assert!(cli.enable_cors);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.command.is_none());
    }
}
