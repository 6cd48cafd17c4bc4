use anyhow::{Context, Result};
use std::{
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "restdemo.toml";

const ENV_NAME_SUBREDDITS_FILE: &str = "SUBREDDITS_FILE";

pub struct Config {
    pub webserver: WebServer,
    pub data: Data,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(subreddits) = env::var(ENV_NAME_SUBREDDITS_FILE) {
            cfg.data.subreddits = Some(subreddits.into());
        }
        Ok(cfg)
    }
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub struct Data {
    /// JSON file with the subreddit pages.
    pub subreddits: Option<PathBuf>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { webserver, data } = from;

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();
        let address = address
            .parse()
            .with_context(|| format!("Invalid web server address '{address}'"))?;
        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        let raw::Data { subreddits } = data.unwrap_or_default();
        let data = Data { subreddits };

        Ok(Self { webserver, data })
    }
}
