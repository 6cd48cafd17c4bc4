use std::{collections::HashMap, net::IpAddr};

use restdemo_core::entities::Subreddit;
use rocket::{config::Config as RocketCfg, Rocket, Route};

mod error;
mod frontend;
mod memory;
mod method_override;


use self::method_override::MethodOverride;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
}

/// Read-only dataset for the `/r/<subreddit>` pages.
#[derive(Debug, Default)]
pub struct Subreddits(HashMap<String, Subreddit>);

impl Subreddits {
    pub fn new(subreddits: HashMap<String, Subreddit>) -> Self {
        Self(subreddits)
    }

    pub fn get(&self, key: &str) -> Option<&Subreddit> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: memory::Connections,
    subreddits: Subreddits,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;

    if subreddits.is_empty() {
        warn!("No subreddits available");
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(subreddits).attach(MethodOverride);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn with_cors(instance: Rocket<rocket::Build>) -> Result<Rocket<rocket::Build>, rocket_cors::Error> {
    let cors = rocket_cors::CorsOptions::default().to_cors()?;
    Ok(instance.attach(cors))
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(db: memory::Connections, subreddits: Subreddits, enable_cors: bool, cfg: Cfg) {
    let Cfg { address, port } = cfg;
    let rocket_cfg = RocketCfg {
        address,
        port,
        ..RocketCfg::default()
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
    };
    let instance = rocket_instance(options, db, subreddits);
    let server_task = if enable_cors {
        match with_cors(instance) {
            Ok(instance) => instance.launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    info!("Listening on {address}:{port}");
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
