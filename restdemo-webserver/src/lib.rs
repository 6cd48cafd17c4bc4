#[macro_use]
extern crate log;

use std::path::Path;

use restdemo_db_memory::Connections;

mod adapters;
mod web;

pub use web::{Cfg, Subreddits};

/// Loads the subreddit dataset from a JSON file.
pub fn load_subreddits<P: AsRef<Path>>(path: P) -> anyhow::Result<Subreddits> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let subreddits = adapters::json::subreddits_from_str(&json)?;
    info!(
        "Loaded {} subreddits from {}",
        subreddits.len(),
        path.display()
    );
    Ok(Subreddits::new(subreddits))
}

pub async fn run(connections: Connections, subreddits: Subreddits, enable_cors: bool, cfg: Cfg) {
    web::run(connections.into(), subreddits, enable_cors, cfg).await;
}
