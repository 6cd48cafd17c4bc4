use std::collections::HashMap;

use restdemo_core::entities as e;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Subreddit {
    pub name: String,
    #[serde(default)]
    pub subscribers: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Debug, Deserialize)]
pub struct Post {
    pub title: String,
    pub author: String,
    pub img: Option<String>,
}

impl From<Subreddit> for e::Subreddit {
    fn from(from: Subreddit) -> Self {
        let Subreddit {
            name,
            subscribers,
            description,
            posts,
        } = from;
        Self {
            name,
            subscribers,
            description,
            posts: posts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Post> for e::Post {
    fn from(from: Post) -> Self {
        let Post { title, author, img } = from;
        Self { title, author, img }
    }
}

/// Parses an object that maps subreddit keys to their data.
pub fn subreddits_from_str(json: &str) -> serde_json::Result<HashMap<String, e::Subreddit>> {
    let raw: HashMap<String, Subreddit> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}
