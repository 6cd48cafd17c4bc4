pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use restdemo_entities::{comment::*, id::*, person::*, product::*, subreddit::*};
}

pub use repositories::Error as RepoError;
