#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # restdemo-entities
//!
//! Plain domain entities of the restdemo web application.
//!
//! The entities only contain generic functionality without any storage or
//! transport concerns.

pub mod comment;
pub mod id;
pub mod person;
pub mod product;
pub mod subreddit;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
