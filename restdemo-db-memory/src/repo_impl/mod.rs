use restdemo_core::{
    entities::*,
    repositories::{CommentRepository, PersonRepository, ProductPatch, ProductRepository},
    RepoError,
};

use super::*;

mod comment;
mod person;
mod product;

type Result<T> = std::result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for Comment {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Person {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Product {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> Result<T> {
    objects
        .iter()
        .find(|x| x.key() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn create_or_replace<T: Key>(objects: &mut Vec<T>, obj: T) {
    match objects.iter_mut().find(|x| x.key() == obj.key()) {
        Some(existing) => *existing = obj,
        None => objects.push(obj),
    }
}
