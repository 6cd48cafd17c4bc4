use crate::{
    entities::*,
    repositories::{self, CommentRepository, ProductRepository},
};

mod create_comment;
mod create_product;
mod delete_comment;
mod error;
mod fire_sale;
mod hooks;
mod save_person;
mod update_comment;
mod update_product;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    create_comment::*, create_product::*, delete_comment::*, error::Error, fire_sale::*,
    hooks::*, save_person::*, update_comment::*, update_product::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use super::hooks::SaveHooks;
    pub use crate::{
        entities::*,
        repositories::{
            self, CommentRepository, PersonRepository, ProductPatch, ProductRepository,
        },
    };
}

pub fn list_comments<R>(repo: &R) -> Result<Vec<Comment>>
where
    R: CommentRepository,
{
    Ok(repo.all_comments()?)
}

pub fn get_comment<R>(repo: &R, id: &str) -> Result<Comment>
where
    R: CommentRepository,
{
    Ok(repo.load_comment(id)?)
}

pub fn find_product_by_name<R>(repo: &R, name: &str) -> Result<Product>
where
    R: ProductRepository,
{
    repo.find_product_by_name(name)?
        .ok_or(Error::Repo(repositories::Error::NotFound))
}
