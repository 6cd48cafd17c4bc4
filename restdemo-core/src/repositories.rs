// Low-level storage access traits.
// Each repository is responsible for a single entity.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("Write access through a read-only connection")]
    ReadOnly,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepository {
    fn create_comment(&self, comment: Comment) -> Result<()>;

    fn load_comment(&self, id: &str) -> Result<Comment>;

    // In insertion order
    fn all_comments(&self) -> Result<Vec<Comment>>;

    fn update_comment_text(&self, id: &str, text: String) -> Result<Comment>;

    /// Returns `false` if no comment with this id exists.
    fn delete_comment(&self, id: &str) -> Result<bool>;
}

pub trait PersonRepository {
    fn create_or_update_person(&self, person: Person) -> Result<()>;
    fn load_person(&self, id: &str) -> Result<Person>;
    fn all_people(&self) -> Result<Vec<Person>>;
}

/// Fields to overwrite on every matching product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub on_sale: Option<bool>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(on_sale) = self.on_sale {
            product.on_sale = on_sale;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}

pub trait ProductRepository {
    fn create_or_update_product(&self, product: Product) -> Result<()>;
    fn load_product(&self, id: &str) -> Result<Product>;
    fn find_product_by_name(&self, name: &str) -> Result<Option<Product>>;
    fn all_products(&self) -> Result<Vec<Product>>;

    /// Applies the patch to all products and returns how many were touched.
    fn update_all_products(&self, patch: &ProductPatch) -> Result<usize>;
}
