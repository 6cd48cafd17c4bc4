use std::{cell::RefCell, result};

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for Comment {
    fn key(&self) -> &str {
        self.id.as_ref()
    }
}

impl Key for Person {
    fn key(&self) -> &str {
        self.id.as_ref()
    }
}

impl Key for Product {
    fn key(&self) -> &str {
        self.id.as_ref()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub comments: RefCell<Vec<Comment>>,
    pub people: RefCell<Vec<Person>>,
    pub products: RefCell<Vec<Product>>,
    pub read_only: bool,
}

impl MockDb {
    fn check_writable(&self) -> RepoResult<()> {
        if self.read_only {
            return Err(RepoError::ReadOnly);
        }
        Ok(())
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn create_or_replace<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    for elem in objects.iter_mut() {
        if elem.key() == e.key() {
            *elem = e;
            return Ok(());
        }
    }
    objects.push(e);
    Ok(())
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        self.check_writable()?;
        create(&mut self.comments.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        get(&self.comments.borrow(), id)
    }
    fn all_comments(&self) -> RepoResult<Vec<Comment>> {
        Ok(self.comments.borrow().clone())
    }
    fn update_comment_text(&self, id: &str, text: String) -> RepoResult<Comment> {
        self.check_writable()?;
        let mut comments = self.comments.borrow_mut();
        let comment = comments
            .iter_mut()
            .find(|c| c.key() == id)
            .ok_or(RepoError::NotFound)?;
        comment.comment = text;
        Ok(comment.clone())
    }
    fn delete_comment(&self, id: &str) -> RepoResult<bool> {
        self.check_writable()?;
        let mut comments = self.comments.borrow_mut();
        let len_before = comments.len();
        comments.retain(|c| c.key() != id);
        Ok(comments.len() < len_before)
    }
}

impl PersonRepository for MockDb {
    fn create_or_update_person(&self, person: Person) -> RepoResult<()> {
        self.check_writable()?;
        create_or_replace(&mut self.people.borrow_mut(), person)
    }
    fn load_person(&self, id: &str) -> RepoResult<Person> {
        get(&self.people.borrow(), id)
    }
    fn all_people(&self) -> RepoResult<Vec<Person>> {
        Ok(self.people.borrow().clone())
    }
}

impl ProductRepository for MockDb {
    fn create_or_update_product(&self, product: Product) -> RepoResult<()> {
        self.check_writable()?;
        create_or_replace(&mut self.products.borrow_mut(), product)
    }
    fn load_product(&self, id: &str) -> RepoResult<Product> {
        get(&self.products.borrow(), id)
    }
    fn find_product_by_name(&self, name: &str) -> RepoResult<Option<Product>> {
        Ok(self
            .products
            .borrow()
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }
    fn all_products(&self) -> RepoResult<Vec<Product>> {
        Ok(self.products.borrow().clone())
    }
    fn update_all_products(&self, patch: &ProductPatch) -> RepoResult<usize> {
        self.check_writable()?;
        let mut products = self.products.borrow_mut();
        for p in products.iter_mut() {
            patch.apply_to(p);
        }
        Ok(products.len())
    }
}
