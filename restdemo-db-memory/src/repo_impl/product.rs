use super::*;

impl<'a> ProductRepository for DbReadWrite<'a> {
    fn create_or_update_product(&self, product: Product) -> Result<()> {
        create_or_replace(&mut self.store.borrow_mut().products, product);
        Ok(())
    }
    fn load_product(&self, id: &str) -> Result<Product> {
        get(&self.store.borrow().products, id)
    }
    fn find_product_by_name(&self, name: &str) -> Result<Option<Product>> {
        Ok(find_product_by_name(&self.store.borrow(), name))
    }
    fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.store.borrow().products.clone())
    }
    fn update_all_products(&self, patch: &ProductPatch) -> Result<usize> {
        Ok(update_all_products(&mut self.store.borrow_mut(), patch))
    }
}

impl<'a> ProductRepository for DbReadOnly<'a> {
    fn create_or_update_product(&self, _product: Product) -> Result<()> {
        Err(RepoError::ReadOnly)
    }
    fn load_product(&self, id: &str) -> Result<Product> {
        get(&self.store.products, id)
    }
    fn find_product_by_name(&self, name: &str) -> Result<Option<Product>> {
        Ok(find_product_by_name(&self.store, name))
    }
    fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.store.products.clone())
    }
    fn update_all_products(&self, _patch: &ProductPatch) -> Result<usize> {
        Err(RepoError::ReadOnly)
    }
}

fn find_product_by_name(store: &Store, name: &str) -> Option<Product> {
    store.products.iter().find(|p| p.name == name).cloned()
}

fn update_all_products(store: &mut Store, patch: &ProductPatch) -> usize {
    log::debug!("Updating all {} products", store.products.len());
    for p in &mut store.products {
        patch.apply_to(p);
    }
    store.products.len()
}

#[cfg(test)]
mod tests {
    use crate::Connections;
    use restdemo_core::{entities::*, repositories::*};
    use restdemo_entities::builders::*;

    #[test]
    fn create_or_update_keeps_position() {
        let connections = Connections::init();
        let db = connections.exclusive();
        db.create_or_update_product(Product::build().id("a").name("A").finish())
            .unwrap();
        db.create_or_update_product(Product::build().id("b").name("B").finish())
            .unwrap();
        db.create_or_update_product(Product::build().id("a").name("A2").finish())
            .unwrap();
        let names: Vec<_> = db
            .all_products()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(vec!["A2", "B"], names);
    }

    #[test]
    fn find_first_product_by_name() {
        let connections = Connections::init();
        let db = connections.exclusive();
        db.create_or_update_product(Product::build().id("a").name("Helmet").finish())
            .unwrap();
        db.create_or_update_product(Product::build().id("b").name("Helmet").finish())
            .unwrap();
        let found = db.find_product_by_name("Helmet").unwrap().unwrap();
        assert_eq!("a", found.id.as_str());
        assert!(db.find_product_by_name("Bike").unwrap().is_none());
    }

    #[test]
    fn patch_all_products() {
        let connections = Connections::init();
        {
            let db = connections.exclusive();
            for id in ["a", "b", "c"] {
                db.create_or_update_product(Product::build().id(id).price(10.0).finish())
                    .unwrap();
            }
            let patch = ProductPatch {
                on_sale: Some(true),
                price: None,
            };
            assert_eq!(3, db.update_all_products(&patch).unwrap());
        }
        let db = connections.shared();
        for p in db.all_products().unwrap() {
            assert!(p.on_sale);
            assert_eq!(10.0, p.price);
        }
    }
}
