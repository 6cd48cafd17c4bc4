use super::{create_product::validate_price, hooks::save_with_hooks, prelude::*};

fn modify_product<R, H, F>(repo: &R, hooks: &H, id: &str, modify: F) -> Result<Product>
where
    R: ProductRepository,
    H: SaveHooks<Product>,
    F: FnOnce(&mut Product),
{
    let mut product = repo.load_product(id)?;
    modify(&mut product);
    let product = save_with_hooks(hooks, product, |p| repo.create_or_update_product(p))?;
    Ok(product)
}

pub fn toggle_product_on_sale<R, H>(repo: &R, hooks: &H, id: &str) -> Result<Product>
where
    R: ProductRepository,
    H: SaveHooks<Product>,
{
    let product = modify_product(repo, hooks, id, Product::toggle_on_sale)?;
    log::info!("Product '{}' on sale: {}", product.name, product.on_sale);
    Ok(product)
}

pub fn add_product_category<R, H>(
    repo: &R,
    hooks: &H,
    id: &str,
    category: String,
) -> Result<Product>
where
    R: ProductRepository,
    H: SaveHooks<Product>,
{
    modify_product(repo, hooks, id, |p| p.add_category(category))
}

/// Looks up the first product with the given name and sets its price.
///
/// The new price is validated before anything is written and the
/// updated product is returned.
pub fn update_product_price<R>(repo: &R, name: &str, price: f64) -> Result<Product>
where
    R: ProductRepository,
{
    let price = validate_price(price)?;
    let mut product = repo
        .find_product_by_name(name)?
        .ok_or(Error::Repo(repositories::Error::NotFound))?;
    product.price = price;
    repo.create_or_update_product(product.clone())?;
    Ok(product)
}
