use super::{hooks::save_with_hooks, prelude::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub name       : String,
    pub price      : Option<f64>,
    pub on_sale    : Option<bool>,
    pub categories : Vec<String>,
    pub qty        : Option<Quantity>,
    pub size       : Option<String>,
}

pub(crate) fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::Price);
    }
    Ok(price)
}

pub fn create_product<R, H>(repo: &R, hooks: &H, p: NewProduct) -> Result<Product>
where
    R: ProductRepository,
    H: SaveHooks<Product>,
{
    let NewProduct {
        name,
        price,
        on_sale,
        categories,
        qty,
        size,
    } = p;
    if name.trim().is_empty() {
        return Err(Error::ProductName);
    }
    let price = validate_price(price.ok_or(Error::Price)?)?;
    let size = size.as_deref().map(Size::parse).transpose()?;
    let product = Product {
        id: Id::new(),
        name,
        price,
        on_sale: on_sale.unwrap_or(false),
        categories,
        qty: qty.unwrap_or_default(),
        size,
    };
    log::debug!("Creating product '{}'", product.name);
    let product = save_with_hooks(hooks, product, |p| repo.create_or_update_product(p))?;
    Ok(product)
}
