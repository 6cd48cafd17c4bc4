use super::prelude::*;

/// Puts every product on sale for free.
pub fn fire_sale<R>(repo: &R) -> Result<usize>
where
    R: ProductRepository,
{
    let patch = ProductPatch {
        on_sale: Some(true),
        price: Some(0.0),
    };
    let count = repo.update_all_products(&patch)?;
    log::info!("Fire sale: {count} products updated");
    Ok(count)
}
