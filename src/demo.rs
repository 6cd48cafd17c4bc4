//! Walks through the product and person use cases on the command line.

use std::io::Write;

use anyhow::Result;
use restdemo_core::{
    entities::*,
    usecases::{self, LoggingHooks, NewPerson, NewProduct},
};
use restdemo_db_memory::Connections;

const DEMO_PRODUCT_NAME: &str = "Bike Helmet";
const DEMO_PRODUCT_PRICE: f64 = 29.99;
const DEMO_PRODUCT_SIZE: &str = "M";
const DEMO_CATEGORY: &str = "Outdoors";
const DEMO_UPDATED_PRICE: f64 = 100.0;

fn print_product<W: Write>(out: &mut W, product: &Product) -> Result<()> {
    for line in product.info() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "Categories: {}", product.categories.join(", "))?;
    Ok(())
}

pub fn products<W: Write>(connections: &Connections, out: &mut W) -> Result<()> {
    let new_product = NewProduct {
        name: DEMO_PRODUCT_NAME.to_string(),
        price: Some(DEMO_PRODUCT_PRICE),
        size: Some(DEMO_PRODUCT_SIZE.to_string()),
        ..Default::default()
    };
    let product = usecases::create_product(&connections.exclusive(), &LoggingHooks, new_product)?;
    writeln!(out, "Created product {}", product.id)?;

    let found = usecases::find_product_by_name(&connections.shared(), DEMO_PRODUCT_NAME)?;
    print_product(out, &found)?;

    let toggled =
        usecases::toggle_product_on_sale(&connections.exclusive(), &LoggingHooks, found.id.as_ref())?;
    writeln!(out, "Toggled on sale")?;
    print_product(out, &toggled)?;

    let categorized = usecases::add_product_category(
        &connections.exclusive(),
        &LoggingHooks,
        toggled.id.as_ref(),
        DEMO_CATEGORY.to_string(),
    )?;
    writeln!(out, "Added category {DEMO_CATEGORY}")?;
    print_product(out, &categorized)?;

    let updated = usecases::update_product_price(
        &connections.exclusive(),
        DEMO_PRODUCT_NAME,
        DEMO_UPDATED_PRICE,
    )?;
    writeln!(out, "Updated price")?;
    print_product(out, &updated)?;

    let count = usecases::fire_sale(&connections.exclusive())?;
    writeln!(out, "Fire sale: {count} product(s) are now on sale for free")?;
    Ok(())
}

pub fn person<W: Write>(
    connections: &Connections,
    first: String,
    last: String,
    out: &mut W,
) -> Result<Person> {
    let person = usecases::save_person(
        &connections.exclusive(),
        &LoggingHooks,
        NewPerson { first, last },
    )?;
    writeln!(out, "{}", person.full_name())?;
    Ok(person)
}
