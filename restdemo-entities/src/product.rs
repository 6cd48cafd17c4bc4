use strum::{Display, EnumString};
use thiserror::Error;

use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id         : Id,
    pub name       : String,
    pub price      : f64,
    pub on_sale    : bool,
    pub categories : Vec<String>,
    pub qty        : Quantity,
    pub size       : Option<Size>,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    pub online   : u32,
    pub in_store : u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Size {
    S,
    M,
    L,
}

#[derive(Debug, Error)]
#[error("Invalid product size: {0}")]
pub struct SizeParseError(pub String);

impl Size {
    pub fn parse(s: &str) -> Result<Self, SizeParseError> {
        s.trim().parse().map_err(|_| SizeParseError(s.to_owned()))
    }
}

impl Product {
    pub fn toggle_on_sale(&mut self) {
        self.on_sale = !self.on_sale;
    }

    pub fn add_category(&mut self, category: impl Into<String>) {
        self.categories.push(category.into());
    }

    /// Human readable summary, one line per item.
    pub fn info(&self) -> Vec<String> {
        vec![
            "SOME INFORMATION ABOUT THE PRODUCT".to_string(),
            self.name.clone(),
            self.price.to_string(),
            format!("Is on sale: {}", self.on_sale),
        ]
    }
}
