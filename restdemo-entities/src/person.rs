use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id    : Id,
    pub first : String,
    pub last  : String,
}

impl Person {
    /// Derived from the stored names on every call, never stored itself.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}
