use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id       : Id,
    pub username : String,
    pub comment  : String,
}
