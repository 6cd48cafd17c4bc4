use std::{borrow::Borrow, convert::Infallible, fmt, str::FromStr};

use uuid::Uuid;

/// Opaque identifier of a stored object.
///
/// Generated ids are random UUIDs rendered as 32 lowercase hex digits.
/// Ids that arrive through a URL are taken as they are.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(String);

impl Id {
    /// A fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// `false` for the empty default id.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl FromStr for Id {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_ids_are_simple_uuids() {
        let id = Id::new();
        assert!(id.is_valid());
        assert_eq!(32, id.as_str().len());
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn new_ids_do_not_collide() {
        let ids: HashSet<_> = (0..1_000).map(|_| Id::new()).collect();
        assert_eq!(1_000, ids.len());
    }

    #[test]
    fn default_id_is_invalid() {
        assert!(!Id::default().is_valid());
    }

    #[test]
    fn ids_from_urls_are_kept_verbatim() {
        let id: Id = "does-not-exist".parse().unwrap();
        assert_eq!("does-not-exist", id.to_string());
        assert_eq!(String::from(id), "does-not-exist");
    }
}
