use std::{cell::RefCell, sync::Arc};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use restdemo_core::entities::*;

mod repo_impl;

/// The collections owned by the process.
///
/// Every collection keeps insertion order.
#[derive(Debug, Default)]
pub struct Store {
    comments: Vec<Comment>,
    people: Vec<Person>,
    products: Vec<Product>,
}

type SharedStore = Arc<RwLock<Store>>;

pub struct DbReadOnly<'a> {
    store: RwLockReadGuard<'a, Store>,
}

impl<'a> DbReadOnly<'a> {
    fn new(store: &'a SharedStore) -> Self {
        Self {
            store: store.read(),
        }
    }
}

pub struct DbReadWrite<'a> {
    store: RefCell<RwLockWriteGuard<'a, Store>>,
}

impl<'a> DbReadWrite<'a> {
    fn new(store: &'a SharedStore) -> Self {
        Self {
            store: RefCell::new(store.write()),
        }
    }
}

#[derive(Clone, Default)]
pub struct Connections {
    // Only a single handle with write access will be
    // handed out at a time. Multiple read handles can
    // be used concurrently. Each write handle covers
    // a whole read-modify-write sequence.
    store: SharedStore,
}

impl Connections {
    pub fn init() -> Self {
        log::info!("Initializing empty in-memory store");
        Self::default()
    }

    /// Blocks while a write handle is alive.
    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly::new(&self.store)
    }

    /// Blocks while any other handle is alive.
    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite::new(&self.store)
    }
}
