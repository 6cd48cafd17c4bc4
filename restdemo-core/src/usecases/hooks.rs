use log::info;

/// Callbacks around a single persistence write.
///
/// `before_save` runs immediately before the repository is called and
/// `after_save` immediately after the write succeeded. A failed write
/// never triggers `after_save`.
pub trait SaveHooks<T> {
    fn before_save(&self, _: &T) {}
    fn after_save(&self, _: &T) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl<T> SaveHooks<T> for NoHooks {}

/// Observes every write in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHooks;

impl<T: std::fmt::Debug> SaveHooks<T> for LoggingHooks {
    fn before_save(&self, obj: &T) {
        info!("About to save {obj:?}");
    }
    fn after_save(&self, obj: &T) {
        info!("Just saved {obj:?}");
    }
}

pub(crate) fn save_with_hooks<T, H, F>(
    hooks: &H,
    obj: T,
    save: F,
) -> Result<T, crate::repositories::Error>
where
    T: Clone,
    H: SaveHooks<T>,
    F: FnOnce(T) -> Result<(), crate::repositories::Error>,
{
    hooks.before_save(&obj);
    save(obj.clone())?;
    hooks.after_save(&obj);
    Ok(obj)
}
