use std::fmt::Display;

use log::{error, warn};

pub fn print_err(e: &impl Display) {
    error!("{e:#}")
}

pub trait ResultExt<T> {
    fn print_err(self);

    /// Falls back to `T::default()`, warning about what was replaced.
    fn or_default_logged(self, what: &str) -> T
    where
        T: Default;
}

impl<T> ResultExt<T> for anyhow::Result<T> {
    fn print_err(self) {
        let _ = self.inspect_err(print_err);
    }

    fn or_default_logged(self, what: &str) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|e| {
            warn!("Using default {what}: {e:#}");
            T::default()
        })
    }
}
