use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::ranges::PresetRange;

/// Name the quick ranges are registered under at startup.
pub const QUICK_RANGES_KEY: &str = "quickRanges";

/// Named lookup of preset tables. Built once by whoever composes the
/// application and handed down by reference; consumers never mutate it.
#[derive(Default)]
pub struct Registry {
    tables: HashMap<&'static str, &'static [PresetRange]>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a preset table under a well-known name. Each name may be
    /// registered exactly once.
    pub fn register(
        &mut self,
        name: &'static str,
        presets: &'static [PresetRange],
    ) -> Result<()> {
        if self.tables.contains_key(name) {
            bail!("error: A preset table is already registered under \"{name}\"");
        }
        self.tables.insert(name, presets);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&'static [PresetRange]> {
        match self.tables.get(name) {
            Some(&presets) => Ok(presets),
            None => bail!("error: No preset table is registered under \"{name}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::data;

    #[test]
    fn register_then_get() {
        let mut registry = Registry::new();
        registry
            .register(QUICK_RANGES_KEY, data::quick_ranges())
            .unwrap();
        let presets = registry.get(QUICK_RANGES_KEY).unwrap();
        assert_eq!(presets, data::quick_ranges());
    }

    #[test]
    fn duplicate_registration_is_an_error() {
        let mut registry = Registry::new();
        registry
            .register(QUICK_RANGES_KEY, data::quick_ranges())
            .unwrap();
        assert!(registry
            .register(QUICK_RANGES_KEY, data::quick_ranges())
            .is_err());
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = Registry::new();
        assert!(registry.get(QUICK_RANGES_KEY).is_err());
    }
}
