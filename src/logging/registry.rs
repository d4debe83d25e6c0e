// SPDX-License-Identifier: Apache-2.0 OR MIT
// Registry of named loggers for centralized level management

use super::{Logger, LoggingError, Result, Severity};
use crate::config::{LoggerConfig, LoggingConfig};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Registry mapping logger titles to shared loggers
///
/// Titles are unique. Level changes made through the registry go through each
/// logger's own lock, so they never race with that logger's setters. Logging
/// itself never touches the registry.
#[derive(Debug, Default)]
pub struct Registry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry for application wiring code
    ///
    /// Library code should take a `&Registry` instead of reaching for this.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a logger under its title
    ///
    /// Fails with [`LoggingError::DuplicateName`] if the title is taken; the
    /// registry is left unchanged in that case.
    pub fn register(&self, logger: impl Into<Arc<Logger>>) -> Result<Arc<Logger>> {
        let logger = logger.into();
        match self.lock().entry(logger.title().to_string()) {
            Entry::Occupied(entry) => Err(LoggingError::DuplicateName {
                title: entry.key().clone(),
            }),
            Entry::Vacant(entry) => Ok(Arc::clone(entry.insert(logger))),
        }
    }

    /// Build a logger from `cfg` and register it
    pub fn register_from_config(&self, cfg: &LoggerConfig) -> Result<Arc<Logger>> {
        self.register(Logger::from_config(cfg)?)
    }

    /// Register every logger in `config`, stopping at the first failure
    pub fn register_all(&self, config: &LoggingConfig) -> Result<Vec<Arc<Logger>>> {
        config
            .loggers
            .iter()
            .map(|cfg| self.register_from_config(cfg))
            .collect()
    }

    pub fn lookup(&self, title: &str) -> Result<Arc<Logger>> {
        self.lock()
            .get(title)
            .cloned()
            .ok_or_else(|| not_found(title))
    }

    /// Set the level of one logger from a case-insensitive level name
    ///
    /// The name is validated before the title is looked up.
    pub fn set_level_for(&self, title: &str, level: &str) -> Result<()> {
        let level: Severity = level.parse()?;
        let loggers = self.lock();
        let logger = loggers.get(title).ok_or_else(|| not_found(title))?;
        logger.set_level(level);
        Ok(())
    }

    pub fn set_level_for_all(&self, level: Severity) {
        for logger in self.lock().values() {
            logger.set_level(level);
        }
    }

    /// [`set_level_for_all`](Self::set_level_for_all) from a level name
    pub fn set_level_for_all_str(&self, level: &str) -> Result<()> {
        self.set_level_for_all(level.parse()?);
        Ok(())
    }

    /// Restore one logger's construction-time level
    pub fn reset_level(&self, title: &str) -> Result<()> {
        self.lookup(title)?.reset_level();
        Ok(())
    }

    /// Restore every logger's construction-time level
    pub fn reset_all(&self) {
        for logger in self.lock().values() {
            logger.reset_level();
        }
    }

    /// Drop every registration
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Registered titles in sorted order
    pub fn titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = self.lock().keys().cloned().collect();
        titles.sort();
        titles
    }
}

fn not_found(title: &str) -> LoggingError {
    LoggingError::NotFound {
        title: title.to_string(),
    }
}
