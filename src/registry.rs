//! Process-wide database handle: the Singleton pattern.
//!
//! [`Database::instance`] lazily constructs the one shared handle on first
//! call and hands every caller the same `&'static` reference. `OnceLock`
//! carries the whole contract: racing first-callers run the initializer at
//! most once, nobody can observe a half-built value, and after
//! initialization the access path is a single atomic load with no locking.
//!
//! `connect`/`disconnect`/`query` are meant to be called from one logical
//! caller at a time; the internal mutex keeps concurrent misuse memory-safe
//! but interleaving order is then up to the scheduler.

use std::sync::{Mutex, OnceLock, PoisonError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("not connected: call connect() before query()")]
    NotConnected,
}

/// The singleton connection handle. Not constructible outside this module;
/// go through [`Database::instance`].
#[derive(Debug)]
pub struct Database {
    host: &'static str,
    port: u16,
    connected: Mutex<bool>,
}

impl Database {
    fn new(host: &'static str, port: u16) -> Self {
        Self {
            host,
            port,
            connected: Mutex::new(false),
        }
    }

    /// Returns the process-wide instance, constructing it on first access.
    pub fn instance() -> &'static Database {
        static INSTANCE: OnceLock<Database> = OnceLock::new();
        INSTANCE.get_or_init(|| Database::new("localhost", 5432))
    }

    fn state(&self) -> std::sync::MutexGuard<'_, bool> {
        // A poisoned lock only means a holder panicked; the bool inside is
        // still coherent, so recover it.
        self.connected.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens the connection. Returns `true` if the state changed, `false`
    /// if it was already open. Never an error.
    pub fn connect(&self) -> bool {
        let mut connected = self.state();
        if *connected {
            false
        } else {
            *connected = true;
            true
        }
    }

    /// Closes the connection. Idempotent, mirror image of [`connect`].
    ///
    /// [`connect`]: Database::connect
    pub fn disconnect(&self) -> bool {
        let mut connected = self.state();
        if *connected {
            *connected = false;
            true
        } else {
            false
        }
    }

    pub fn is_connected(&self) -> bool {
        *self.state()
    }

    /// Stub query: echoes the statement back instead of executing it.
    /// Valid only while connected.
    pub fn query(&self, sql: &str) -> Result<String, RegistryError> {
        if !self.is_connected() {
            return Err(RegistryError::NotConnected);
        }
        Ok(format!("[{}:{}] executing: {}", self.host, self.port, sql))
    }
}
