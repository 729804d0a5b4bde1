//! External state sink
//!
//! The host owns a JSON state object. The registry reads the current value, sets its own key
//! and writes the merged object back; every other key is left as it was read.

use parking_lot::Mutex;
use serde_json::Value;

pub trait StateSink: Send + Sync {
    /// Current state; `Value::Null` when the host has none yet
    fn state(&self) -> Value;

    /// Replace the whole state
    fn set_state(&self, state: Value);
}

/// In-process sink holding the state in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Mutex<Value>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink seeded with existing host state
    pub fn with_state(state: Value) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// String value stored under `key`, if any
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.state
            .lock()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

impl StateSink for MemorySink {
    fn state(&self) -> Value {
        self.state.lock().clone()
    }

    fn set_state(&self, state: Value) {
        *self.state.lock() = state;
    }
}
