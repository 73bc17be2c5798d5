use super::SlotStore;
use crate::error::Result;

/// Slot held in memory. For testing logic without filesystem I/O.
#[derive(Debug, Default)]
pub struct InMemorySlot {
    value: Option<String>,
    quarantined: Option<String>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds a payload, as if written by a prior run.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            quarantined: None,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn quarantined(&self) -> Option<&str> {
        self.quarantined.as_deref()
    }
}

impl SlotStore for InMemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        self.value = Some(payload.to_string());
        Ok(())
    }

    fn quarantine(&mut self, payload: &str) -> Result<()> {
        self.quarantined = Some(payload.to_string());
        Ok(())
    }
}
