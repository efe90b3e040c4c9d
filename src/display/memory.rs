// src/display/memory.rs
//! In-memory display that records what was written to it

use super::{Field, StatusDisplay};
use crate::error::Result;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    fields: BTreeMap<Field, String>,
    field_writes: usize,
    alerts: Vec<String>,
    flushes: usize,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field, `None` if it was never written
    pub fn field(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Total number of `set_field` calls
    pub fn field_writes(&self) -> usize {
        self.field_writes
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl StatusDisplay for MemoryDisplay {
    fn set_field(&mut self, field: Field, text: &str) -> Result<()> {
        self.fields.insert(field, text.to_string());
        self.field_writes += 1;
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        self.alerts.push(message.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
