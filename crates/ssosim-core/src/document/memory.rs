use std::collections::HashMap;

use super::Document;
use crate::error::{Result, SsoError};

/// In-memory document with a fixed set of elements.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, String>,
}

impl MemoryDocument {
    /// Document with no elements; every write fails
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing the given element ids, each with empty text
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: ids.into_iter().map(|id| (id.into(), String::new())).collect(),
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}

impl Document for MemoryDocument {
    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| SsoError::ElementNotFound(id.to_string()))?;
        *element = text.to_string();
        Ok(())
    }
}
