//! UI surface the simulator reports to.
//!
//! A `Document` is anything holding text elements addressable by id. The
//! simulator only ever writes to it.

pub mod memory;

pub use memory::MemoryDocument;

use crate::error::Result;

pub trait Document {
    /// Replace the text content of the element identified by `id`
    fn set_text(&mut self, id: &str, text: &str) -> Result<()>;
}

impl<T: Document + ?Sized> Document for Box<T> {
    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        (**self).set_text(id, text)
    }
}

impl<T: Document + ?Sized> Document for &mut T {
    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        (**self).set_text(id, text)
    }
}
