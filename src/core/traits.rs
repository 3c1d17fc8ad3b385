//! Core traits shared by the report entities

use std::io::{self, Write};

/// Anything that contributes lines to the text report
///
/// Implementations write their own block and nothing else; ordering between
/// blocks is decided by the caller.
pub trait Render {
    /// Write this entity's report lines to `out`
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}
