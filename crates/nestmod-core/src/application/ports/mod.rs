//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `nestmod-adapters` implement
//! these.
//!
//! Only one driven port exists: every piece of state this tool touches lives
//! on the filesystem.

use crate::error::NestmodResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `nestmod_adapters::filesystem::LocalFilesystem` (production)
/// - `nestmod_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Content is UTF-8 text; this tool never writes binary artifacts
/// - No delete operation on purpose: generation refuses to overwrite and
///   never rolls back, so nothing is ever removed
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NestmodResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> NestmodResult<()>;

    /// Read a file's full text.
    fn read_to_string(&self, path: &Path) -> NestmodResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
