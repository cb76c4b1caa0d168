//! Output sink for the generated stylesheet.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Where the stylesheet is read from and written to.
pub trait Storage {
    /// Replaces the contents at `path` with `bytes`.
    ///
    /// Implementations must either store all of `bytes` or leave `path`
    /// untouched.
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    /// Returns the stored contents, or `None` if nothing exists at `path`.
    fn read(&self, path: &Path) -> io::Result<Option<Vec<u8>>>;
}

/// Filesystem storage with atomic replacement.
///
/// Writes go to a temporary file in the destination directory, which is
/// then renamed over the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl Storage for FileStorage {
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(bytes)?;
        file.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        file.persist(path).map_err(|err| err.error)?;
        Ok(())
    }

    fn read(&self, path: &Path) -> io::Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}
