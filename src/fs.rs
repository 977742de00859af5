//! Scoped file access.
//!
//! Both helpers open a file for reading, lend it to a closure and close it
//! when the closure returns, whether it succeeded or not.

use std::fs::File;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Opens the file at `path` and calls `action` with it.
///
/// The error type is chosen by the caller; open failures are converted into
/// it with `From<io::Error>`.
///
/// # Errors
///
/// Returns the open error, or whatever `action` returns.
///
/// # Examples
///
/// ```rust
/// use std::io::{self, Read};
/// use utilkit::fs::with_file;
///
/// let missing = with_file("/no/such/file", |file| -> io::Result<String> {
///     let mut contents = String::new();
///     file.read_to_string(&mut contents)?;
///     Ok(contents)
/// });
/// assert_eq!(missing.unwrap_err().kind(), io::ErrorKind::NotFound);
/// ```
pub fn with_file<T, E, F>(path: impl AsRef<Path>, action: F) -> Result<T, E>
where
    E: From<io::Error>,
    F: FnOnce(&mut File) -> Result<T, E>,
{
    let mut file = File::open(path)?;
    action(&mut file)
}

/// Opens `path` relative to `root` and calls `action` with it.
///
/// `path` must stay beneath `root`: absolute paths and paths containing `..`
/// are rejected before anything is opened. Symbolic links are followed only
/// while their target also lies beneath `root`.
///
/// # Errors
///
/// Returns an [`io::ErrorKind::InvalidInput`] error for a path escaping
/// `root`, the open error, or whatever `action` returns.
pub fn with_file_in<T, E, F>(
    root: impl AsRef<Path>,
    path: impl AsRef<Path>,
    action: F,
) -> Result<T, E>
where
    E: From<io::Error>,
    F: FnOnce(&mut File) -> Result<T, E>,
{
    let resolved = resolve_beneath(root.as_ref(), path.as_ref())?;
    with_file(resolved, action)
}

fn escapes_root(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("path escapes root: {}", path.display()),
    )
}

/// Joins `path` onto `root` and returns the canonical result, which is
/// guaranteed to lie beneath the canonical `root`.
fn resolve_beneath(root: &Path, path: &Path) -> io::Result<PathBuf> {
    let mut joined = root.to_path_buf();
    for component in path.components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(escapes_root(path));
            }
        }
    }

    let canonical_root = root.canonicalize()?;
    let resolved = joined.canonicalize()?;
    if resolved.starts_with(&canonical_root) {
        Ok(resolved)
    } else {
        Err(escapes_root(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    fn read_all(file: &mut File) -> io::Result<String> {
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    fn directory_with(name: &str, contents: &str) -> TempDir {
        let directory = tempfile::tempdir().unwrap();
        let mut file = File::create(directory.path().join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        directory
    }

    #[derive(Debug)]
    enum LoadError {
        Io(io::ErrorKind),
        Empty,
    }

    impl From<io::Error> for LoadError {
        fn from(error: io::Error) -> Self {
            Self::Io(error.kind())
        }
    }

    #[rstest]
    fn test_with_file_reads_contents() {
        let directory = directory_with("greeting.txt", "hello");
        let contents = with_file(directory.path().join("greeting.txt"), read_all).unwrap();
        assert_eq!(contents, "hello");
    }

    #[rstest]
    fn test_with_file_converts_open_error() {
        let directory = tempfile::tempdir().unwrap();
        let result: Result<(), LoadError> =
            with_file(directory.path().join("absent"), |_| Ok(()));
        assert!(matches!(result, Err(LoadError::Io(io::ErrorKind::NotFound))));
    }

    #[rstest]
    fn test_with_file_passes_action_error_through() {
        let directory = directory_with("empty.txt", "");
        let result = with_file(directory.path().join("empty.txt"), |file| {
            let contents = read_all(file)?;
            if contents.is_empty() {
                Err(LoadError::Empty)
            } else {
                Ok(contents)
            }
        });
        assert!(matches!(result, Err(LoadError::Empty)));
    }

    #[rstest]
    #[case("notes.txt")]
    #[case("./notes.txt")]
    fn test_with_file_in_reads_beneath_root(#[case] path: &str) {
        let directory = directory_with("notes.txt", "inside");
        let contents = with_file_in(directory.path(), path, read_all).unwrap();
        assert_eq!(contents, "inside");
    }

    #[rstest]
    #[case("../notes.txt")]
    #[case("nested/../../notes.txt")]
    #[case("/etc/hostname")]
    fn test_with_file_in_rejects_escaping_paths(#[case] path: &str) {
        let directory = directory_with("notes.txt", "inside");
        let error = with_file_in(directory.path(), path, read_all).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn test_with_file_in_missing_file_is_not_found() {
        let directory = tempfile::tempdir().unwrap();
        let error = with_file_in(directory.path(), "absent.txt", read_all).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[rstest]
    fn test_with_file_in_rejects_symlink_leaving_root() {
        let outside = directory_with("secret.txt", "outside-root");
        let root = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(
            outside.path().join("secret.txt"),
            root.path().join("link.txt"),
        )
        .unwrap();

        let error = with_file_in(root.path(), "link.txt", read_all).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
    }

    #[cfg(unix)]
    #[rstest]
    fn test_with_file_in_follows_symlink_inside_root() {
        let root = directory_with("notes.txt", "inside");
        std::fs::create_dir(root.path().join("nested")).unwrap();
        std::os::unix::fs::symlink(
            root.path().join("notes.txt"),
            root.path().join("nested").join("alias.txt"),
        )
        .unwrap();

        let contents = with_file_in(root.path(), "nested/alias.txt", read_all).unwrap();
        assert_eq!(contents, "inside");
    }
}
