//! File system utilities for file checks, file names and directory listings.

use std::{fs, io, path::Path};

/// Checks if a file exists at the given path.
///
/// # Arguments
///
/// * `path` - Path to check
///
/// # Returns
///
/// Returns `true` if the path exists and is a file, `false` otherwise.
///
/// # Examples
///
/// ```no_run
/// use cutil::fs::file_exist;
///
/// if file_exist("/path/to/file.txt") {
///     println!("File exists!");
/// }
/// ```
pub fn file_exist(path: impl AsRef<Path>) -> bool {
    match fs::metadata(path) {
        Ok(md) => md.is_file(),
        _ => false,
    }
}

/// Extracts the file name from a path.
///
/// # Examples
///
/// ```
/// use cutil::fs::file_name;
///
/// assert_eq!(file_name("/path/to/file.txt"), "file.txt");
/// assert_eq!(file_name("/path/to/directory/"), "directory");
/// ```
pub fn file_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Checks whether `name` ends with one of `extensions`, ignoring case.
///
/// Extensions are given without the leading dot.
///
/// # Examples
///
/// ```
/// use cutil::fs::has_extension;
///
/// assert!(has_extension("photo.JPG", &["png", "jpg"]));
/// assert!(!has_extension("notes.txt", &["png", "jpg"]));
/// assert!(!has_extension("png", &["png"]));
/// ```
pub fn has_extension(name: impl AsRef<Path>, extensions: &[&str]) -> bool {
    name.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Lists the regular files directly inside `dir` whose extension is one of
/// `extensions` (case-insensitive), sorted by name.
///
/// # Arguments
///
/// * `dir` - Directory to list
/// * `extensions` - Accepted extensions, without the leading dot
///
/// # Returns
///
/// Returns the matching file names, or the IO error from reading the
/// directory (for example `NotFound` when it does not exist).
///
/// # Examples
///
/// ```no_run
/// use cutil::fs::list_files_with_extensions;
///
/// for name in list_files_with_extensions("images", &["png", "jpg"]).unwrap() {
///     println!("{name}");
/// }
/// ```
pub fn list_files_with_extensions(
    dir: impl AsRef<Path>,
    extensions: &[&str],
) -> io::Result<Vec<String>> {
    let mut names = vec![];

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if has_extension(&name, extensions) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_exist() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        assert!(!file_exist(&file_path));

        fs::write(&file_path, "test").unwrap();
        assert!(file_exist(&file_path));

        // Directories are not files
        assert!(!file_exist(temp_dir.path()));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/path/to/file.txt"), "file.txt");
        assert_eq!(file_name("file.txt"), "file.txt");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn test_has_extension() {
        let exts = ["png", "jpg", "jpeg"];
        assert!(has_extension("a.png", &exts));
        assert!(has_extension("a.JpEg", &exts));
        assert!(has_extension("dir/a.jpg", &exts));
        assert!(!has_extension("a.png.txt", &exts));
        assert!(!has_extension(".png", &exts));
        assert!(!has_extension("", &exts));
    }

    #[test]
    fn test_list_files_with_extensions() -> io::Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("b.png"), "")?;
        fs::write(temp_dir.path().join("a.JPG"), "")?;
        fs::write(temp_dir.path().join("notes.txt"), "")?;
        fs::create_dir(temp_dir.path().join("folder.png"))?;

        let names = list_files_with_extensions(temp_dir.path(), &["png", "jpg"])?;
        assert_eq!(names, vec!["a.JPG".to_string(), "b.png".to_string()]);
        Ok(())
    }

    #[test]
    fn test_list_missing_dir() {
        let temp_dir = tempdir().unwrap();
        let err = list_files_with_extensions(temp_dir.path().join("missing"), &["png"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
