use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use eyre::Result;

/// Write contents to a file on the disc, creating parent directories as
/// needed.
///
/// ```no_run
/// use unflatten_common::utils::io::file::write_file;
///
/// let path = "/tmp/test.txt";
/// let contents = "Hello, World!";
/// let result = write_file(path, contents);
/// ```
pub fn write_file(path_str: &str, contents: &str) -> Result<()> {
    let path = Path::new(path_str);

    // Create the directory if it doesn't exist
    std::fs::create_dir_all(
        path.parent().ok_or_else(|| eyre::eyre!("unable to create directory"))?,
    )?;

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}

/// Read contents from a file on the disc
///
/// ```no_run
/// use unflatten_common::utils::io::file::read_file;
///
/// let path = "/tmp/test.txt";
/// let contents = read_file(path);
/// ```
pub fn read_file(path: &str) -> Result<String> {
    let path = Path::new(path);
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Delete a file or directory from the disc. Returns true if the path no
/// longer exists afterwards.
///
/// ```no_run
/// use unflatten_common::utils::io::file::delete_path;
///
/// let path = "/tmp/test.txt";
/// let result = delete_path(path);
/// ```
pub fn delete_path(path: &str) -> bool {
    let path = Path::new(path);

    if path.is_dir() {
        let _ = std::fs::remove_dir_all(path);
    } else {
        let _ = std::fs::remove_file(path);
    }

    !path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_successful() {
        let path = "/tmp/unflatten_test_write.txt";
        let contents = "Hello, World!";
        let result = write_file(path, contents);
        assert!(result.is_ok());
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let path = "/tmp/unflatten_test_dir/nested/test.txt";
        let contents = "Hello, World!";
        write_file(path, contents).expect("unable to write file");

        let result = read_file(path);
        assert_eq!(result.expect("unable to read file"), contents);

        delete_path("/tmp/unflatten_test_dir");
    }

    #[test]
    fn test_read_file_successful() {
        let path = "/tmp/unflatten_test_read.txt";
        let contents = "Hello, World!";
        write_file(path, contents).expect("unable to write file");

        let result = read_file(path);
        assert!(result.is_ok());
    }

    #[test]
    fn test_read_file_failure() {
        let path = "/nonexistent/unflatten_test.txt";
        let result = read_file(path);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_path_successful() {
        let path = "/tmp/unflatten_test_delete";
        std::fs::create_dir_all(path).expect("unable to create directory");

        let result = delete_path(path);
        assert!(result);
    }

    #[test]
    fn test_delete_path_missing() {
        let path = "/nonexistent/unflatten_test_delete";
        let result = delete_path(path);
        assert!(result);
    }
}
