//! Test assertion helpers.

use secretmount::{Error, LoadError, Secrets};

/// Assert that a collection holds exactly the given pairs.
pub fn assert_secrets(secrets: &Secrets, expected: &[(&str, &str)]) {
    let mut expected = expected.to_vec();
    expected.sort();
    let actual: Vec<_> = secrets.iter().collect();
    assert_eq!(actual, expected, "unexpected secrets: {:?}", actual);
}

/// Assert that a load failed because the directory could not be listed.
pub fn assert_directory_access(err: &LoadError) {
    assert!(
        matches!(err.error(), Error::DirectoryAccess { .. }),
        "expected DirectoryAccess, got: {:?}",
        err.error()
    );
    assert!(err.partial().is_empty(), "partial secrets should be empty");
}

/// Assert that a load failed reading a file, returning the failing file name.
pub fn assert_file_read(err: &LoadError) -> String {
    match err.error() {
        Error::FileRead { path, .. } => path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        other => panic!("expected FileRead, got: {:?}", other),
    }
}
