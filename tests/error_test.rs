use std::io;

use pkgscaffold::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ValidationError("bad name".to_string());
    assert_eq!(err.to_string(), "Validation error: bad name.");

    let err = Error::RegistryLookupError {
        package: "rollup".to_string(),
        reason: "npm ERR! 404".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to resolve the latest version of 'rollup': npm ERR! 404"
    );

    let err = Error::OutputDirectoryExistsError { output_dir: "/tmp/my-pkg".to_string() };
    assert_eq!(
        err.to_string(),
        "Cannot proceed: output directory '/tmp/my-pkg' already exists."
    );
}
