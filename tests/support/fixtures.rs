//! Test fixtures and constants.

/// Secret files as a producer writes them, trailing newline included.
pub const STANDARD_FILES: &[(&str, &str)] = &[
    ("DATABASE_URL", "postgres://localhost/mydb\n"),
    ("API_KEY", "sk-test-12345\n"),
    ("JWT_SECRET", "super-secret-jwt-token\n"),
    ("REDIS_URL", "redis://localhost:6379\n"),
    ("S3_BUCKET", "my-app-bucket\n"),
];

/// Marker written by the producer once every secret is in place.
pub const DONE_MARKER: &str = ".done";
