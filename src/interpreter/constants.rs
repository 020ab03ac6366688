// Constants for the filescript interpreter

/// Value of `CountFiles`/`CheckSpace` when the command fails
pub const QUERY_FALLBACK: f64 = 0.0;

/// Environment variable holding the `tracing` filter for the binary
pub const LOG_ENV_VAR: &str = "RUST_LOG";
