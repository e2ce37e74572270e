/// Application-level constants
pub const APP_NAME: &str = "Acuity";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter directive when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}
