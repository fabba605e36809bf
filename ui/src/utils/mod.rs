pub mod browser;
pub mod ranking;
pub mod time;
pub mod timer;

/// Origin used for share links when the browser can't report one.
pub const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Returns true if the application is running in development mode.
/// Checks if BACKEND_URL contains "localhost".
pub fn is_dev_mode() -> bool {
    option_env!("BACKEND_URL")
        .map(|url| url.contains("localhost"))
        .unwrap_or(false)
}

/// Split a description into its sentences, one bullet each.
///
/// Sentences are separated by `". "`, so the last one keeps its full stop.
pub fn description_points(description: &str) -> Vec<&str> {
    if description.is_empty() {
        return Vec::new();
    }
    description.split(". ").collect()
}
