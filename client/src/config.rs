use std::env;

/// Backend targeted when `PORTFOLIO_API_URL` is not set.
pub const API_URL: &str = "http://localhost:8000";

/// Base URL of the portal backend, fixed at startup.
///
/// Reads `PORTFOLIO_API_URL` (a `.env` file is honored) and falls back to
/// [`API_URL`].
pub fn api_url() -> String {
    dotenv::dotenv().ok();
    env::var("PORTFOLIO_API_URL").unwrap_or_else(|_| API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::{api_url, API_URL};

    #[test]
    #[serial]
    fn test_api_url_defaults_to_localhost() {
        std::env::remove_var("PORTFOLIO_API_URL");

        assert_eq!(api_url(), API_URL);
    }

    #[test]
    #[serial]
    fn test_api_url_env_override() {
        std::env::set_var("PORTFOLIO_API_URL", "http://portal.example:9000");

        assert_eq!(api_url(), "http://portal.example:9000");

        std::env::remove_var("PORTFOLIO_API_URL");
    }
}
