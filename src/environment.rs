use anyhow::{anyhow, Result};
use std::env;

use crate::newsdata::DEFAULT_BASE_URL;

pub const API_KEY_VAR: &str = "NEWSDATA_API_KEY";
pub const BASE_URL_VAR: &str = "NEWSDATA_BASE_URL";
pub const EXTRA_STOP_WORDS_VAR: &str = "NEWSBRIEF_STOP_WORDS";

/// Retrieves an environment variable and splits it into a vector of strings based on a delimiter.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `delimiter`: The character to split the environment variable's value by.
///
/// # Returns
/// - `Vec<String>` with blank entries removed; empty when the variable is unset.
pub fn get_env_var_as_vec(var: &str, delimiter: char) -> Vec<String> {
    env::var(var)
        .unwrap_or_default()
        .split(delimiter)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The NewsData API key, required only when fetching.
pub fn api_key() -> Result<String> {
    match env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(anyhow!(
            "Missing API key. Set it with:\n  export {}='YOUR_KEY'",
            API_KEY_VAR
        )),
    }
}

/// API base URL, overridable for proxies and test servers.
pub fn base_url() -> Result<String> {
    let url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    if !is_valid_url(&url) {
        return Err(anyhow!("{} is not an http(s) URL: {}", BASE_URL_VAR, url));
    }
    Ok(url)
}

/// Helper function to validate a URL
pub fn is_valid_url(url: &str) -> bool {
    if let Ok(parsed) = url::Url::parse(url) {
        parsed.scheme() == "http" || parsed.scheme() == "https"
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_as_vec() {
        env::set_var("NEWSBRIEF_TEST_LIST", " says , report,, ");
        assert_eq!(
            get_env_var_as_vec("NEWSBRIEF_TEST_LIST", ','),
            vec!["says".to_string(), "report".to_string()]
        );
        assert!(get_env_var_as_vec("NEWSBRIEF_TEST_UNSET_LIST", ',').is_empty());
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://newsdata.io/api/1"));
        assert!(is_valid_url("http://localhost:8080"));
        assert!(!is_valid_url("ftp://newsdata.io"));
        assert!(!is_valid_url("newsdata.io"));
    }
}
