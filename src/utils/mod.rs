/// Configuration constants and the settings loader for the application
pub mod config {
    use std::path::Path;
    use std::time::Duration;

    use thiserror::Error;

    use super::file_utils;
    use crate::search::ResponseOrdering;

    /// Base URL of the movie metadata API
    pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

    /// Base URL poster images are served from
    pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

    /// Poster width requested for cards
    pub const POSTER_SIZE: &str = "w500";

    pub const DEFAULT_LANGUAGE: &str = "en-US";

    /// Quiet window before a typed query is navigated to
    pub const SEARCH_DEBOUNCE_MS: u64 = 900;

    /// Directory (under home) holding the token file
    pub const STORAGE_DIR: &str = ".marquee";

    /// File holding a bearer token when no environment credentials are set
    pub const TOKEN_FILE: &str = "tmdb_token";

    pub const ACCESS_TOKEN_ENV: &str = "TMDB_ACCESS_TOKEN";
    pub const API_KEY_ENV: &str = "TMDB_API_KEY";
    pub const API_BASE_ENV: &str = "MARQUEE_API_BASE";
    pub const LANGUAGE_ENV: &str = "MARQUEE_LANGUAGE";
    pub const DEBOUNCE_ENV: &str = "MARQUEE_DEBOUNCE_MS";
    pub const ORDERING_ENV: &str = "MARQUEE_RESPONSE_ORDER";
    pub const TIMEOUT_ENV: &str = "MARQUEE_TIMEOUT_SECS";

    /// How requests authenticate against the API
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Credentials {
        /// v4 read access token, sent as `Authorization: Bearer`
        Bearer(String),
        /// v3 key, sent as the `api_key` query parameter
        ApiKey(String),
    }

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error(
            "No API credentials: set {} or {}, or write a token to ~/{}/{}",
            ACCESS_TOKEN_ENV,
            API_KEY_ENV,
            STORAGE_DIR,
            TOKEN_FILE
        )]
        MissingCredentials,

        #[error("Invalid value for {name}: '{value}'")]
        InvalidValue { name: &'static str, value: String },

        #[error("Could not read token file {path}: {source}")]
        TokenFile {
            path: String,
            #[source]
            source: std::io::Error,
        },
    }

    pub type ConfigResult<T> = Result<T, ConfigError>;

    /// Runtime settings, resolved once at startup
    #[derive(Debug, Clone, PartialEq)]
    pub struct Settings {
        pub base_url: String,
        pub credentials: Credentials,
        pub language: String,
        pub debounce: Duration,
        pub ordering: ResponseOrdering,
        pub request_timeout: Option<Duration>,
    }

    impl Settings {
        /// Reads settings from the process environment and the token file
        pub fn load() -> ConfigResult<Settings> {
            let token_file = file_utils::token_file_path();
            Self::from_lookup(|name| std::env::var(name).ok(), token_file.as_deref())
        }

        /// Resolves settings from `lookup`. Empty values count as unset.
        pub fn from_lookup<F>(lookup: F, token_file: Option<&Path>) -> ConfigResult<Settings>
        where
            F: Fn(&str) -> Option<String>,
        {
            let get = |name: &str| {
                lookup(name)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            };

            let credentials = if let Some(token) = get(ACCESS_TOKEN_ENV) {
                Credentials::Bearer(token)
            } else if let Some(key) = get(API_KEY_ENV) {
                Credentials::ApiKey(key)
            } else {
                match token_file {
                    Some(path) => file_utils::read_token(path)
                        .map_err(|source| ConfigError::TokenFile {
                            path: path.display().to_string(),
                            source,
                        })?
                        .map(Credentials::Bearer)
                        .ok_or(ConfigError::MissingCredentials)?,
                    None => return Err(ConfigError::MissingCredentials),
                }
            };

            let debounce = match get(DEBOUNCE_ENV) {
                Some(value) => Duration::from_millis(parse_number(DEBOUNCE_ENV, &value)?),
                None => Duration::from_millis(SEARCH_DEBOUNCE_MS),
            };

            let ordering = match get(ORDERING_ENV).as_deref() {
                None | Some("latest") => ResponseOrdering::LatestIssued,
                Some("last-resolved") => ResponseOrdering::LastResolved,
                Some(other) => {
                    return Err(ConfigError::InvalidValue {
                        name: ORDERING_ENV,
                        value: other.to_string(),
                    })
                }
            };

            let request_timeout = get(TIMEOUT_ENV)
                .map(|value| parse_number(TIMEOUT_ENV, &value).map(Duration::from_secs))
                .transpose()?;

            Ok(Settings {
                base_url: get(API_BASE_ENV).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                credentials,
                language: get(LANGUAGE_ENV).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
                debounce,
                ordering,
                request_timeout,
            })
        }
    }

    fn parse_number(name: &'static str, value: &str) -> ConfigResult<u64> {
        value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        })
    }
}

/// Utility functions for file operations
pub mod file_utils {
    use super::config::*;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    /// Location of the token file, if a home directory exists
    pub fn token_file_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(STORAGE_DIR).join(TOKEN_FILE))
    }

    /// Reads a token from `path`. A missing or blank file yields `None`.
    pub fn read_token(path: &Path) -> Result<Option<String>, io::Error> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Helpers for presenting movie metadata on cards
pub mod format {
    use super::config::{IMAGE_BASE, POSTER_SIZE};

    /// Year part of an ISO date such as "1999-03-30"
    pub fn release_year(date: &str) -> Option<&str> {
        let year = date.get(..4)?;
        year.chars().all(|c| c.is_ascii_digit()).then_some(year)
    }

    /// Vote average with one decimal
    pub fn rating(vote_average: f64) -> String {
        format!("{:.1}", vote_average)
    }

    pub fn poster_url(poster_path: &str) -> String {
        format!("{}/{}{}", IMAGE_BASE, POSTER_SIZE, poster_path)
    }
}
