use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::fmt;

/// Where the MWDB API lives and how to authenticate against it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPrefs {
    api_url: String,
    api_key: Option<String>,
}

impl ClientPrefs {
    /// Used when neither the environment nor the build provides `MWDB_API_URL`.
    pub const DEFAULT_API_URL: &'static str = "http://127.0.0.1:5000/api/";

    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key,
        }
    }

    /// Creates a ClientPrefs instance from environment variables.
    ///
    /// # Environment Variables
    /// - `MWDB_API_URL`: base url of the REST API, e.g. `https://mwdb.example/api/`.
    /// - `MWDB_API_KEY`: API key of the user acting through this client.
    ///
    /// Each variable is looked up in the runtime environment first, then in
    /// the environment the crate was built in. The latter is the only one
    /// available to the web build.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| {
            env::var(name).ok().or_else(|| match name {
                "MWDB_API_URL" => option_env!("MWDB_API_URL").map(str::to_owned),
                "MWDB_API_KEY" => option_env!("MWDB_API_KEY").map(str::to_owned),
                _ => None,
            })
        })
    }

    /// Builds the prefs from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            api_url: var("MWDB_API_URL").unwrap_or_else(|| Self::DEFAULT_API_URL.to_string()),
            api_key: var("MWDB_API_KEY"),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl Default for ClientPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

// prefs get logged at startup, the key must not end up in the log.
impl fmt::Debug for ClientPrefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientPrefs")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
