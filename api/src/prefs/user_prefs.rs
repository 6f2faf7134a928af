use super::client_prefs::ClientPrefs;
use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs. Intended for saving to a file, editing in a settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    client: ClientPrefs,
}

impl UserPrefs {
    pub fn new(client: ClientPrefs) -> Self {
        Self { client }
    }

    pub fn client_prefs(&self) -> &ClientPrefs {
        &self.client
    }
}
