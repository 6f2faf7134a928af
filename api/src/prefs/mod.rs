pub mod client_prefs;
pub mod user_prefs;
