/// Runtime settings for the client and CLI.
///
/// Distance caps are absent: they are fixed per [`crate::Mode`]. So are the
/// autocomplete trigger length and result cap.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
