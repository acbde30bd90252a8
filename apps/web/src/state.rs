use crate::api::Api;
use crate::config::Config;
use crate::session::SharedTokenStore;

/// Shared front-end state handed to every page.
#[derive(Clone)]
pub struct AppState {
    pub api: Api,
    /// Read by the request client on every call; written only by sign-in/sign-up.
    pub tokens: SharedTokenStore,
    pub config: Config,
}
