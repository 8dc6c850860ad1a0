use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::service::auth::DiscordAuthService;

impl<'a> DiscordAuthService<'a> {
    /// Builds the Discord authorization URL for the login redirect.
    ///
    /// The returned CSRF token must be stored in the session so the callback
    /// can verify the `state` parameter round-tripped unchanged.
    ///
    /// The `guilds` scope is requested alongside `identify` so the dashboard
    /// can later list the user's servers with the stored access token.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url()
    }
}
