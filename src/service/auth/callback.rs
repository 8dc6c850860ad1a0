use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{discord::DiscordUser, user::UpsertUserParams},
    service::auth::DiscordAuthService,
};

impl<'a> DiscordAuthService<'a> {
    /// Completes the OAuth flow after Discord redirects back with a code.
    ///
    /// Exchanges the authorization code for a token, fetches the user's Discord
    /// profile, and upserts the user record. The very first user to log in on
    /// an instance with no admins is promoted to admin; after that, logins
    /// never change the admin flag.
    ///
    /// # Returns
    /// - `Ok((user, access_token))` - The upserted user and the Discord access
    ///   token, which the caller stores in the session for later guild lookups
    /// - `Err(AppError)` - Token exchange, Discord API, or database failure
    pub async fn callback(
        &self,
        authorization_code: String,
    ) -> Result<(entity::user::Model, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchange(err.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;

        let is_admin = if user_repo.admin_exists().await? {
            None
        } else {
            Some(true)
        };

        let user = user_repo
            .upsert(UpsertUserParams {
                discord_id: discord_user.id.clone(),
                name: discord_user.display_name(),
                avatar: discord_user.avatar.clone(),
                is_admin,
            })
            .await?;

        let access_token = token.access_token().secret().clone();

        Ok((user, access_token))
    }

    /// Retrieves a Discord user's information using provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}
