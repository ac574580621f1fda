use sea_orm::DatabaseConnection;

use crate::{
    model::auth::TokenDto,
    server::{
        data::admin_account::AdminAccountRepository,
        error::{auth::AuthError, Error},
        model::auth::AdminClaims,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verify admin credentials and issue a bearer token.
    ///
    /// An unknown username and a wrong password both map to
    /// [`AuthError::InvalidCredentials`] so responses don't reveal which
    /// usernames exist.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        jwt_secret: &str,
    ) -> Result<TokenDto, Error> {
        let account_repository = AdminAccountRepository::new(self.db);

        let account = account_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !bcrypt::verify(password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let claims = AdminClaims::new(account.id, &account.display_name);
        let token = claims.encode(jwt_secret)?;

        let display_name = account.display_name.clone();
        let _ = account_repository.touch_last_login(account).await?;

        Ok(TokenDto {
            token,
            display_name,
        })
    }
}
