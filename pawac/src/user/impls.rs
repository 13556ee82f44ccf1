use pawcore::ac::user;
use std::fmt;

use crate::{
    Platform,
    error::{
        Error,
        PasswordError,
    },
    password::Password,
};
use super::User;

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("User")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl From<User> for user::User {
    fn from(val: User) -> Self {
        val.user
    }
}

impl User {
    pub(crate) fn new(
        platform: Platform,
        user: user::User,
    ) -> Self {
        Self {
            platform,
            user,
        }
    }

    pub fn id(&self) -> i64 {
        self.user.id
    }

    pub fn name(&self) -> &str {
        self.user.name.as_ref()
    }

    pub fn user(&self) -> &user::User {
        &self.user
    }

    /// Change the password, which requires the current password.
    pub async fn update_password(
        &self,
        old_password: &str,
        new_password: &str,
        new_password_confirm: &str,
    ) -> Result<(), Error> {
        (new_password == new_password_confirm)
            .then_some(())
            .ok_or(PasswordError::Mismatched)?;
        self.platform
            .verify_user_id_password(self.user.id, old_password)
            .await?;
        self.platform
            .force_user_id_password(self.user.id, Password::new(new_password))
            .await
    }

    /// Set the password for an account that is new or pending a reset.
    pub async fn reset_password(
        &self,
        new_password: &str,
        new_password_confirm: &str,
    ) -> Result<(), Error> {
        (new_password == new_password_confirm)
            .then_some(())
            .ok_or(PasswordError::Mismatched)?;
        self.platform
            .new_user_id_password(self.user.id, new_password)
            .await
    }
}
