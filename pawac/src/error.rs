use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] pawcore::error::BackendError),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),
    #[error("the stored password for the account is misconfigured")]
    Misconfiguration,
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error(transparent)]
    Argon2(#[from] argon2::password_hash::Error),
    #[error("a password has already been set")]
    Existing,
    #[error("the passwords do not match")]
    Mismatched,
    #[error("wrong password")]
    Wrong,
    #[error("the password cannot be verified")]
    NotVerifiable,
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum AuthenticationError {
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error("the account is restricted")]
    Restricted,
    #[error("unknown user")]
    UnknownUser,
    #[error("unknown or expired session")]
    UnknownSession,
}
