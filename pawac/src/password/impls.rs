use argon2::{
    password_hash::{
        rand_core::OsRng,
        PasswordHash,
        PasswordHasher,
        PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use std::fmt;

use crate::error::PasswordError;
use super::{
    Password,
    PasswordStatus,
};

const NEW: &str = "New";
const RESET: &str = "Reset";
const RESTRICTED: &str = "Restricted";

impl From<&Password<'_>> for PasswordStatus {
    fn from(val: &Password<'_>) -> Self {
        match val {
            Password::Misconfigured => PasswordStatus::Misconfigured,
            Password::New => PasswordStatus::New,
            Password::Reset => PasswordStatus::Reset,
            Password::Restricted => PasswordStatus::Restricted,
            Password::Hash(_) => PasswordStatus::Hash,
            Password::Raw(_) => PasswordStatus::Raw,
        }
    }
}

impl From<Password<'_>> for PasswordStatus {
    fn from(val: Password<'_>) -> Self {
        (&val).into()
    }
}

impl fmt::Display for PasswordStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            PasswordStatus::Misconfigured => "misconfigured",
            PasswordStatus::New => "new account, password not set",
            PasswordStatus::Reset => "password reset pending",
            PasswordStatus::Restricted => "restricted",
            PasswordStatus::Hash => "password set",
            PasswordStatus::Raw => "unhashed",
        })
    }
}

impl<'a> Password<'a> {
    pub fn new(s: &'a str) -> Self {
        Password::Raw(s)
    }

    /// Interpret a value as stored by the backend.  Anything that isn't
    /// a marker or a valid PHC string is treated as misconfigured.
    pub fn from_database(s: &'a str) -> Self {
        match s {
            NEW => Password::New,
            RESET => Password::Reset,
            RESTRICTED => Password::Restricted,
            _ => PasswordHash::new(s)
                .map(Password::Hash)
                .unwrap_or(Password::Misconfigured),
        }
    }

    /// Produce the value to be stored; raw passwords are hashed with a
    /// freshly generated salt.
    pub fn to_database(&self) -> Result<String, PasswordError> {
        match self {
            Password::Hash(hash) => Ok(hash.to_string()),
            Password::Raw(s) => {
                let salt = SaltString::generate(&mut OsRng);
                Ok(Argon2::default()
                    .hash_password(s.as_bytes(), &salt)?
                    .to_string())
            }
            Password::New => Ok(NEW.to_string()),
            Password::Reset => Ok(RESET.to_string()),
            Password::Restricted => Ok(RESTRICTED.to_string()),
            Password::Misconfigured => Ok("Misconfigured".to_string()),
        }
    }

    /// Only a raw password may be verified against a hash; every other
    /// pairing is not verifiable.
    pub fn verify(&self, other: &Password<'_>) -> Result<(), PasswordError> {
        match (self, other) {
            (Password::Hash(hash), Password::Raw(raw)) |
            (Password::Raw(raw), Password::Hash(hash)) => {
                Argon2::default()
                    .verify_password(raw.as_bytes(), hash)
                    .map_err(|_| PasswordError::Wrong)
            }
            _ => Err(PasswordError::NotVerifiable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        assert_eq!(PasswordStatus::from(Password::from_database("New")), PasswordStatus::New);
        assert_eq!(PasswordStatus::from(Password::from_database("Reset")), PasswordStatus::Reset);
        assert_eq!(
            PasswordStatus::from(Password::from_database("Restricted")),
            PasswordStatus::Restricted,
        );
        assert_eq!(
            PasswordStatus::from(Password::from_database("hunter2")),
            PasswordStatus::Misconfigured,
        );
        assert_eq!(Password::Reset.to_database().as_deref(), Ok("Reset"));
    }

    #[test]
    fn hash_and_verify() -> anyhow::Result<()> {
        let stored = Password::new("hunter2").to_database()?;
        let hash = Password::from_database(&stored);
        assert_eq!(PasswordStatus::from(&hash), PasswordStatus::Hash);
        assert_eq!(hash.verify(&Password::new("hunter2")), Ok(()));
        assert_eq!(Password::new("hunter2").verify(&hash), Ok(()));
        assert_eq!(hash.verify(&Password::new("hunter3")), Err(PasswordError::Wrong));
        assert_eq!(
            Password::New.verify(&Password::new("New")),
            Err(PasswordError::NotVerifiable),
        );
        Ok(())
    }
}
