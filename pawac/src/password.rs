use argon2::password_hash::PasswordHash;

/// A password as supplied by a user or as stored for an account.
///
/// Apart from an actual hash, an account may be stored with one of the
/// marker values which can never be matched by any raw input: `New`
/// and `Reset` permit the setting of a password without knowing the
/// previous one, while `Restricted` locks the account.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum Password<'a> {
    Misconfigured,
    New,
    Reset,
    Restricted,
    Hash(PasswordHash<'a>),
    Raw(&'a str),
}

/// The kind of the stored password, without the hash itself.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PasswordStatus {
    Misconfigured,
    New,
    Reset,
    Restricted,
    Hash,
    Raw,
}

mod impls;
