use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Address {
    pub id: i64,
    pub street1: String,
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal: String,
    pub country: String,
}

/// The fields of an address yet to be stored; also used as the key for
/// the exact match lookup.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct NewAddress {
    pub street1: String,
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal: String,
    pub country: String,
}

mod impls;
pub mod traits;
