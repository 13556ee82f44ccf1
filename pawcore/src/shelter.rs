use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Shelter {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email_address: String,
    pub address_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NewShelter {
    pub name: String,
    pub phone_number: String,
    pub email_address: String,
    pub address_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Shelters(Vec<Shelter>);

mod impls;
pub mod traits;
