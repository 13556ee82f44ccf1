use serde::{Deserialize, Serialize};

/// A person known to the shelters; the subtype specific data is held by
/// the `kind`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address_id: i64,
    pub kind: PersonKind,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NewPerson {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address_id: i64,
    pub kind: PersonKind,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum PersonKind {
    Worker(Worker),
    Adopter(Adopter),
    Volunteer(Volunteer),
}

/// The discriminant of `PersonKind`, as stored alongside the base row.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonType {
    Worker,
    Adopter,
    Volunteer,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Worker {
    pub username: String,
    pub role: WorkerRole,
    pub hire_ts: i64,
    pub shelter_id: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Adopter {
    pub can_adopt: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Volunteer {
    pub start_ts: i64,
    pub shelter_id: i64,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum WorkerRole {
    #[serde(rename = "MA")]
    Manager,
    #[serde(rename = "RE")]
    Regular,
    #[serde(rename = "VT")]
    Vet,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Persons(Vec<Person>);

mod impls;
pub mod traits;
