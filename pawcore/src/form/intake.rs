use serde::{Deserialize, Serialize};
use crate::{
    address::NewAddress,
    error::ValidationError,
    serde_helpers::empty_string_as_none,
};
use super::*;

/// The adoption and volunteer forms; `shelter` is only submitted by
/// the volunteer form.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IntakeForm {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address_one: String,
    pub address_two: String,
    pub city: String,
    pub state: String,
    pub postal: String,
    pub country: String,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub shelter: Option<i64>,
}

/// A validated intake submission.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Applicant {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: NewAddress,
}

impl IntakeForm {
    pub fn validate(&self) -> Result<Applicant, ValidationError> {
        let mut errors = ValidationError::new();
        let applicant = Applicant {
            name: required(&mut errors, "name", &self.name, 400),
            phone_number: required(&mut errors, "phone_number", &self.phone_number, 20),
            email: email(&mut errors, "email", &self.email, 300),
            address: NewAddress {
                street1: required(&mut errors, "address_one", &self.address_one, 300),
                street2: optional(&mut errors, "address_two", &self.address_two, 300),
                city: required(&mut errors, "city", &self.city, 300),
                state: required(&mut errors, "state", &self.state, 300),
                postal: required(&mut errors, "postal", &self.postal, 50),
                country: required(&mut errors, "country", &self.country, 300),
            },
        };
        errors.check(applicant)
    }
}
