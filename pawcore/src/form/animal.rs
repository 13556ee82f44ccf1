use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::{
    animal::{
        AnimalKind,
        Cat,
        Dog,
        NewAnimal,
        Species,
        Turtle,
    },
    error::ValidationError,
    serde_helpers::{
        checkbox,
        empty_string_as_none,
    },
};
use super::*;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimalForm {
    pub name: String,
    pub color: String,
    pub intake_type: String,
    pub intake_date: String,
    pub image: String,
    pub age: String,
    pub description: String,
    pub sex: String,
    #[serde(deserialize_with = "checkbox")]
    pub ready_to_adopt: bool,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub shelter: Option<i64>,
    /// One of `animal`, `dog`, `cat` or `turtle`; defaults to `animal`.
    pub species: String,
    pub breed: String,
    #[serde(deserialize_with = "checkbox")]
    pub is_fixed: bool,
    pub turtle_species: String,
}

impl AnimalForm {
    /// Validate the form; the animal is placed at the provided shelter
    /// if the form did not specify one.
    pub fn validate(&self, default_shelter_id: i64) -> Result<NewAnimal, ValidationError> {
        let mut errors = ValidationError::new();
        let species = if self.species.trim().is_empty() {
            Species::Animal
        } else {
            Species::from_str(self.species.trim()).unwrap_or_else(|_| {
                errors.add("species", format!(
                    "Select a valid choice. {} is not one of the available choices.",
                    self.species.trim(),
                ));
                Species::Animal
            })
        };
        let kind = match species {
            Species::Animal => AnimalKind::Animal,
            Species::Dog => AnimalKind::Dog(Dog {
                breed: optional(&mut errors, "breed", &self.breed, 30)
                    .unwrap_or_default(),
                is_fixed: self.is_fixed,
            }),
            Species::Cat => AnimalKind::Cat(Cat {
                breed: optional(&mut errors, "breed", &self.breed, 30)
                    .unwrap_or_default(),
                is_fixed: self.is_fixed,
            }),
            Species::Turtle => AnimalKind::Turtle(Turtle {
                species: required(&mut errors, "turtle_species", &self.turtle_species, 30),
            }),
        };
        let age = match self.age.trim() {
            "" => None,
            s => match s.parse::<i64>() {
                Ok(age) if age >= 0 => Some(age),
                _ => {
                    errors.add("age", "Enter a whole number.");
                    None
                }
            },
        };
        let animal = NewAnimal {
            name: required(&mut errors, "name", &self.name, 100),
            color: required(&mut errors, "color", &self.color, 30),
            intake_type: choice(&mut errors, "intake_type", &self.intake_type),
            intake_ts: date(&mut errors, "intake_date", &self.intake_date),
            image: optional(&mut errors, "image", &self.image, 300)
                .unwrap_or_default(),
            age,
            description: self.description.trim().to_string(),
            sex: choice(&mut errors, "sex", &self.sex),
            ready_to_adopt: self.ready_to_adopt,
            shelter_id: self.shelter.unwrap_or(default_shelter_id),
            kind,
        };
        errors.check(animal)
    }
}
