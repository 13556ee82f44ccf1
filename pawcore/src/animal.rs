use serde::{Deserialize, Serialize};
use crate::task::RequiredRole;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub intake_type: Option<IntakeType>,
    pub intake_ts: i64,
    /// Reference to the image, the image itself is stored elsewhere.
    pub image: String,
    pub age: Option<i64>,
    pub description: String,
    pub sex: Option<Sex>,
    pub ready_to_adopt: bool,
    pub shelter_id: i64,
    pub kind: AnimalKind,
}

/// An animal about to be taken in; `intake_ts` defaults to the time it
/// gets stored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NewAnimal {
    pub name: String,
    pub color: String,
    pub intake_type: Option<IntakeType>,
    pub intake_ts: Option<i64>,
    pub image: String,
    pub age: Option<i64>,
    pub description: String,
    pub sex: Option<Sex>,
    pub ready_to_adopt: bool,
    pub shelter_id: i64,
    pub kind: AnimalKind,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum AnimalKind {
    #[default]
    Animal,
    Dog(Dog),
    Cat(Cat),
    Turtle(Turtle),
}

/// The discriminant of `AnimalKind`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Animal,
    Dog,
    Cat,
    Turtle,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Dog {
    pub breed: String,
    pub is_fixed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Cat {
    pub breed: String,
    pub is_fixed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Turtle {
    pub species: String,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum IntakeType {
    #[serde(rename = "C")]
    Captured,
    #[serde(rename = "S")]
    Surrendered,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// An entry of the checklist every newly taken in animal of a given
/// species starts out with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OnboardingTask {
    pub title: &'static str,
    pub description: &'static str,
    pub required_role: RequiredRole,
}

/// Filters for the public listing; an empty list applies no filter.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AnimalQuery {
    pub shelter_names: Vec<String>,
    pub colors: Vec<String>,
    pub sexes: Vec<Sex>,
}

/// The distinct values present across all animals.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AnimalFilterOptions {
    pub sexes: Vec<Sex>,
    pub colors: Vec<String>,
    pub shelter_names: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Animals(Vec<Animal>);

mod impls;
mod template;
pub mod traits;
