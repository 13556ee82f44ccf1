use std::{
    fmt,
    ops::Deref,
    str::FromStr,
};
use crate::{
    error::ValueError,
    task::NewTask,
};
use super::*;

impl Animal {
    pub fn species(&self) -> Species {
        self.kind.species()
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl NewAnimal {
    pub fn species(&self) -> Species {
        self.kind.species()
    }
}

impl AnimalKind {
    pub fn species(&self) -> Species {
        match self {
            AnimalKind::Animal => Species::Animal,
            AnimalKind::Dog(_) => Species::Dog,
            AnimalKind::Cat(_) => Species::Cat,
            AnimalKind::Turtle(_) => Species::Turtle,
        }
    }
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Animal => "animal",
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Turtle => "turtle",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "animal" => Ok(Species::Animal),
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            "turtle" => Ok(Species::Turtle),
            _ => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl IntakeType {
    pub fn code(&self) -> &'static str {
        match self {
            IntakeType::Captured => "C",
            IntakeType::Surrendered => "S",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntakeType::Captured => "Captured in wild",
            IntakeType::Surrendered => "Surrendered by previous owner",
        }
    }
}

impl fmt::Display for IntakeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for IntakeType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(IntakeType::Captured),
            "S" => Ok(IntakeType::Surrendered),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl Sex {
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sex {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Sex::Male),
            "F" => Ok(Sex::Female),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl OnboardingTask {
    /// The task to be created at the shelter; the link to the animal is
    /// made when the animal gets stored.
    pub fn to_new_task(&self, shelter_id: i64) -> NewTask {
        NewTask {
            title: self.title.to_string(),
            description: self.description.to_string(),
            shelter_id,
            required_role: self.required_role,
            ..Default::default()
        }
    }
}

fn split_param(value: Option<&str>) -> impl Iterator<Item = &str> {
    value.into_iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl AnimalQuery {
    /// Build the query from the comma separated parameters of the
    /// public listing.
    pub fn from_params(
        location: Option<&str>,
        color: Option<&str>,
        sex: Option<&str>,
    ) -> Result<Self, ValueError> {
        Ok(Self {
            shelter_names: split_param(location)
                .map(String::from)
                .collect(),
            colors: split_param(color)
                .map(String::from)
                .collect(),
            sexes: split_param(sex)
                .map(Sex::from_str)
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.shelter_names.is_empty()
            && self.colors.is_empty()
            && self.sexes.is_empty()
    }
}

impl From<Vec<Animal>> for Animals {
    fn from(args: Vec<Animal>) -> Self {
        Self(args)
    }
}

impl Deref for Animals {
    type Target = Vec<Animal>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Animals {
    type Item = Animal;
    type IntoIter = std::vec::IntoIter<Animal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
