use std::{
    fmt,
    ops::Deref,
    str::FromStr,
};
use crate::error::ValueError;
use super::*;

impl Person {
    pub fn person_type(&self) -> PersonType {
        self.kind.person_type()
    }

    pub fn worker(&self) -> Option<&Worker> {
        match &self.kind {
            PersonKind::Worker(worker) => Some(worker),
            _ => None,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PersonKind {
    pub fn person_type(&self) -> PersonType {
        match self {
            PersonKind::Worker(_) => PersonType::Worker,
            PersonKind::Adopter(_) => PersonType::Adopter,
            PersonKind::Volunteer(_) => PersonType::Volunteer,
        }
    }
}

impl PersonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonType::Worker => "worker",
            PersonType::Adopter => "adopter",
            PersonType::Volunteer => "volunteer",
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worker" => Ok(PersonType::Worker),
            "adopter" => Ok(PersonType::Adopter),
            "volunteer" => Ok(PersonType::Volunteer),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl WorkerRole {
    pub fn code(&self) -> &'static str {
        match self {
            WorkerRole::Manager => "MA",
            WorkerRole::Regular => "RE",
            WorkerRole::Vet => "VT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkerRole::Manager => "Manager",
            WorkerRole::Regular => "Regular",
            WorkerRole::Vet => "Veterinarian",
        }
    }
}

impl fmt::Display for WorkerRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkerRole {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MA" => Ok(WorkerRole::Manager),
            "RE" => Ok(WorkerRole::Regular),
            "VT" => Ok(WorkerRole::Vet),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl From<Vec<Person>> for Persons {
    fn from(args: Vec<Person>) -> Self {
        Self(args)
    }
}

impl Deref for Persons {
    type Target = Vec<Person>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Persons {
    type Item = Person;
    type IntoIter = std::vec::IntoIter<Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use super::*;

    #[test]
    fn worker_role() -> anyhow::Result<()> {
        assert_eq!(WorkerRole::Vet.to_string(), "VT");
        assert_eq!(WorkerRole::from_str("MA")?, WorkerRole::Manager);
        assert!(matches!(
            WorkerRole::from_str("NA").expect_err("not a worker role"),
            ValueError::Unsupported(s) if s == "NA",
        ));
        assert_eq!(serde_json::to_string(&WorkerRole::Regular)?, r#""RE""#);
        Ok(())
    }

    #[test]
    fn person_serde() -> anyhow::Result<()> {
        let person = Person {
            id: 1,
            name: "Ada".into(),
            phone_number: "555-0100".into(),
            email: "ada@example.com".into(),
            address_id: 2,
            kind: PersonKind::Volunteer(Volunteer {
                start_ts: 1234567890,
                shelter_id: 3,
            }),
        };
        assert_eq!(person.person_type(), PersonType::Volunteer);
        assert!(person.worker().is_none());
        let value = serde_json::to_value(&person)?;
        assert_eq!(value["kind"]["type"], "Volunteer");
        assert_eq!(value["kind"]["shelter_id"], 3);
        assert_eq!(serde_json::from_value::<Person>(value)?, person);
        Ok(())
    }

    #[test]
    fn person_type() -> anyhow::Result<()> {
        for kind in [PersonType::Worker, PersonType::Adopter, PersonType::Volunteer] {
            assert_eq!(PersonType::from_str(kind.as_str())?, kind);
        }
        assert!(PersonType::from_str("person").is_err());
        Ok(())
    }
}
