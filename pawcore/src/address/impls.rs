use std::fmt;
use super::*;

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street1, self.city, self.state, self.postal)
    }
}

impl From<Address> for NewAddress {
    fn from(address: Address) -> Self {
        Self {
            street1: address.street1,
            street2: address.street2,
            city: address.city,
            state: address.state,
            postal: address.postal,
            country: address.country,
        }
    }
}

impl NewAddress {
    /// Normalize an empty second line to its absence.
    pub fn normalize(mut self) -> Self {
        if self.street2.as_deref().map(str::trim) == Some("") {
            self.street2 = None;
        }
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let address = Address {
            id: 1,
            street1: "1 Main Street".into(),
            street2: Some("Unit 2".into()),
            city: "Springfield".into(),
            state: "IL".into(),
            postal: "62701".into(),
            country: "USA".into(),
        };
        assert_eq!(address.to_string(), "1 Main Street, Springfield, IL 62701");
        let new_address = NewAddress::from(address);
        assert_eq!(new_address.street2.as_deref(), Some("Unit 2"));
    }

    #[test]
    fn normalize() {
        let address = NewAddress {
            street2: Some("  ".into()),
            ..Default::default()
        }.normalize();
        assert_eq!(address.street2, None);
    }
}
