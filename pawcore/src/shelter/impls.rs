use std::{
    fmt,
    ops::Deref,
};
use super::*;

impl fmt::Display for Shelter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<Vec<Shelter>> for Shelters {
    fn from(args: Vec<Shelter>) -> Self {
        Self(args)
    }
}

impl Deref for Shelters {
    type Target = Vec<Shelter>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Shelters {
    type Item = Shelter;
    type IntoIter = std::vec::IntoIter<Shelter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
