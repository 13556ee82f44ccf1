use serde::{
    de,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::*;

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("SessionToken")
            .field(&self.to_string())
            .finish()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for SessionToken {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        (s.len() == 32)
            .then(|| u128::from_str_radix(s, 16).ok())
            .flatten()
            .map(Self)
            .ok_or_else(|| ValueError::Unsupported(
                format!("{s} is not a 32 character long hexadecimal")
            ))
    }
}

impl<'de> Deserialize<'de> for SessionToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for SessionToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "session")]
mod server {
    use rand::prelude::*;
    use crate::chrono::Utc;
    use super::*;

    impl SessionToken {
        pub fn new() -> Self {
            Self(rand::thread_rng().gen())
        }

        pub fn as_bytes(&self) -> &[u8] {
            bytemuck::bytes_of(&self.0)
        }
    }

    impl Default for SessionToken {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SessionFactory {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn ts_source(mut self, val: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
            self.ts_source = Some(Box::new(val));
            self
        }

        pub fn create(
            &self,
            user_id: i64,
            origin: impl Into<String>,
        ) -> Session {
            let created_ts = self.ts_source
                .as_ref()
                .map(|f| f())
                .unwrap_or_else(|| Utc::now().timestamp());
            Session {
                token: SessionToken::new(),
                user_id,
                origin: origin.into(),
                created_ts,
                last_active_ts: created_ts,
            }
        }
    }
}
