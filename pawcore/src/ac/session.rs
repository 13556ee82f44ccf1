use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: i64,
    pub origin: String,
    pub created_ts: i64,
    pub last_active_ts: i64,
}

#[derive(Copy, Clone, Eq, Hash, PartialEq)]
pub struct SessionToken(u128);

#[cfg(feature = "session")]
#[derive(Default)]
pub struct SessionFactory {
    ts_source: Option<Box<dyn Fn() -> i64 + Send + Sync + 'static>>,
}

mod impls;
