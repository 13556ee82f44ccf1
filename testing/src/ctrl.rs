use pawcore::{
    address::NewAddress,
    person::WorkerRole,
};
use pawctrl::{
    actor::Actor,
    platform::{
        NewWorker,
        Platform,
    },
};
use pawdb_sqlite::SqliteBackend;

use crate::ac;

/// The shelter and its staff as set up by `create_sqlite_platform_with_staff`;
/// each worker's password is identical to their username.
pub struct Staff {
    pub shelter_id: i64,
    pub manager: Actor,
    pub regular: Actor,
    pub vet: Actor,
}

pub fn shelter_address() -> NewAddress {
    NewAddress {
        street1: "1 Shelter Road".into(),
        street2: None,
        city: "Springfield".into(),
        state: "IL".into(),
        postal: "62701".into(),
        country: "USA".into(),
    }
}

pub async fn create_sqlite_platform() -> anyhow::Result<Platform> {
    Ok(Platform::new(
        ac::create_sqlite_platform(true).await?,
        SqliteBackend::sm("sqlite::memory:".into()).await?,
    ))
}

pub async fn create_sqlite_platform_with_staff() -> anyhow::Result<(Platform, Staff)> {
    let platform = create_sqlite_platform().await?;
    let address = shelter_address();
    let shelter_id = platform.create_shelter(
        "Springfield Shelter",
        "555-0100",
        "shelter@example.com",
        &address,
    ).await?;
    let address_id = platform.resolve_address(&address).await?;

    let hire = |username: &'static str, role: WorkerRole| NewWorker {
        name: format!("{username} worker"),
        phone_number: "555-0101".into(),
        email: format!("{username}@example.com"),
        address_id,
        username: username.into(),
        role,
        shelter_id,
    };
    let manager = hire("manager", WorkerRole::Manager);
    let regular = hire("regular", WorkerRole::Regular);
    let vet = hire("vet", WorkerRole::Vet);
    let staff = Staff {
        shelter_id,
        manager: platform.hire_worker(&manager, "manager").await?,
        regular: platform.hire_worker(&regular, "regular").await?,
        vet: platform.hire_worker(&vet, "vet").await?,
    };
    Ok((platform, staff))
}
