use pawac::platform::{
    Builder,
    Platform,
};
use pawdb_sqlite::SqliteBackend;

pub async fn create_sqlite_backend() -> anyhow::Result<SqliteBackend> {
    Ok(SqliteBackend::ac("sqlite::memory:".into()).await?)
}

pub async fn create_sqlite_platform(purge: bool) -> anyhow::Result<Platform> {
    let platform = Builder::new()
        .ac_platform(create_sqlite_backend().await?)
        .password_autopurge(purge)
        .build();
    Ok(platform)
}
