use pawcore::platform::{ConnectorOption, PlatformUrl};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::SqliteBackend;

impl PlatformUrl for SqliteBackend {
    fn url(&self) -> &str {
        self.url.as_ref()
    }
}

impl SqliteBackend {
    pub async fn connect(opts: ConnectorOption) -> Result<SqliteBackend, sqlx::Error> {
        if opts.auto_create_db && !Sqlite::database_exists(&opts.url).await.unwrap_or(false) {
            log::warn!("sqlite database {} does not exist; creating...", &opts.url);
            Sqlite::create_database(&opts.url).await?
        }

        let pool = SqlitePool::connect(&opts.url).await?;
        Ok(SqliteBackend {
            pool: Arc::new(pool),
            url: opts.url,
        })
    }

    pub async fn migrate_ac(self) -> Result<Self, sqlx::Error> {
        sqlx::migrate!("migrations/pawac").run(&*self.pool).await?;
        Ok(self)
    }

    pub async fn migrate_sm(self) -> Result<Self, sqlx::Error> {
        sqlx::migrate!("migrations/pawapp").run(&*self.pool).await?;
        Ok(self)
    }

    /// Connect and apply the access control schema.
    pub async fn ac(opts: ConnectorOption) -> Result<Self, sqlx::Error> {
        Self::connect(opts).await?
            .migrate_ac()
            .await
    }

    /// Connect and apply the shelter management schema.
    pub async fn sm(opts: ConnectorOption) -> Result<Self, sqlx::Error> {
        Self::connect(opts).await?
            .migrate_sm()
            .await
    }
}

mod ac;

mod address;
mod animal;
mod comment;
mod person;
mod shelter;
mod task;

mod default_impl {
    use pawcore::platform::{
        DefaultACPlatform,
        DefaultSMPlatform,
    };
    use crate::SqliteBackend;

    impl DefaultACPlatform for SqliteBackend {}
    impl DefaultSMPlatform for SqliteBackend {}
}
