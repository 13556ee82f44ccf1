use std::error::Error;
use clap::{ArgAction, Parser};
use pawac::platform::Builder as ACPlatformBuilder;
use pawcore::platform::ConnectorOption;
use pawdb_sqlite::SqliteBackend;

use super::Platform;

#[derive(Clone, Debug, Default, Parser)]
pub struct Builder {
    #[clap(
        long,
        value_name = "PAW_AUTO_CREATE_DB",
        env = "PAW_AUTO_CREATE_DB",
        action = ArgAction::Set,
        default_value_t = true,
        default_missing_value = "true",
    )]
    pub paw_auto_create_db: bool,
    #[clap(long, value_name = "PAWAC_DB_URL", env = "PAWAC_DB_URL")]
    pub pawac_db_url: String,
    #[clap(long, value_name = "PAWAPP_DB_URL", env = "PAWAPP_DB_URL")]
    pub pawapp_db_url: String,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paw_auto_create_db(mut self, value: bool) -> Self {
        self.paw_auto_create_db = value;
        self
    }

    pub fn pawac_db_url(mut self, value: String) -> Self {
        self.pawac_db_url = value;
        self
    }

    pub fn pawapp_db_url(mut self, value: String) -> Self {
        self.pawapp_db_url = value;
        self
    }

    /// Connect to both databases, applying their migrations, and build
    /// the platform with the default hooks.
    pub async fn build(self) -> Result<Platform, Box<dyn Error + Send + Sync>> {
        Ok(Platform::new(
            ACPlatformBuilder::new()
                .ac_platform(
                    SqliteBackend::ac(
                        ConnectorOption::from(&self.pawac_db_url)
                            .auto_create_db(self.paw_auto_create_db)
                    )
                        .await?
                )
                .password_autopurge(true)
                .build(),
            SqliteBackend::sm(
                ConnectorOption::from(&self.pawapp_db_url)
                    .auto_create_db(self.paw_auto_create_db)
            )
                .await?,
        ))
    }
}
