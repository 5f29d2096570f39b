use async_trait::async_trait;
use sqlx::Error;
use crate::database::enums::record_type::RecordType;
use crate::database::structs::new_user::NewUser;

/// Schema and seeding operations the bootstrapper drives on the open handle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Creates the table of `record` if missing and adds any missing columns and indexes.
    async fn migrate(&self, record: RecordType) -> Result<(), Error>;

    async fn any_user_exists(&self) -> Result<bool, Error>;

    async fn insert_user(&self, user: &NewUser) -> Result<(), Error>;
}
