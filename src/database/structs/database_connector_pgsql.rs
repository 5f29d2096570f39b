use sqlx::{Pool, Postgres};

#[derive(Debug, Clone)]
pub struct DatabaseConnectorPgSQL {
    pub(crate) pool: Pool<Postgres>,
    /// Statements are sent unnamed so the server never keeps prepared statements.
    pub(crate) simple_protocol: bool,
}
