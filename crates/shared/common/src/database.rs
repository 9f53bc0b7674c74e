//! Database connection and schema bootstrap.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    EntityTrait, Schema, Statement,
};

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection pool.
    ///
    /// Accepts a URL (`postgres://...`, `sqlite://...`) or prepared
    /// [`ConnectOptions`].
    pub async fn connect<C>(options: C) -> Result<Self, DbErr>
    where
        C: Into<ConnectOptions>,
    {
        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(
            backend = ?connection.get_database_backend(),
            "Database connected"
        );
        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

/// Create the table backing `entity` unless it already exists.
///
/// Columns, primary key and unique constraints come from the entity
/// definition.
pub async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let table = entity.table_name().to_string();
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::debug!(%table, "Table ensured");
    Ok(())
}
