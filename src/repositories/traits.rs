//! Common repository traits
//!
//! This module defines generic interfaces for database operations.
//! Handlers depend on these capabilities only, so any store (the Postgres
//! repositories or an in-memory fake) can back them.

use std::future::Future;

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the database
    ///
    /// # Arguments
    /// * `data` - DTO containing the data for creation (without ID)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion
    fn create(&self, data: &CreateDTO) -> impl Future<Output = Result<Entity, sqlx::Error>> + Send;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `Uuid`)
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    fn read(&self, id: &Id) -> impl Future<Output = Result<Option<Entity>, sqlx::Error>> + Send;
}
