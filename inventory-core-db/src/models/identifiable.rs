use uuid::Uuid;

/// Trait for entities that carry a store-assigned, immutable UUID
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Uuid;
}
