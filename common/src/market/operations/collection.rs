// Collection Operations
// This module contains collection creation and collaborator management.

use indexmap::IndexSet;

use crate::market::{ActorId, Collection, CollectionId, MarketError, MarketResult};

use super::validation::validate_collection_name;
use super::MarketStore;

// ========================================
// Create Collection Parameters
// ========================================

/// Parameters for creating a new collection
#[derive(Clone, Debug)]
pub struct CreateCollectionParams {
    /// Collection name (1-64 bytes)
    pub name: String,
    /// Initial collaborators. The creator is filtered out and
    /// duplicates collapse.
    pub collaborators: Vec<ActorId>,
}

impl CreateCollectionParams {
    /// Create new collection parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collaborators: Vec::new(),
        }
    }

    /// Set initial collaborators
    pub fn with_collaborators(mut self, collaborators: Vec<ActorId>) -> Self {
        self.collaborators = collaborators;
        self
    }

    /// Validate all parameters
    pub fn validate(&self) -> MarketResult<()> {
        validate_collection_name(&self.name)
    }
}

// ========================================
// Create Collection Operation
// ========================================

/// Create a new collection owned by the caller
///
/// # Returns
/// - `Ok(CollectionId)`: The new collection ID
/// - `Err(MarketError)`: Error code
pub fn create_collection<S: MarketStore + ?Sized>(
    storage: &mut S,
    caller: &ActorId,
    params: CreateCollectionParams,
) -> MarketResult<CollectionId> {
    // Step 1: Validate parameters
    params.validate()?;

    // Step 2: Allocate collection ID
    let collection_id = storage.allocate_collection_id()?;

    // Step 3: Build collaborator set, owner never listed explicitly
    let collaborators: IndexSet<ActorId> = params
        .collaborators
        .into_iter()
        .filter(|actor| actor != caller)
        .collect();

    // Step 4: Store collection
    let collection = Collection {
        id: collection_id,
        name: params.name,
        owner: caller.clone(),
        collaborators,
    };
    storage.put_collection(&collection)?;

    Ok(collection_id)
}

// ========================================
// Collaborator Management
// ========================================

/// Add a collaborator to a collection (owner only)
pub fn add_collaborator<S: MarketStore + ?Sized>(
    storage: &mut S,
    caller: &ActorId,
    collection_id: CollectionId,
    actor: &ActorId,
) -> MarketResult<()> {
    let mut collection = storage
        .get_collection(collection_id)
        .ok_or(MarketError::CollectionNotFound)?;

    // Only the owner manages collaborators
    if collection.owner != *caller {
        return Err(MarketError::Unauthorized);
    }

    // The owner is implicitly permitted already
    if collection.owner == *actor {
        return Err(MarketError::AlreadyCollaborator);
    }

    if !collection.collaborators.insert(actor.clone()) {
        return Err(MarketError::AlreadyCollaborator);
    }

    storage.put_collection(&collection)
}

/// Remove a collaborator from a collection (owner only)
pub fn remove_collaborator<S: MarketStore + ?Sized>(
    storage: &mut S,
    caller: &ActorId,
    collection_id: CollectionId,
    actor: &ActorId,
) -> MarketResult<()> {
    let mut collection = storage
        .get_collection(collection_id)
        .ok_or(MarketError::CollectionNotFound)?;

    if collection.owner != *caller {
        return Err(MarketError::Unauthorized);
    }

    // shift_remove keeps the remaining collaborators in insertion order
    if !collection.collaborators.shift_remove(actor) {
        return Err(MarketError::NotCollaborator);
    }

    storage.put_collection(&collection)
}
