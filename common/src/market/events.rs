// Marketplace Ledger - Events
// Events are appended to the engine journal in operation order, under the
// same exclusive section as the mutation that produced them. The embedding
// transport drains the journal and ships entries to subscribers.

use serde::{Deserialize, Serialize};

use super::types::{ActorId, CollectionId, TokenId};

/// Event emitted on a successful ledger mutation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarketEvent {
    /// Token minted and listed
    Created {
        token_id: TokenId,
        minter: ActorId,
        collection: Option<CollectionId>,
        price: u64,
    },
    /// Token sold, ownership transferred
    Sold {
        token_id: TokenId,
        seller: ActorId,
        buyer: ActorId,
        price: u64,
        seller_amount: u64,
        fee_amount: u64,
    },
    /// Platform fee credited to the collector
    Fee {
        token_id: TokenId,
        collector: ActorId,
        amount: u64,
    },
    /// Collection created
    CollectionCreated {
        collection_id: CollectionId,
        owner: ActorId,
        name: String,
    },
}
