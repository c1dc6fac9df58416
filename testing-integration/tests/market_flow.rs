//! End-to-end trade flows against the marketplace engine
//!
//! # Scenarios
//!
//! - Mint, reprice, sell and resell a single token between two actors
//! - Collection collaboration: granting and revoking mint permission
//! - Fee administration applying to later sales only
//! - Burn as the end of a token's life
//! - Event journal ordering and wire shape
//! - Snapshot export and restart

use bazaar_common::config::MarketConfig;
use bazaar_common::market::{
    CreateCollectionParams, MarketError, MarketEvent, Marketplace, MintParams,
};
use bazaar_testing_integration::{
    market_with_fee, mint_listed, platform_owner, test_actor, test_market, TestResult,
};

#[test]
fn test_single_token_trade_lifecycle() -> TestResult {
    let market = test_market();
    let alice = test_actor(1);
    let bob = test_actor(2);

    // Alice mints the first token, listed at 100
    let token_id = market
        .create_and_list_token(&alice, MintParams::new("ipfs://genesis", 100))?;
    assert_eq!(token_id, 1);
    assert_eq!(market.token_owner(token_id)?, alice);
    assert_eq!(market.token_uri(token_id)?, "ipfs://genesis");
    assert_eq!(market.owned_token_count(&alice), 1);

    // Bob cannot reprice a token he does not own
    let result = market.change_token_price(&bob, token_id, 40);
    assert_eq!(result, Err(MarketError::Unauthorized));

    // Payment must match the listing price exactly
    let result = market.buy_token(&bob, token_id, 150);
    assert_eq!(result, Err(MarketError::InsufficientFunds));

    // Exact payment settles the sale
    let receipt = market.buy_token(&bob, token_id, 100)?;
    assert_eq!(receipt.price, 100);
    assert_eq!(receipt.seller_amount + receipt.fee_amount, 100);

    let token = market.token_by_id(token_id)?;
    assert_eq!(token.owner, bob);
    assert_eq!(token.previous_owner, Some(alice.clone()));
    assert!(!token.for_sale);
    assert_eq!(token.transfer_count, 1);

    assert_eq!(market.owned_token_count(&alice), 0);
    assert_eq!(market.owned_token_count(&bob), 1);
    assert_eq!(market.balance_of(&alice), receipt.seller_amount);
    assert_eq!(market.balance_of(&platform_owner()), receipt.fee_amount);

    // Bob relists at a higher price and Alice buys it back
    market.change_token_price(&bob, token_id, 400)?;
    assert!(market.toggle_for_sale(&bob, token_id)?);

    let receipt = market.buy_token(&alice, token_id, 400)?;
    assert_eq!(receipt.seller, bob);
    assert_eq!(receipt.buyer, alice);

    let token = market.token_by_id(token_id)?;
    assert_eq!(token.owner, alice);
    assert_eq!(token.previous_owner, Some(bob.clone()));
    assert_eq!(token.transfer_count, 2);
    assert_eq!(token.minter, alice);

    Ok(())
}

#[test]
fn test_collection_collaboration() -> TestResult {
    let market = test_market();
    let creator = test_actor(1);
    let collaborator = test_actor(2);
    let outsider = test_actor(3);

    let collection_id = market.create_collection(
        &creator,
        CreateCollectionParams::new("Sahaba Art Collection"),
    )?;
    assert_eq!(collection_id, 1);
    assert_eq!(market.collection(collection_id)?.name, "Sahaba Art Collection");

    // Only the creator can mint until permission is granted
    let result = market.create_and_list_token(
        &collaborator,
        MintParams::new("a", 100).with_collection(collection_id),
    );
    assert_eq!(result, Err(MarketError::Unauthorized));

    market.add_collaborator(&creator, collection_id, &collaborator)?;
    let token_id = market.create_and_list_token(
        &collaborator,
        MintParams::new("a", 100).with_collection(collection_id),
    )?;
    assert_eq!(market.token_by_id(token_id)?.collection, Some(collection_id));

    // Revoking the permission stops further mints, existing tokens stay
    market.remove_collaborator(&creator, collection_id, &collaborator)?;
    let result = market.create_and_list_token(
        &collaborator,
        MintParams::new("b", 100).with_collection(collection_id),
    );
    assert_eq!(result, Err(MarketError::Unauthorized));
    assert!(market.token_exists(token_id));

    // Membership edits stay with the creator
    let result = market.add_collaborator(&outsider, collection_id, &outsider);
    assert_eq!(result, Err(MarketError::Unauthorized));
    assert!(market.collection_collaborators(collection_id)?.is_empty());

    Ok(())
}

#[test]
fn test_fee_update_applies_to_later_sales() -> TestResult {
    let market = test_market();
    let alice = test_actor(1);
    let bob = test_actor(2);

    // First sale at the default 2.5%
    let first = mint_listed(&market, &alice, "a", 1000);
    let receipt = market.buy_token(&bob, first, 1000)?;
    assert_eq!(receipt.fee_amount, 25);
    assert_eq!(receipt.seller_amount, 975);

    // Only the platform owner can change the rate
    let result = market.set_service_fee(&alice, 1000);
    assert_eq!(result, Err(MarketError::Unauthorized));

    let previous = market.set_service_fee(&platform_owner(), 1000)?;
    assert_eq!(previous, 250);
    assert_eq!(market.calc_platform_fee(1000)?, 100);
    assert_eq!(market.calc_item_price(1000)?, 900);

    // Second sale pays 10%, the settled first sale is untouched
    let second = mint_listed(&market, &alice, "b", 1000);
    let receipt = market.buy_token(&bob, second, 1000)?;
    assert_eq!(receipt.fee_amount, 100);
    assert_eq!(receipt.seller_amount, 900);

    assert_eq!(market.balance_of(&alice), 975 + 900);
    assert_eq!(market.balance_of(&platform_owner()), 25 + 100);

    Ok(())
}

#[test]
fn test_burn_is_the_end_of_the_token() -> TestResult {
    let market = test_market();
    let alice = test_actor(1);
    let bob = test_actor(2);

    let token_id = mint_listed(&market, &alice, "ipfs://relic", 100);
    market.burn_token(&alice, token_id)?;

    // Out of circulation
    assert!(!market.token_exists(token_id));
    assert_eq!(market.owned_token_count(&alice), 0);

    // Provenance queries keep answering
    assert_eq!(market.token_owner(token_id)?, alice);
    assert_eq!(market.token_uri(token_id)?, "ipfs://relic");
    assert!(market.token_by_id(token_id)?.burned);

    // Every mutation is rejected from now on, whoever calls
    assert_eq!(
        market.buy_token(&bob, token_id, 100),
        Err(MarketError::AlreadyBurned)
    );
    assert_eq!(
        market.toggle_for_sale(&alice, token_id),
        Err(MarketError::AlreadyBurned)
    );
    assert_eq!(
        market.change_token_price(&alice, token_id, 50),
        Err(MarketError::AlreadyBurned)
    );
    assert_eq!(
        market.burn_token(&alice, token_id),
        Err(MarketError::AlreadyBurned)
    );

    // The ID is never reused
    let next = mint_listed(&market, &alice, "ipfs://next", 100);
    assert_eq!(next, token_id + 1);

    Ok(())
}

#[test]
fn test_event_journal_order_and_wire_shape() -> TestResult {
    let market = test_market();
    let alice = test_actor(1);
    let bob = test_actor(2);

    let collection_id =
        market.create_collection(&alice, CreateCollectionParams::new("Art"))?;
    let token_id = market.create_and_list_token(
        &alice,
        MintParams::new("a", 1000).with_collection(collection_id),
    )?;
    market.buy_token(&bob, token_id, 1000)?;

    let events = market.drain_events();
    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], MarketEvent::CollectionCreated { .. }));
    assert!(matches!(events[1], MarketEvent::Created { .. }));
    assert!(matches!(events[2], MarketEvent::Sold { .. }));
    assert!(matches!(events[3], MarketEvent::Fee { amount: 25, .. }));

    // Tagged snake_case wire format
    let json = serde_json::to_value(&events)?;
    assert_eq!(json[0]["type"], "collection_created");
    assert_eq!(json[1]["type"], "created");
    assert_eq!(json[2]["type"], "sold");
    assert_eq!(json[2]["seller_amount"], 975);
    assert_eq!(json[3]["type"], "fee");

    // Zero-fee markets skip the fee event
    let free_market = market_with_fee(0);
    let token_id = mint_listed(&free_market, &alice, "b", 500);
    free_market.buy_token(&bob, token_id, 500)?;
    let events = free_market.drain_events();
    assert_eq!(events.len(), 2);

    Ok(())
}

#[test]
fn test_snapshot_survives_restart() -> TestResult {
    let config = MarketConfig::new("Bazaar", "BZR", platform_owner());
    let market = Marketplace::new(config.clone())?;
    let alice = test_actor(1);
    let bob = test_actor(2);

    let token_id = mint_listed(&market, &alice, "ipfs://persisted", 1000);
    market.buy_token(&bob, token_id, 1000)?;
    let collection_id = market.create_collection(&bob, CreateCollectionParams::new("Art"))?;

    // Ship the snapshot through its wire form, as a restart would
    let snapshot = market.snapshot();
    let json = serde_json::to_string_pretty(&snapshot)?;
    let market = Marketplace::restore(config, serde_json::from_str(&json)?)?;

    assert_eq!(market.token_owner(token_id)?, bob);
    assert_eq!(market.token_uri(token_id)?, "ipfs://persisted");
    assert_eq!(market.balance_of(&alice), 975);
    assert_eq!(market.balance_of(&platform_owner()), 25);
    assert_eq!(market.collection(collection_id)?.owner, bob);
    assert!(market.drain_events().is_empty());

    // Trading resumes with fresh IDs after the restart
    let next_token = mint_listed(&market, &bob, "ipfs://after", 100);
    assert_eq!(next_token, token_id + 1);
    let next_collection =
        market.create_collection(&alice, CreateCollectionParams::new("More Art"))?;
    assert_eq!(next_collection, collection_id + 1);

    Ok(())
}
