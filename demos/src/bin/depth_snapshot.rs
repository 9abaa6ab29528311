//! Builds a small book, prints its depth and round-trips a checksummed package.

use limit_book::prelude::*;
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let mut book = OrderBook::new();
    add_order(&mut book, 1001, Side::Bid, 10_000, 5)?;
    add_order(&mut book, 1002, Side::Bid, 9_950, 8)?;
    add_order(&mut book, 1003, Side::Bid, 9_950, 15)?;

    add_order(&mut book, 2001, Side::Ask, 10_050, 6)?;
    add_order(&mut book, 2002, Side::Ask, 10_100, 9)?;
    add_order(&mut book, 2003, Side::Ask, 10_100, 4)?;

    info!("Best bid: {:?}", book.best_bid());
    info!("Best ask: {:?}", book.best_ask());

    let snapshot = book.snapshot();
    info!("Depth:\n{}", serde_json::to_string_pretty(&snapshot)?);

    let package = book.create_snapshot_package()?;
    info!(
        "Snapshot package version {} with checksum {}",
        package.version, package.checksum
    );

    let json_payload = package.to_json()?;
    let restored = DepthSnapshotPackage::from_json(&json_payload)?.into_snapshot()?;
    info!(
        "Restored snapshot: {} ask rows, {} bid rows, spread {:?}",
        restored.asks.len(),
        restored.bids.len(),
        restored.spread()
    );

    Ok(())
}

fn add_order(
    book: &mut OrderBook,
    id: OrderId,
    side: Side,
    price: Price,
    volume: Volume,
) -> Result<(), Box<dyn Error>> {
    book.add(Order::new(id, side, price, volume)?)
        .map_err(|err| err.into())
}
