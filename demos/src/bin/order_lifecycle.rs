//! Walks one order through add, update, relocation and removal, and shows how
//! validation and duplicate-id errors surface.

use limit_book::prelude::*;
use std::error::Error;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let mut book = OrderBook::from_orders([
        Order::ask(1, 101, 5)?,
        Order::ask(2, 101, 3)?,
        Order::bid(3, 99, 4)?,
    ])?;
    info!("Book holds {} orders on {} price levels", book.len(), book.price_levels());

    if let Err(err) = book.add(Order::bid(2, 98, 1)?) {
        warn!("Rejected insert: {err}");
    }

    if let Err(err) = Order::new(4, Side::Bid, 0, 1) {
        warn!("Rejected order: {err}");
    }

    if let Err(err) = OrderUpdate::try_from(("side", 1u128)) {
        warn!("Rejected update: {err}");
    }

    let updates = [OrderUpdate::try_from(("price", 100u128))?, OrderUpdate::Volume(10)];
    if let Some(order) = book.update(3, &updates)? {
        info!("Updated {order}");
    }
    info!("Orders at 100: {:?}", book.orders_at(100).map(Order::id).collect::<Vec<_>>());

    book.remove(1);
    info!("Record for order 2: {:?}", book.get_as_record(2));
    info!("Record for order 1: {:?}", book.get_as_record(1));

    info!("Final book:\n{}", serde_json::to_string_pretty(&book)?);
    Ok(())
}
