//! # In-Memory Limit Order Book
//!
//! A single-instrument limit order book that keeps every resting order in one
//! arena and maintains two views over it: an identity index for O(1) lookup,
//! update and removal by order id, and a price index that groups orders by
//! price in insertion order for depth aggregation.
//!
//! ## Key Features
//!
//! - **Single Source of Truth**: Orders live once, in a `slab` arena. The identity
//!   and price indexes store arena keys only, so both views always observe the same
//!   order state.
//!
//! - **Price Coherence**: A price-changing update moves the order to the back of its
//!   new price level. An order's price always equals the level that holds it.
//!
//! - **Closed Updates**: Only price and volume can change. Updates are expressed as
//!   [`OrderUpdate`] values and applied atomically: either every field changes or none.
//!
//! - **Depth Snapshots**: [`OrderBook::snapshot`] aggregates volume per side per price,
//!   asks ascending and bids descending, ready for JSON serialization with `serde`.
//!
//! - **Checksummed Packages**: [`DepthSnapshotPackage`] wraps a snapshot with a
//!   format version and a SHA-256 checksum for transfer between processes.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: Both indexes agree after every operation, including failed ones.
//! 2. **Predictable Cost**: Lookup, insertion and removal by id are O(1) on the identity
//!    index plus a scan of a single price level; snapshots are O(orders).
//! 3. **Plain Ownership**: The book owns its orders and never hands out mutable
//!    references, so no caller can desynchronize the indexes.
//!
//! ## Concurrency
//!
//! The book is a plain single-threaded structure with no internal locking. When it
//! must be shared, serialize access externally, e.g. with a `Mutex<OrderBook>` or a
//! single owning task.
//!
//! ## Errors
//!
//! Validation failures surface as [`OrderBookError`]: `InvalidArgument` for a zero id,
//! price or volume or an unknown side name, `NotUpdatable` for an update naming a field
//! other than price or volume, and `DuplicateId` for an insertion collision. An unknown
//! order id is never an error; lookups, updates and removals report it as `None`.
//!
//! ## Logging
//!
//! Every mutation emits `tracing` events at `trace` level; relocations and rejected
//! duplicates are logged at `debug`. [`setup_logger`] installs a subscriber whose level
//! is read from the `LOGLEVEL` environment variable.
//!
//! ## Example
//!
//! ```rust
//! use limit_book::prelude::*;
//!
//! let mut book = OrderBook::from_orders([
//!     Order::ask(1, 101, 5)?,
//!     Order::ask(2, 101, 3)?,
//!     Order::bid(3, 99, 4)?,
//! ])?;
//!
//! book.update(3, &[OrderUpdate::Price(100)])?;
//! book.remove(2);
//!
//! let snapshot = book.snapshot();
//! assert_eq!(snapshot.asks, vec![DepthLevel::new(100, 0), DepthLevel::new(101, 5)]);
//! assert_eq!(snapshot.bids, vec![DepthLevel::new(101, 0), DepthLevel::new(100, 4)]);
//! # Ok::<(), OrderBookError>(())
//! ```

pub mod orderbook;

pub mod prelude;
mod utils;

pub use orderbook::{
    DepthLevel, DepthSnapshot, DepthSnapshotPackage, Order, OrderBook, OrderBookError, OrderId,
    OrderRecord, OrderUpdate, Price, Side, TotalVolume, Volume,
};
pub use utils::{current_time_millis, setup_logger};
