//! OrderBook implementation for managing resting orders and their price levels.

pub mod book;
pub mod error;
pub mod operations;
pub mod order;
pub mod snapshot;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use order::{
    Order, OrderId, OrderRecord, OrderUpdate, Price, Side, TotalVolume, Volume,
};
pub use snapshot::{DEPTH_SNAPSHOT_FORMAT_VERSION, DepthLevel, DepthSnapshot, DepthSnapshotPackage};
