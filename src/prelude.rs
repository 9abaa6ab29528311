//! Prelude module that re-exports commonly used types and functions.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use limit_book::prelude::*;
//! ```

// Core order book types
pub use crate::orderbook::OrderBook;
pub use crate::orderbook::OrderBookError;

// Order types
pub use crate::orderbook::{
    Order, OrderId, OrderRecord, OrderUpdate, Price, Side, TotalVolume, Volume,
};

// Snapshot types
pub use crate::orderbook::{DepthLevel, DepthSnapshot, DepthSnapshotPackage};

// Utility functions
pub use crate::utils::{current_time_millis, setup_logger};
