//! Depth-by-price snapshots of the order book

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Price, Side, TotalVolume};
use crate::utils::current_time_millis;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::trace;

/// Aggregated volume of one side at one price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    /// Price of the level
    pub price: Price,
    /// Summed volume of the matching side at this price
    pub volume: TotalVolume,
}

impl DepthLevel {
    /// Creates a new depth level.
    pub fn new(price: Price, volume: TotalVolume) -> Self {
        Self { price, volume }
    }
}

/// Depth of the book at a point in time.
///
/// Both sides list every price that holds at least one order. `asks` is in
/// ascending price order and `bids` in descending price order. A price that
/// only carries orders of one side shows up on the other side with volume 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    /// Ask depth, ascending by price
    #[serde(rename = "Asks")]
    pub asks: Vec<DepthLevel>,

    /// Bid depth, descending by price
    #[serde(rename = "Bids")]
    pub bids: Vec<DepthLevel>,
}

impl DepthSnapshot {
    /// Best (highest) bid price and its volume, skipping empty rows
    pub fn best_bid(&self) -> Option<(Price, TotalVolume)> {
        let best = self
            .bids
            .iter()
            .find(|level| level.volume > 0)
            .map(|level| (level.price, level.volume));
        trace!("best_bid: {:?}", best);
        best
    }

    /// Best (lowest) ask price and its volume, skipping empty rows
    pub fn best_ask(&self) -> Option<(Price, TotalVolume)> {
        let best = self
            .asks
            .iter()
            .find(|level| level.volume > 0)
            .map(|level| (level.price, level.volume));
        trace!("best_ask: {:?}", best);
        best
    }

    /// Best ask minus best bid, zero when the book is crossed
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// Total volume on the ask side
    pub fn total_ask_volume(&self) -> TotalVolume {
        self.asks.iter().map(|level| level.volume).sum()
    }

    /// Total volume on the bid side
    pub fn total_bid_volume(&self) -> TotalVolume {
        self.bids.iter().map(|level| level.volume).sum()
    }

    /// Returns `true` if the snapshot has no price levels
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }
}

impl OrderBook {
    /// Builds a depth snapshot by walking the price index once.
    pub fn snapshot(&self) -> DepthSnapshot {
        let mut asks = Vec::with_capacity(self.by_price.len());
        let mut bids = Vec::with_capacity(self.by_price.len());

        for (&price, slots) in &self.by_price {
            let (mut ask_volume, mut bid_volume): (TotalVolume, TotalVolume) = (0, 0);
            for &slot in slots {
                let order = &self.orders[slot];
                let volume = TotalVolume::from(order.volume());
                match order.side() {
                    Side::Ask => ask_volume += volume,
                    Side::Bid => bid_volume += volume,
                }
            }
            asks.push(DepthLevel::new(price, ask_volume));
            bids.push(DepthLevel::new(price, bid_volume));
        }
        bids.reverse();

        trace!(
            "Snapshot with {} price levels from {} orders",
            asks.len(),
            self.len()
        );
        DepthSnapshot { asks, bids }
    }

    /// Serializes the current depth snapshot to JSON.
    pub fn snapshot_to_json(&self) -> Result<String, OrderBookError> {
        serde_json::to_string(&self.snapshot()).map_err(|error| {
            OrderBookError::SerializationError {
                message: error.to_string(),
            }
        })
    }

    /// Captures the current depth in a checksum-protected package.
    pub fn create_snapshot_package(&self) -> Result<DepthSnapshotPackage, OrderBookError> {
        DepthSnapshotPackage::new(self.snapshot())
    }
}

/// Format version used for checksum-enabled depth snapshots.
pub const DEPTH_SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Wrapper that provides checksum validation for [`DepthSnapshot`] instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthSnapshotPackage {
    /// Version of the snapshot schema for forward compatibility.
    pub version: u32,
    /// Milliseconds since the Unix epoch when the package was created.
    pub timestamp: u64,
    /// Snapshot payload.
    pub snapshot: DepthSnapshot,
    /// Hex-encoded SHA-256 of the serialized snapshot.
    pub checksum: String,
}

impl DepthSnapshotPackage {
    /// Creates a new snapshot package computing the checksum of the snapshot contents.
    pub fn new(snapshot: DepthSnapshot) -> Result<Self, OrderBookError> {
        let checksum = Self::compute_checksum(&snapshot)?;

        Ok(Self {
            version: DEPTH_SNAPSHOT_FORMAT_VERSION,
            timestamp: current_time_millis(),
            snapshot,
            checksum,
        })
    }

    /// Serializes the package to JSON.
    pub fn to_json(&self) -> Result<String, OrderBookError> {
        serde_json::to_string(self).map_err(|error| OrderBookError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes the package from JSON.
    pub fn from_json(data: &str) -> Result<Self, OrderBookError> {
        serde_json::from_str(data).map_err(|error| OrderBookError::DeserializationError {
            message: error.to_string(),
        })
    }

    /// Validates the checksum and version.
    pub fn validate(&self) -> Result<(), OrderBookError> {
        if self.version != DEPTH_SNAPSHOT_FORMAT_VERSION {
            return Err(OrderBookError::UnsupportedVersion {
                found: self.version,
                expected: DEPTH_SNAPSHOT_FORMAT_VERSION,
            });
        }

        let computed = Self::compute_checksum(&self.snapshot)?;
        if computed != self.checksum {
            return Err(OrderBookError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual: computed,
            });
        }

        Ok(())
    }

    /// Consumes the package and returns the validated snapshot.
    pub fn into_snapshot(self) -> Result<DepthSnapshot, OrderBookError> {
        self.validate()?;
        Ok(self.snapshot)
    }

    fn compute_checksum(snapshot: &DepthSnapshot) -> Result<String, OrderBookError> {
        let payload =
            serde_json::to_vec(snapshot).map_err(|error| OrderBookError::SerializationError {
                message: error.to_string(),
            })?;

        let mut hasher = Sha256::new();
        hasher.update(payload);

        Ok(hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect())
    }
}
