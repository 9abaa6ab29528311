//! Resting orders and the closed set of updates they accept.

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of an order within one book.
pub type OrderId = u64;

/// Limit price in integer ticks.
pub type Price = u128;

/// Order size in integer units.
pub type Volume = u64;

/// Volume summed over many orders. Wide enough that adding any number of
/// resting `Volume`s cannot overflow.
pub type TotalVolume = u128;

/// Side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Sell interest
    #[serde(rename = "ASK")]
    Ask,
    /// Buy interest
    #[serde(rename = "BID")]
    Bid,
}

impl Side {
    /// Symbolic name used in records and snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Ask => "ASK",
            Side::Bid => "BID",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASK" => Ok(Side::Ask),
            "BID" => Ok(Side::Bid),
            other => Err(OrderBookError::invalid("side", other)),
        }
    }
}

/// A single field change accepted by [`Order::update`].
///
/// Only price and volume can change once an order exists; id and side are
/// fixed for the order's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderUpdate {
    /// Move the order to a new price
    Price(Price),
    /// Replace the order's volume
    Volume(Volume),
}

impl OrderUpdate {
    fn validate(&self) -> Result<(), OrderBookError> {
        match *self {
            OrderUpdate::Price(0) => Err(OrderBookError::invalid("price", 0)),
            OrderUpdate::Volume(0) => Err(OrderBookError::invalid("volume", 0)),
            _ => Ok(()),
        }
    }
}

/// Parses a `(field name, value)` pair coming from an untyped source.
///
/// Field names other than `price` and `volume` are rejected with
/// [`OrderBookError::NotUpdatable`]. A volume that does not fit [`Volume`] is
/// rejected with [`OrderBookError::InvalidArgument`]; zero values are caught
/// when the update is applied.
impl TryFrom<(&str, u128)> for OrderUpdate {
    type Error = OrderBookError;

    fn try_from((field, value): (&str, u128)) -> Result<Self, Self::Error> {
        match field {
            "price" => Ok(OrderUpdate::Price(value)),
            "volume" => Volume::try_from(value)
                .map(OrderUpdate::Volume)
                .map_err(|_| OrderBookError::invalid("volume", value)),
            other => Err(OrderBookError::NotUpdatable {
                field: other.to_string(),
            }),
        }
    }
}

/// One resting limit order.
///
/// `id`, `price` and `volume` are strictly positive for every instance that
/// construction or update hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    side: Side,
    price: Price,
    volume: Volume,
}

impl Order {
    /// Creates an order, rejecting a zero id, price or volume.
    ///
    /// # Errors
    /// Returns [`OrderBookError::InvalidArgument`] naming the first field that
    /// failed validation.
    pub fn new(
        id: OrderId,
        side: Side,
        price: Price,
        volume: Volume,
    ) -> Result<Self, OrderBookError> {
        if id == 0 {
            return Err(OrderBookError::invalid("id", id));
        }
        if price == 0 {
            return Err(OrderBookError::invalid("price", price));
        }
        if volume == 0 {
            return Err(OrderBookError::invalid("volume", volume));
        }
        Ok(Self {
            id,
            side,
            price,
            volume,
        })
    }

    /// Creates an ask order.
    pub fn ask(id: OrderId, price: Price, volume: Volume) -> Result<Self, OrderBookError> {
        Self::new(id, Side::Ask, price, volume)
    }

    /// Creates a bid order.
    pub fn bid(id: OrderId, price: Price, volume: Volume) -> Result<Self, OrderBookError> {
        Self::new(id, Side::Bid, price, volume)
    }

    /// Returns the order id.
    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the side.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the current price.
    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the current volume.
    #[inline]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Applies `updates` in order and returns the order for chaining.
    ///
    /// The update is atomic: every value is validated before any field is
    /// written, so a failed call leaves the order untouched. When the same
    /// field appears more than once the last value wins.
    ///
    /// Orders already resting in an [`OrderBook`](super::OrderBook) must be
    /// updated through [`OrderBook::update`](super::OrderBook::update) so the
    /// price index follows the change.
    ///
    /// # Errors
    /// Returns [`OrderBookError::InvalidArgument`] if any value is zero.
    pub fn update(&mut self, updates: &[OrderUpdate]) -> Result<&mut Self, OrderBookError> {
        for update in updates {
            update.validate()?;
        }
        for update in updates {
            match *update {
                OrderUpdate::Price(price) => self.price = price,
                OrderUpdate::Volume(volume) => self.volume = volume,
            }
        }
        Ok(self)
    }

    /// Read-only projection of the order, suitable for serialization.
    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            id: self.id,
            side: self.side,
            price: self.price,
            volume: self.volume,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {{ id: {}, side: {}, price: {}, volume: {} }}",
            self.id, self.side, self.price, self.volume
        )
    }
}

/// Flat view of an [`Order`].
///
/// Serializes as `{"id", "type", "price", "volume"}` where `type` is the
/// side's symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order id
    pub id: OrderId,
    /// Order side
    #[serde(rename = "type", alias = "side")]
    pub side: Side,
    /// Limit price
    pub price: Price,
    /// Resting volume
    pub volume: Volume,
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        order.to_record()
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = OrderBookError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        Order::new(record.id, record.side, record.price, record.volume)
    }
}
