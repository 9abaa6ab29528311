//! Core OrderBook storage: one order arena with an identity index and a price index

use super::error::OrderBookError;
use super::order::{Order, OrderId, OrderRecord, Price, Side, TotalVolume};
use serde::Serialize;
use slab::Slab;
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// The OrderBook owns every resting order and keeps two views over them.
///
/// Orders live in a single arena. The identity index maps an order id to its
/// arena slot and the price index maps a price to the slots resting there, in
/// insertion order. Both indexes only hold slot keys, so an order exists once
/// and every view observes the same state.
///
/// Invariants maintained by every public operation:
/// - an id is in the identity index if and only if its slot is in exactly one
///   price bucket;
/// - an order's `price` always equals the key of the bucket that holds it;
/// - no price bucket is empty.
///
/// The book is not internally synchronized. Callers sharing it across threads
/// must serialize access themselves, e.g. behind a `Mutex` or a single owning
/// task.
#[derive(Debug, Default)]
pub struct OrderBook {
    /// Arena holding every resting order
    pub(super) orders: Slab<Order>,

    /// Identity index: order id to arena slot
    pub(super) by_id: HashMap<OrderId, usize>,

    /// Price index: price to arena slots in insertion order
    pub(super) by_price: BTreeMap<Price, Vec<usize>>,
}

impl OrderBook {
    /// Creates an empty order book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty order book with room for `capacity` orders before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(capacity),
            by_id: HashMap::with_capacity(capacity),
            by_price: BTreeMap::new(),
        }
    }

    /// Builds a book from `orders`, appended in sequence order.
    ///
    /// # Errors
    /// Returns [`OrderBookError::DuplicateId`] if two orders share an id.
    pub fn from_orders<I>(orders: I) -> Result<Self, OrderBookError>
    where
        I: IntoIterator<Item = Order>,
    {
        let orders = orders.into_iter();
        let mut book = Self::with_capacity(orders.size_hint().0);
        book.append(orders)?;
        Ok(book)
    }

    /// Number of resting orders.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if no order is resting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Returns `true` if an order with `id` is resting.
    #[inline]
    pub fn contains(&self, id: OrderId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of distinct prices holding at least one order.
    #[inline]
    pub fn price_levels(&self) -> usize {
        self.by_price.len()
    }

    /// Iterates every order, by ascending price then insertion order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.by_price
            .values()
            .flat_map(move |slots| slots.iter().map(move |&slot| &self.orders[slot]))
    }

    /// Iterates the orders resting at `price` in insertion order.
    pub fn orders_at(&self, price: Price) -> impl Iterator<Item = &Order> + '_ {
        self.by_price
            .get(&price)
            .into_iter()
            .flat_map(move |slots| slots.iter().map(move |&slot| &self.orders[slot]))
    }

    /// Total volume resting at `price` on `side`.
    pub fn volume_at(&self, price: Price, side: Side) -> TotalVolume {
        self.orders_at(price)
            .filter(|order| order.side() == side)
            .map(|order| TotalVolume::from(order.volume()))
            .sum()
    }

    /// Highest price with at least one bid.
    pub fn best_bid(&self) -> Option<Price> {
        let best = self
            .by_price
            .iter()
            .rev()
            .find(|(_, slots)| slots.iter().any(|&s| self.orders[s].side() == Side::Bid))
            .map(|(&price, _)| price);
        trace!("best_bid: {:?}", best);
        best
    }

    /// Lowest price with at least one ask.
    pub fn best_ask(&self) -> Option<Price> {
        let best = self
            .by_price
            .iter()
            .find(|(_, slots)| slots.iter().any(|&s| self.orders[s].side() == Side::Ask))
            .map(|(&price, _)| price);
        trace!("best_ask: {:?}", best);
        best
    }

    /// Removes every order and price level.
    pub fn clear(&mut self) {
        trace!("Clearing order book with {} orders", self.len());
        self.orders.clear();
        self.by_id.clear();
        self.by_price.clear();
    }

    /// Inserts `order` into the arena and both indexes. The caller has
    /// already checked that its id is free.
    pub(super) fn place_order(&mut self, order: Order) -> usize {
        let (id, price) = (order.id(), order.price());
        let slot = self.orders.insert(order);
        self.by_id.insert(id, slot);
        self.by_price.entry(price).or_default().push(slot);
        slot
    }

    /// Detaches `slot` from the bucket at `price`, pruning the bucket if it
    /// becomes empty. Remaining slots keep their relative order.
    pub(super) fn unlink_from_price(&mut self, slot: usize, price: Price) {
        if let Some(slots) = self.by_price.get_mut(&price) {
            if let Some(pos) = slots.iter().position(|&s| s == slot) {
                slots.remove(pos);
            }
            if slots.is_empty() {
                self.by_price.remove(&price);
            }
        }
    }
}

impl Serialize for OrderBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("OrderBook", 2)?;

        let orders: Vec<OrderRecord> = self.orders().map(Order::to_record).collect();
        state.serialize_field("orders", &orders)?;
        state.serialize_field("snapshot", &self.snapshot())?;

        state.end()
    }
}
