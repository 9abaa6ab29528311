//! Order book operations like adding, updating and removing orders

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Order, OrderId, OrderRecord, OrderUpdate};
use tracing::{debug, trace};

impl OrderBook {
    /// Adds a single order to the book.
    ///
    /// # Errors
    /// Returns [`OrderBookError::DuplicateId`] if an order with the same id is
    /// already resting; the book is left unchanged.
    pub fn add(&mut self, order: Order) -> Result<(), OrderBookError> {
        if self.by_id.contains_key(&order.id()) {
            debug!("Rejecting order {}: id already in book", order.id());
            return Err(OrderBookError::DuplicateId(order.id()));
        }
        trace!(
            "Adding order {} {} {} {}",
            order.id(),
            order.side(),
            order.price(),
            order.volume()
        );
        self.place_order(order);
        Ok(())
    }

    /// Adds `orders` one by one, each at the end of its price bucket.
    ///
    /// Insertion is incremental: when an order is rejected, the orders before
    /// it in the same call stay in the book and the ones after it are not
    /// inserted.
    ///
    /// # Errors
    /// Returns [`OrderBookError::DuplicateId`] for the first order whose id is
    /// already resting.
    pub fn append<I>(&mut self, orders: I) -> Result<(), OrderBookError>
    where
        I: IntoIterator<Item = Order>,
    {
        for order in orders {
            self.add(order)?;
        }
        Ok(())
    }

    /// Returns the resting order with `id`.
    ///
    /// The reference points at the live order, so it always reflects the
    /// latest successful [`update`](Self::update).
    #[inline]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.by_id.get(&id).map(|&slot| &self.orders[slot])
    }

    /// Returns the flat record of the order with `id`.
    pub fn get_as_record(&self, id: OrderId) -> Option<OrderRecord> {
        self.get(id).map(Order::to_record)
    }

    /// Removes the order with `id` from both indexes and returns it.
    ///
    /// Removing an id that is not in the book is a no-op returning `None`.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let slot = self.by_id.remove(&id)?;
        let order = self.orders.try_remove(slot)?;
        self.unlink_from_price(slot, order.price());
        trace!("Removed order {} at price {}", id, order.price());
        Some(order)
    }

    /// Applies `updates` to the order with `id`.
    ///
    /// Returns `Ok(None)` when no such order is resting. A price change moves
    /// the order to the back of its new price bucket; an update that leaves
    /// the price as it was keeps the order's position.
    ///
    /// # Errors
    /// Returns [`OrderBookError::InvalidArgument`] if any value is zero; the
    /// order and both indexes are left unchanged.
    pub fn update(
        &mut self,
        id: OrderId,
        updates: &[OrderUpdate],
    ) -> Result<Option<&Order>, OrderBookError> {
        let Some(&slot) = self.by_id.get(&id) else {
            trace!("Update ignored: order {} not found", id);
            return Ok(None);
        };

        let old_price = self.orders[slot].price();
        let new_price = self.orders[slot].update(updates)?.price();
        trace!("Updated order {} with {:?}", id, updates);

        if new_price != old_price {
            self.unlink_from_price(slot, old_price);
            self.by_price.entry(new_price).or_default().push(slot);
            debug!(
                "Relocated order {} from price {} to {}",
                id, old_price, new_price
            );
        }

        Ok(Some(&self.orders[slot]))
    }
}
