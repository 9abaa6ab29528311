use limit_book::{Order, OrderBook, OrderBookError, OrderUpdate, Side};

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds an order from untyped parts, the way an external request layer would.
    fn order_from_parts(id: u64, side: &str, price: u128, volume: u64) -> Result<Order, OrderBookError> {
        let side: Side = side.parse()?;
        Order::new(id, side, price, volume)
    }

    /// Builds update requests from named fields.
    fn updates_from_fields(fields: &[(&str, u128)]) -> Result<Vec<OrderUpdate>, OrderBookError> {
        fields.iter().map(|&pair| OrderUpdate::try_from(pair)).collect()
    }

    #[test]
    fn test_order_from_parts_accepts_valid_input() {
        let order = order_from_parts(10, "ASK", 50, 60).unwrap();
        assert_eq!(order.to_record().side, Side::Ask);
    }

    #[test]
    fn test_order_from_parts_rejects_invalid_input() {
        let cases = [
            (0, "BID", 2, 3),
            (1, "ask", 50, 60),
            (1, "SELL", 50, 60),
            (1, "ASK", 0, 60),
            (1, "BID", 10, 0),
        ];
        for (id, side, price, volume) in cases {
            assert!(
                matches!(
                    order_from_parts(id, side, price, volume),
                    Err(OrderBookError::InvalidArgument { .. })
                ),
                "({id}, {side}, {price}, {volume}) should be rejected"
            );
        }
    }

    #[test]
    fn test_named_updates_reject_immutable_fields() {
        let mut book = OrderBook::from_orders([Order::ask(1, 100, 11).unwrap()]).unwrap();

        let cases: [&[(&str, u128)]; 3] = [
            &[("id", 111)],
            &[("side", 1)],
            &[("volume", 5), ("type", 0)],
        ];
        for fields in cases {
            let err = updates_from_fields(fields).unwrap_err();
            assert!(matches!(err, OrderBookError::NotUpdatable { .. }));
        }

        // nothing reached the book
        assert_eq!(book.get(1).unwrap().volume(), 11);

        let updates = updates_from_fields(&[("price", 300), ("volume", 20)]).unwrap();
        let order = book.update(1, &updates).unwrap().unwrap();
        assert_eq!((order.price(), order.volume()), (300, 20));
    }

    #[test]
    fn test_named_updates_cover_full_value_range() {
        let mut book = OrderBook::from_orders([Order::bid(1, 100, 11).unwrap()]).unwrap();
        let high_price = u128::MAX - 1;

        let updates = updates_from_fields(&[("price", high_price)]).unwrap();
        book.update(1, &updates).unwrap();
        assert_eq!(book.get(1).unwrap().price(), high_price);
        assert_eq!(book.best_bid(), Some(high_price));

        let err = updates_from_fields(&[("volume", u128::from(u64::MAX) + 1)]).unwrap_err();
        assert!(matches!(
            err,
            OrderBookError::InvalidArgument { field: "volume", .. }
        ));
        assert_eq!(book.get(1).unwrap().volume(), 11);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Order::new(0, Side::Bid, 1, 1).unwrap_err().to_string(),
            "invalid id value: 0"
        );
        assert_eq!(
            "HOLD".parse::<Side>().unwrap_err().to_string(),
            "invalid side value: HOLD"
        );
        assert_eq!(
            OrderUpdate::try_from(("id", 1u128)).unwrap_err().to_string(),
            "field is not updatable: id"
        );
        assert_eq!(
            OrderBookError::DuplicateId(7).to_string(),
            "order 7 already exists"
        );
    }
}
