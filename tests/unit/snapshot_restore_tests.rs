#[cfg(test)]
mod tests_snapshot_package {
    use limit_book::orderbook::DEPTH_SNAPSHOT_FORMAT_VERSION;
    use limit_book::{DepthSnapshotPackage, Order, OrderBook, OrderBookError};

    fn populate_order_book() -> OrderBook {
        OrderBook::from_orders([
            Order::bid(1, 10_000, 5).expect("bid"),
            Order::bid(2, 9_900, 7).expect("bid"),
            Order::ask(3, 10_100, 4).expect("ask"),
            Order::ask(4, 10_200, 6).expect("ask"),
        ])
        .expect("unique ids")
    }

    #[test]
    fn snapshot_package_json_round_trip() {
        let book = populate_order_book();
        let package = book.create_snapshot_package().expect("snapshot package");

        let json_payload = package.to_json().expect("serialize package");
        let restored = DepthSnapshotPackage::from_json(&json_payload).expect("parse package");
        let snapshot = restored.into_snapshot().expect("valid package");

        assert_eq!(snapshot, book.snapshot());
        assert_eq!(snapshot.best_bid(), Some((10_000, 5)));
        assert_eq!(snapshot.best_ask(), Some((10_100, 4)));
        assert_eq!(snapshot.spread(), Some(100));
    }

    #[test]
    fn package_rejects_checksum_mismatch() {
        let mut tampered = populate_order_book()
            .create_snapshot_package()
            .expect("snapshot package");
        tampered.checksum = "deadbeef".to_string();

        let err = tampered
            .validate()
            .expect_err("checksum mismatch should be detected");
        assert!(matches!(err, OrderBookError::ChecksumMismatch { .. }));
    }

    #[test]
    fn package_rejects_version_mismatch() {
        let mut package = populate_order_book()
            .create_snapshot_package()
            .expect("snapshot package");
        package.version = DEPTH_SNAPSHOT_FORMAT_VERSION + 1;

        let err = package
            .into_snapshot()
            .expect_err("version mismatch should be rejected");
        assert!(matches!(err, OrderBookError::UnsupportedVersion { .. }));
    }

    #[test]
    fn identical_books_share_a_checksum() {
        let first = populate_order_book().create_snapshot_package().expect("package");
        let second = populate_order_book().create_snapshot_package().expect("package");
        assert_eq!(first.checksum, second.checksum);
    }
}
