#[cfg(test)]
mod tests {
    use invalloc::io::export::export_solution;
    use invalloc::io::import::import_order;
    use invalloc::io::ext_repr::{ExtOrder, ExtQty, ExtSolution, ExtWarehouse};
    use invalloc::util::{AllocConfig, EmptyShipmentPolicy};
    use invalloc::{AllocError, Allocator, QtyOrigin};
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn parse_input(order: &str, offer: &str) -> (ExtOrder, Vec<ExtWarehouse>) {
        let order = serde_json::from_str(order).expect("invalid order json");
        let offer = serde_json::from_str(offer).expect("invalid offer json");
        (order, offer)
    }

    fn run(config: AllocConfig, order: &str, offer: &str) -> Result<ExtSolution, AllocError> {
        init_logger();
        let (order, offer) = parse_input(order, offer);
        Allocator::new(config)
            .solve(&order, &offer)
            .map(|solution| export_solution(&solution))
    }

    fn expected(solution: &str) -> ExtSolution {
        serde_json::from_str(solution).expect("invalid solution json")
    }

    #[test_case(r#"{}"#, r#"[]"#, r#"[]"#; "no input")]
    #[test_case(
        r#"{}"#,
        r#"[{"name": "a", "inventory": {"apple": 5, "orange": 5, "banana": 5}}]"#,
        r#"[]"#;
        "empty order"
    )]
    #[test_case(r#"{"apple": 2, "orange": 5}"#, r#"[]"#, r#"[]"#; "no warehouses")]
    #[test_case(
        r#"{"apple": 10}"#,
        r#"[{"name": "a", "inventory": {"beef": 10}}]"#,
        r#"[]"#;
        "order not in inventory"
    )]
    #[test_case(
        r#"{"apple": 10, "carrot": 1}"#,
        r#"[{"name": "a", "inventory": {"apple": 10, "beef": 10}},
            {"name": "b", "inventory": {"apple": 10, "onion": 10}}]"#,
        r#"[]"#;
        "one item not in any inventory"
    )]
    #[test_case(
        r#"{"apple": 2}"#,
        r#"[{"name": "a", "inventory": {"apple": 2}}]"#,
        r#"[{"a": {"apple": 2}}]"#;
        "exact match"
    )]
    #[test_case(
        r#"{"apple": 2, "orange": 5, "beef": 1}"#,
        r#"[{"name": "a", "inventory": {"apple": 2, "orange": 5, "beef": 1}}]"#,
        r#"[{"a": {"apple": 2, "orange": 5, "beef": 1}}]"#;
        "exact match multiple items"
    )]
    #[test_case(
        r#"{"apple": 10}"#,
        r#"[{"name": "a", "inventory": {"apple": 5}}, {"name": "b", "inventory": {"apple": 5}}]"#,
        r#"[{"a": {"apple": 5}}, {"b": {"apple": 5}}]"#;
        "split across warehouses"
    )]
    #[test_case(
        r#"{"bear": 3, "beets": 5, "battlestar": 1, "galatica": 2}"#,
        r#"[{"name": "a", "inventory": {"bear": 2, "galatica": 1}},
            {"name": "b", "inventory": {"beets": 5, "battlestar": 1}},
            {"name": "c", "inventory": {"bear": 5, "galatica": 1}}]"#,
        r#"[{"a": {"bear": 2, "galatica": 1}},
            {"b": {"beets": 5, "battlestar": 1}},
            {"c": {"bear": 1, "galatica": 1}}]"#;
        "split multiple items across warehouses"
    )]
    #[test_case(
        r#"{"apple": 2}"#,
        r#"[{"name": "a", "inventory": {"apple": 10}}]"#,
        r#"[{"a": {"apple": 2}}]"#;
        "leftover ignored"
    )]
    #[test_case(
        r#"{"apple": 2}"#,
        r#"[{"name": "a", "inventory": {"beets": 10, "broccoli": 2, "apple": 2}}]"#,
        r#"[{"a": {"apple": 2}}]"#;
        "unrequested items ignored"
    )]
    #[test_case(
        r#"{"apple": 10}"#,
        r#"[{"name": "a", "inventory": {"apple": 1}}]"#,
        r#"[]"#;
        "not enough inventory"
    )]
    #[test_case(
        r#"{"apple": 10}"#,
        r#"[{"name": "a", "inventory": {"apple": 5}}, {"name": "b", "inventory": {"apple": 4}}]"#,
        r#"[]"#;
        "not enough inventory across warehouses"
    )]
    #[test_case(
        r#"{"apple": 10, "beets": 5, "banana": 6}"#,
        r#"[{"name": "a", "inventory": {"apple": 1, "banana": 3}},
            {"name": "b", "inventory": {"apple": 10, "beets": 4}},
            {"name": "c", "inventory": {"banana": 5}}]"#,
        r#"[]"#;
        "one item short among several"
    )]
    #[test_case(
        r#"{"apple": 0}"#,
        r#"[{"name": "a", "inventory": {"apple": 10}}]"#,
        r#"[]"#;
        "zero order"
    )]
    #[test_case(
        r#"{"apple": 0, "bee": 1}"#,
        r#"[{"name": "a", "inventory": {"apple": 10, "bee": 2}}]"#,
        r#"[{"a": {"bee": 1}}]"#;
        "zero item in order"
    )]
    #[test_case(
        r#"{"apple": 10}"#,
        r#"[{"name": "a", "inventory": {"apple": 0}}]"#,
        r#"[]"#;
        "warehouse with zero stock"
    )]
    #[test_case(
        r#"{"apple": 0}"#,
        r#"[{"name": "a", "inventory": {"apple": 0}}]"#,
        r#"[]"#;
        "zero order and zero stock"
    )]
    #[test_case(
        r#"{"apple": 5, "banana": 5}"#,
        r#"[{"name": "a", "inventory": {"apple": 5}},
            {"name": "b", "inventory": {"banana": 5}},
            {"name": "c", "inventory": {"apple": 5, "banana": 5}}]"#,
        r#"[{"a": {"apple": 5}}, {"b": {"banana": 5}}]"#;
        "cheapest warehouses first, no backtracking"
    )]
    #[test_case(
        r#"{"apple": 1}"#,
        r#"[{"name": "a", "inventory": {"apple": 0}}, {"name": "b", "inventory": {"apple": 1}}]"#,
        r#"[{"b": {"apple": 1}}]"#;
        "warehouse without stock suppressed"
    )]
    #[test_case(
        r#"{"apple": 3}"#,
        r#"[{"name": "a", "inventory": {"apple": 2}}, {"name": "a", "inventory": {"apple": 2}}]"#,
        r#"[{"a": {"apple": 2}}, {"a": {"apple": 1}}]"#;
        "duplicate warehouse names"
    )]
    #[test_case(
        r#"{"apple": 1}"#,
        r#"[{"name": "a"}, {"name": "b", "inventory": {"apple": 1}}]"#,
        r#"[{"b": {"apple": 1}}]"#;
        "warehouse without inventory"
    )]
    fn test_solve(order: &str, offer: &str, solution: &str) {
        let result = run(AllocConfig::default(), order, offer).expect("solve failed");
        assert_eq!(result, expected(solution));
    }

    #[test_case(
        r#"{"apple": 1}"#,
        r#"[{"name": "a", "inventory": {"apple": 0}}, {"name": "b", "inventory": {"apple": 1}}]"#,
        r#"[{"a": {}}, {"b": {"apple": 1}}]"#;
        "warehouse without stock emitted"
    )]
    #[test_case(
        r#"{"apple": 1}"#,
        r#"[{"name": "a", "inventory": {"pear": 3}}, {"name": "b", "inventory": {"apple": 1}}]"#,
        r#"[{"b": {"apple": 1}}]"#;
        "warehouse without overlap skipped"
    )]
    #[test_case(
        r#"{"apple": 1}"#,
        r#"[{"name": "a", "inventory": {"apple": 1}}, {"name": "b", "inventory": {"apple": 0}}]"#,
        r#"[{"a": {"apple": 1}}]"#;
        "warehouses after fulfillment untouched"
    )]
    #[test_case(
        r#"{"apple": 2}"#,
        r#"[{"name": "a", "inventory": {"apple": 0}}, {"name": "b", "inventory": {"apple": 1}}]"#,
        r#"[]"#;
        "empty shipments do not save an unfulfillable order"
    )]
    fn test_solve_emit_empty_shipments(order: &str, offer: &str, solution: &str) {
        let config = AllocConfig {
            empty_shipments: EmptyShipmentPolicy::Emit,
        };
        let result = run(config, order, offer).expect("solve failed");
        assert_eq!(result, expected(solution));
    }

    #[test_case(
        r#"{"apple": 10}"#,
        r#"[{"name": "a", "inventory": {"apple": -5}}]"#,
        "apple", ExtQty::Signed(-5), QtyOrigin::Warehouse("a".into());
        "negative stock"
    )]
    #[test_case(
        r#"{"apple": -10}"#,
        r#"[{"name": "a", "inventory": {"apple": 5}}]"#,
        "apple", ExtQty::Signed(-10), QtyOrigin::Order;
        "negative order"
    )]
    #[test_case(
        r#"{"apple": 0.01}"#,
        r#"[{"name": "a", "inventory": {"apple": 100}}]"#,
        "apple", ExtQty::Real(0.01), QtyOrigin::Order;
        "fractional order"
    )]
    #[test_case(
        r#"{"apple": 2.0}"#,
        r#"[{"name": "a", "inventory": {"apple": 100}}]"#,
        "apple", ExtQty::Real(2.0), QtyOrigin::Order;
        "order with real number"
    )]
    #[test_case(
        r#"{"apple": 1}"#,
        r#"[{"name": "a", "inventory": {"apple": 1}}, {"name": "b", "inventory": {"pear": 1.5}}]"#,
        "pear", ExtQty::Real(1.5), QtyOrigin::Warehouse("b".into());
        "fractional stock in unused warehouse"
    )]
    #[test_case(
        r#"{"apple": 0}"#,
        r#"[{"name": "a", "inventory": {"apple": -1}}]"#,
        "apple", ExtQty::Signed(-1), QtyOrigin::Warehouse("a".into());
        "negative stock with empty order"
    )]
    fn test_invalid_quantity(order: &str, offer: &str, item: &str, value: ExtQty, origin: QtyOrigin) {
        let result = run(AllocConfig::default(), order, offer);
        assert_eq!(
            result,
            Err(AllocError::InvalidQuantity {
                item: item.to_string(),
                value,
                origin,
            })
        );
    }

    #[test]
    fn test_invalid_quantity_among_valid_ones() {
        let result = run(
            AllocConfig::default(),
            r#"{"apple": 0.01, "beet": 1.5}"#,
            r#"[{"name": "a", "inventory": {"apple": 100, "beet": 1}}]"#,
        );
        assert!(matches!(result, Err(AllocError::InvalidQuantity { .. })));
    }

    #[test]
    fn test_invalid_quantity_message() {
        let err = AllocError::InvalidQuantity {
            item: "apple".into(),
            value: ExtQty::Signed(-5),
            origin: QtyOrigin::Warehouse("a".into()),
        };
        assert_eq!(
            err.to_string(),
            "invalid quantity -5 for item \"apple\" in inventory of warehouse \"a\", quantities must be non-negative integers"
        );
    }

    #[test]
    fn test_solve_free_function() {
        let (order, offer) = parse_input(
            r#"{"apple": 10}"#,
            r#"[{"name": "a", "inventory": {"apple": 5}}, {"name": "b", "inventory": {"apple": 5}}]"#,
        );
        let solution = invalloc::solve(&order, &offer).expect("solve failed");
        assert_eq!(solution.n_shipments(), 2);
        assert_eq!(solution.shipped_qty("apple"), 10);
        assert_eq!(solution.warehouse_names().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test_case(
        r#"{"a": 18446744073709551615, "b": 1}"#,
        r#"[{"name": "w", "inventory": {"a": 18446744073709551615, "b": 1}}]"#;
        "single warehouse"
    )]
    #[test_case(
        r#"{"a": 18446744073709551615, "b": 18446744073709551615}"#,
        r#"[{"name": "v", "inventory": {"a": 18446744073709551615}}, {"name": "w", "inventory": {"b": 18446744073709551615}}]"#;
        "split over warehouses"
    )]
    fn test_solve_huge_quantities(order: &str, offer: &str) {
        init_logger();
        let (order, offer) = parse_input(order, offer);
        let solution = invalloc::solve(&order, &offer).expect("solve failed");
        assert_eq!(solution.shipped_qty("a"), u64::MAX);
        assert_eq!(solution.n_units(), u64::MAX);
        let imported = import_order(&order).expect("import failed");
        assert_eq!(imported.total_qty(), u64::MAX);
        assert!(solution.fulfills(&imported));
    }

    #[test]
    fn test_solve_leaves_input_untouched() {
        let (order, offer) = parse_input(
            r#"{"apple": 3, "pear": 0}"#,
            r#"[{"name": "a", "inventory": {"apple": 2}}, {"name": "b", "inventory": {"apple": 2}}]"#,
        );
        let (order_before, offer_before) = (order.clone(), offer.clone());
        let first = invalloc::solve(&order, &offer).expect("solve failed");
        let second = invalloc::solve(&order, &offer).expect("solve failed");
        assert_eq!(order, order_before);
        assert_eq!(offer, offer_before);
        assert_eq!(first, second);
    }
}
