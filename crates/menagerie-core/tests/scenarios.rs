//! End-to-end pricing scenarios through the public API.

use menagerie_core::{AnimalKind, CoreError, Order};

fn total_of(items: &[(AnimalKind, i64)]) -> i64 {
    let mut order = Order::new();
    for &(kind, qty) in items {
        order.register(kind, qty).unwrap();
    }
    order.total().unwrap().units()
}

#[test]
fn test_single_cat() {
    assert_eq!(total_of(&[(AnimalKind::Cat, 1)]), 10);
}

#[test]
fn test_reference_order() {
    let total = total_of(&[
        (AnimalKind::Cat, 1),
        (AnimalKind::Dog, 2),
        (AnimalKind::Lion, 1),
        (AnimalKind::Wolf, 2),
    ]);
    assert_eq!(total, 550);
}

#[test]
fn test_reference_order_reordered() {
    let total = total_of(&[
        (AnimalKind::Wolf, 2),
        (AnimalKind::Cat, 1),
        (AnimalKind::Dog, 2),
        (AnimalKind::Lion, 1),
    ]);
    assert_eq!(total, 550);
}

#[test]
fn test_empty_order() {
    assert_eq!(total_of(&[]), 0);
}

#[test]
fn test_one_of_each() {
    let items: Vec<_> = AnimalKind::ALL.into_iter().map(|k| (k, 1)).collect();
    assert_eq!(total_of(&items), 330);
}

#[test]
fn test_bad_line_stops_registration() {
    let mut order = Order::new();
    order.register(AnimalKind::Cat, 1).unwrap();

    let err = order.register(AnimalKind::Dog, 0).unwrap_err();
    assert_eq!(err, CoreError::InvalidQuantity { quantity: 0 });
    assert_eq!(order.total().unwrap().units(), 10);
}
