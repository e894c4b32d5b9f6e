use sports_store::core::CartProvider;
use sports_store::{Cart, Money, Product, ProductId, SessionCarts, SessionId};
use std::sync::Arc;

fn product(id: u64, name: &str, price: &str) -> Arc<Product> {
    Arc::new(Product {
        id: ProductId(id),
        name: name.to_string(),
        description: String::new(),
        category: "Test".to_string(),
        price: price.parse().unwrap(),
    })
}

fn lines(cart: &Cart) -> Vec<(&str, i32)> {
    cart.lines()
        .iter()
        .map(|line| (line.product.name.as_str(), line.quantity))
        .collect()
}

#[test]
fn test_documented_shopping_scenario() {
    let a = product(1, "ProductA", "19.99");
    let b = product(2, "ProductB", "5.00");
    let mut cart = Cart::new();

    cart.add_item(Arc::clone(&a), 2);
    assert_eq!(lines(&cart), vec![("ProductA", 2)]);
    assert_eq!(cart.compute_total_value(), "39.98".parse::<Money>().unwrap());

    cart.add_item(Arc::clone(&a), 1);
    assert_eq!(lines(&cart), vec![("ProductA", 3)]);
    assert_eq!(cart.compute_total_value(), "59.97".parse::<Money>().unwrap());

    cart.add_item(b, 1);
    assert_eq!(lines(&cart), vec![("ProductA", 3), ("ProductB", 1)]);
    assert_eq!(cart.compute_total_value(), "64.97".parse::<Money>().unwrap());

    cart.remove_line(&a);
    assert_eq!(lines(&cart), vec![("ProductB", 1)]);
    assert_eq!(cart.compute_total_value(), "5.00".parse::<Money>().unwrap());

    cart.clear();
    assert!(lines(&cart).is_empty());
    assert_eq!(cart.compute_total_value(), Money::zero());
}

#[test]
fn test_total_has_no_rounding_drift() {
    let mut cart = Cart::new();
    // 0.10 summed a thousand times drifts in binary floating point.
    for id in 1..=1000 {
        cart.add_item(product(id, "Dime", "0.10"), 1);
    }
    assert_eq!(cart.compute_total_value().to_string(), "100.00");
}

#[test]
fn test_cart_does_not_mutate_products() {
    let kayak = product(1, "Kayak", "275.00");
    let mut cart = Cart::new();
    cart.add_item(Arc::clone(&kayak), 5);

    assert_eq!(kayak.price, Money::from_cents(27500));
    assert!(Arc::ptr_eq(&cart.lines()[0].product, &kayak));
}

#[test]
fn test_session_cart_survives_between_requests() {
    tokio_test::block_on(async {
        let carts = SessionCarts::new();
        let session = SessionId::new("session-1");

        for _ in 0..2 {
            let cart = carts.cart_for(&session).await;
            cart.lock().await.add_item(product(1, "Kayak", "275.00"), 1);
        }

        let cart = carts.cart_for(&session).await;
        let cart = cart.lock().await;
        assert_eq!(lines(&cart), vec![("Kayak", 2)]);
        assert_eq!(cart.compute_total_value().to_string(), "550.00");
    });
}
