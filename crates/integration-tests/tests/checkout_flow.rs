//! Checkout round trips over HTTP, with the session cookie carrying state.

use quickbite_integration_tests::TestServer;
use serde_json::{Value, json};

async fn add(server: &TestServer, item_id: &str, quantity: u32) -> Value {
    let (status, body) = server
        .post(
            "/api/checkout/items",
            &json!({ "itemId": item_id, "quantity": quantity }),
        )
        .await;
    assert_eq!(status, 200, "{body}");
    body
}

async fn advance(server: &TestServer) -> (u16, Value) {
    server.post("/api/checkout/advance", &json!({})).await
}

#[tokio::test]
async fn test_full_checkout() {
    let server = TestServer::spawn().await;

    let (_, body) = server.get("/api/checkout").await;
    assert_eq!(body["view"], "empty_cart");

    add(&server, "101", 1).await;
    add(&server, "301", 2).await;
    server
        .put(
            "/api/checkout/items/301/instructions",
            &json!({ "text": "Extra cheese please" }),
        )
        .await;
    server
        .put("/api/checkout/note", &json!({ "text": "Leave at the door" }))
        .await;

    let (_, body) = advance(&server).await;
    assert_eq!(body["step"], "delivery");
    assert_eq!(body["canAdvance"], true);

    let (_, body) = server
        .put("/api/checkout/address", &json!({ "addressId": "2" }))
        .await;
    assert_eq!(body["selectedAddressId"], "2");

    let (_, body) = advance(&server).await;
    assert_eq!(body["step"], "payment");
    assert_eq!(body["stepNumber"], 3);

    server
        .put("/api/checkout/payment", &json!({ "method": "cash" }))
        .await;

    let (status, body) = server.post("/api/checkout/submit", &json!({})).await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["redirect"], "/order-confirmation");

    let order = &body["order"];
    assert_eq!(order["address"]["label"], "Work");
    assert_eq!(order["paymentMethod"], "cash");
    assert_eq!(order["orderNote"], "Leave at the door");
    assert_eq!(
        order["lineItems"][1]["specialInstructions"],
        "Extra cheese please"
    );
    assert_eq!(order["pricing"]["subtotal"], "40.97");
    assert_eq!(order["pricing"]["total"], "47.24");

    // Cart is gone; address and payment choices carry over.
    let (_, body) = server.get("/api/checkout").await;
    assert_eq!(body["view"], "empty_cart");

    let body = add(&server, "102", 1).await;
    assert_eq!(body["step"], "cart");
    assert_eq!(body["selectedAddressId"], "2");
    assert_eq!(body["paymentMethod"], "cash");
    assert_eq!(body["orderNote"], "");
}

#[tokio::test]
async fn test_below_minimum_then_accepted() {
    let server = TestServer::spawn().await;

    add(&server, "401", 1).await;
    advance(&server).await;
    advance(&server).await;

    let (status, body) = server.post("/api/checkout/submit", &json!({})).await;
    assert_eq!(status, 422);
    assert_eq!(body["message"], "Minimum order for Pizza Palace is $10.00");

    // Nothing changed, so the customer can top up and retry from payment.
    let (_, body) = server.get("/api/checkout").await;
    assert_eq!(body["step"], "payment");

    add(&server, "204", 1).await;
    let (status, body) = server.post("/api/checkout/submit", &json!({})).await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["order"]["pricing"]["subtotal"], "20.98");
}

#[tokio::test]
async fn test_back_navigation() {
    let server = TestServer::spawn().await;
    add(&server, "501", 3).await;
    advance(&server).await;
    advance(&server).await;

    let (_, body) = server.post("/api/checkout/back", &json!({})).await;
    assert_eq!(body["step"], "delivery");
    let (_, body) = server.post("/api/checkout/back", &json!({})).await;
    assert_eq!(body["step"], "cart");
    let (status, body) = server.post("/api/checkout/back", &json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "exit": true, "redirect": "/restaurants" }));
}

#[tokio::test]
async fn test_visitors_have_separate_checkouts() {
    let server = TestServer::spawn().await;
    add(&server, "101", 2).await;

    let stranger = TestServer::new_client();
    let body: Value = stranger
        .get(server.url("/api/checkout"))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("JSON body");
    assert_eq!(body["view"], "empty_cart");

    let (_, body) = server.get("/api/checkout").await;
    assert_eq!(body["itemCount"], 2);
}

#[tokio::test]
async fn test_unknown_item_leaves_cart_alone() {
    let server = TestServer::spawn().await;
    let before = add(&server, "101", 1).await;

    let (status, _) = server
        .post("/api/checkout/items", &json!({ "itemId": "9001" }))
        .await;
    assert_eq!(status, 404);

    let (_, after) = server.get("/api/checkout").await;
    assert_eq!(before, after);
}
