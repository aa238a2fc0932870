//! Walk through the catalog API against a running server.
//!
//! ```text
//! API_KEY=secret cargo run -p catalog-server
//! API_KEY=secret cargo run -p catalog-server --example api_client
//! ```

use reqwest::Client;
use serde_json::{json, Value};

const SERVER_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_key = std::env::var("API_KEY").unwrap_or_else(|_| "secret".to_string());
    let client = Client::new();

    // Example 1: Welcome text (no key needed)
    println!("1. Welcome:");
    let resp = client.get(format!("{SERVER_URL}/")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Missing key is rejected
    println!("2. Request Without API Key:");
    let resp = client.get(format!("{SERVER_URL}/api/products")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Filtered listing
    println!("3. Electronics From 900:");
    let resp = client
        .get(format!("{SERVER_URL}/api/products"))
        .header("x-api-key", &api_key)
        .query(&[("category", "electronics"), ("minPrice", "900")])
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Create
    println!("4. Create Product:");
    let resp = client
        .post(format!("{SERVER_URL}/api/products"))
        .header("x-api-key", &api_key)
        .json(&json!({
            "name": "Desk Lamp",
            "description": "LED lamp with dimmer",
            "price": 35,
            "category": "home",
            "inStock": true
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let created: Value = resp.json().await?;
    println!("Body: {created}");
    println!();

    let id = created["id"].as_str().unwrap_or_default().to_string();

    // Example 5: Invalid payload
    println!("5. Create With Zero Price:");
    let resp = client
        .post(format!("{SERVER_URL}/api/products"))
        .header("x-api-key", &api_key)
        .json(&json!({
            "name": "Freebie",
            "description": "Costs nothing",
            "price": 0,
            "category": "home",
            "inStock": true
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 6: Full replace
    println!("6. Replace Product:");
    let resp = client
        .put(format!("{SERVER_URL}/api/products/{id}"))
        .header("x-api-key", &api_key)
        .json(&json!({
            "name": "Desk Lamp Pro",
            "description": "LED lamp with dimmer and USB port",
            "price": 49.5,
            "category": "home",
            "inStock": false
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 7: Delete twice
    println!("7. Delete Product Twice:");
    for _ in 0..2 {
        let resp = client
            .delete(format!("{SERVER_URL}/api/products/{id}"))
            .header("x-api-key", &api_key)
            .send()
            .await?;
        println!("Status: {}", resp.status());
        println!("Body: {}", resp.text().await?);
    }

    Ok(())
}
