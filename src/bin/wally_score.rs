use anyhow::Result;
use dotenv::dotenv;
use std::collections::BTreeMap;
use wally::{calculate_wally_score, init_logger, ProductData, UserData};

#[macro_use]
extern crate log;

fn main() -> Result<()> {
    // read .env
    dotenv().ok();
    init_logger();

    // sample inputs until real user and product data is wired in
    let user_data = UserData {
        user_id: 1,
        interactions: vec![5, 3, 4],
    };
    let product_data = ProductData {
        product_id: 101,
        attributes: BTreeMap::from([
            ("quality".to_string(), 4),
            ("price".to_string(), 3),
            ("popularity".to_string(), 5),
        ]),
    };
    debug!(
        "user_data: {}, product_data: {}",
        serde_json::to_string(&user_data)?,
        serde_json::to_string(&product_data)?
    );

    let wally_score = calculate_wally_score(&user_data, &product_data);
    println!("Wally Score: {}", wally_score);

    Ok(())
}
