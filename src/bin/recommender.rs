use anyhow::Result;
use dotenv::dotenv;
use wally::{generate_recommendations, init_logger, render_table};

#[macro_use]
extern crate log;

const PRODUCT_ID: i64 = 1;
const NUM_RECOMMENDATIONS: usize = 2;

fn main() -> Result<()> {
    // read .env
    dotenv().ok();
    init_logger();

    let recommendations = generate_recommendations(PRODUCT_ID, NUM_RECOMMENDATIONS)?;
    info!(
        "product {} got {} recommendations",
        PRODUCT_ID,
        recommendations.len()
    );

    println!("Recommended Products:");
    println!("{}", render_table(&recommendations));

    Ok(())
}
