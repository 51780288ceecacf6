use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: i64,
    pub interactions: Vec<i64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductData {
    pub product_id: i64,
    pub attributes: BTreeMap<String, i64>,
}

/// Wally Score for a user and a product.
///
/// Placeholder: both arguments are ignored and the result is an unseeded
/// uniform draw in `[0, 1)`. No scoring formula exists yet.
pub fn calculate_wally_score(user_data: &UserData, product_data: &ProductData) -> f64 {
    calculate_wally_score_with(&mut rand::thread_rng(), user_data, product_data)
}

/// Same placeholder, drawing from `rng`.
pub fn calculate_wally_score_with<R: Rng>(
    rng: &mut R,
    user_data: &UserData,
    product_data: &ProductData,
) -> f64 {
    debug!(
        "wally score: user: {}, product: {} (inputs unused)",
        user_data.user_id, product_data.product_id
    );
    rng.gen::<f64>()
}
