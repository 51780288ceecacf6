pub mod catalog;
pub mod matching;
pub mod vectorize;

use self::catalog::{Product, CATALOG};
use self::matching::match_top_n;
use self::vectorize::TfidfVectorizer;
use anyhow::Result;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation {
    /// Row of the product in the catalog it was ranked from.
    pub position: usize,
    pub product: Product,
    pub similarity: f64,
}

/// Catalog descriptions vectorized once, with every pairwise similarity.
pub struct Recommender {
    products: Vec<Product>,
    vectorizer: TfidfVectorizer,
    similarities: Vec<Vec<f64>>,
}

impl Recommender {
    pub fn new(products: &[Product]) -> Result<Self> {
        let descriptions = products
            .iter()
            .map(|p| p.description.as_str())
            .collect::<Vec<_>>();
        let mut vectorizer = TfidfVectorizer::new();
        let rows = vectorizer.fit_transform(&descriptions)?;
        let similarities = pairwise_cosine_similarity(&rows);
        info!(
            "recommender init, products: {}, vocabulary: {}",
            products.len(),
            vectorizer.vocabulary_size()
        );

        Ok(Self {
            products: products.to_vec(),
            vectorizer,
            similarities,
        })
    }

    /// Up to `n` other products, most similar description first.
    pub fn recommend(&self, product_id: i64, n: usize) -> Result<Vec<Recommendation>> {
        let index = Product::position(&self.products, product_id)
            .ok_or_else(|| anyhow::anyhow!("product id {} not found in catalog", product_id))?;

        let recommendations = match_top_n(&self.similarities[index], index, n)
            .into_iter()
            .map(|m| Recommendation {
                position: m.index,
                product: self.products[m.index].clone(),
                similarity: m.similarity,
            })
            .collect::<Vec<_>>();
        info!(
            "recommend for product {}: {:?}",
            product_id,
            recommendations
                .iter()
                .map(|r| r.product.id)
                .collect::<Vec<_>>()
        );

        Ok(recommendations)
    }

    pub fn similarity_matrix(&self) -> &[Vec<f64>] {
        &self.similarities
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Recommendations from the built-in catalog, recomputed on every call.
pub fn generate_recommendations(product_id: i64, n: usize) -> Result<Vec<Recommendation>> {
    Recommender::new(&CATALOG)?.recommend(product_id, n)
}

/// `id` / `title` table, labelled by catalog row, columns right-aligned.
pub fn render_table(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return "Empty DataFrame\nColumns: [id, title]\nIndex: []".to_string();
    }

    let rows = recommendations
        .iter()
        .map(|r| {
            [
                r.position.to_string(),
                r.product.id.to_string(),
                r.product.title.clone(),
            ]
        })
        .collect::<Vec<_>>();
    let header = [String::new(), "id".to_string(), "title".to_string()];
    let widths = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(widths.iter())
                .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn magnitude(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Zero vectors are orthogonal to everything.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mag_a = magnitude(a);
    let mag_b = magnitude(b);
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot_product(a, b) / (mag_a * mag_b)
}

/// Upper triangle computed once and mirrored, so the matrix is exactly symmetric.
pub fn pairwise_cosine_similarity(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = rows.len();
    let mut similarities = vec![vec![0f64; n]; n];
    for i in 0..n {
        for j in i..n {
            let similarity = cosine_similarity(&rows[i], &rows[j]);
            similarities[i][j] = similarity;
            similarities[j][i] = similarity;
        }
    }
    similarities
}
