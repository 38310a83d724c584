//! Static furniture catalog backing search and recommendations

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Product as exposed by the catalog endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: i64,
    pub name: String,
    /// Price in Rupiah
    pub price: u64,
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
}

/// Filters accepted by product search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub max_price: Option<String>,
}

/// Hints accepted by the recommendation endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationQuery {
    pub budget: Option<String>,
    pub style: Option<String>,
    pub room: Option<String>,
}

/// Fixed product list; no database behind it
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<ProductInfo>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_products())
    }
}

impl Catalog {
    pub fn new(products: Vec<ProductInfo>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[ProductInfo] {
        &self.products
    }

    pub fn get(&self, id: i64) -> Option<&ProductInfo> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching the text query and/or category, optionally capped by price
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<ProductInfo>> {
        let text = non_blank(&query.q).map(str::to_lowercase);
        let category = non_blank(&query.category).map(str::to_lowercase);

        if text.is_none() && category.is_none() {
            return Err(GatewayError::validation(
                "Query or category parameter required",
            ));
        }

        let max_price = parse_price("max_price", &query.max_price)?;

        Ok(self
            .products
            .iter()
            .filter(|p| text.as_deref().is_none_or(|t| p.matches_text(t)))
            .filter(|p| {
                category
                    .as_deref()
                    .is_none_or(|c| p.category.to_lowercase() == c)
            })
            .filter(|p| max_price.is_none_or(|max| p.price <= max))
            .cloned()
            .collect())
    }

    /// Products within the budget, if one is given; style and room are echoed only
    pub fn recommend(&self, query: &RecommendationQuery) -> Result<Vec<ProductInfo>> {
        let budget = parse_price("budget", &query.budget)?;

        Ok(self
            .products
            .iter()
            .filter(|p| budget.is_none_or(|max| p.price <= max))
            .cloned()
            .collect())
    }
}

impl ProductInfo {
    fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .features
                .iter()
                .any(|f| f.to_lowercase().contains(needle))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_price(name: &str, value: &Option<String>) -> Result<Option<u64>> {
    non_blank(value)
        .map(|raw| {
            raw.parse::<u64>().map_err(|_| {
                GatewayError::validation(format!("{} must be a non-negative integer", name))
            })
        })
        .transpose()
}

fn product(
    id: i64,
    name: &str,
    price: u64,
    category: &str,
    description: &str,
    features: &[&str],
) -> ProductInfo {
    ProductInfo {
        id,
        name: name.to_string(),
        price,
        category: category.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn default_products() -> Vec<ProductInfo> {
    vec![
        product(
            1,
            "Sofa Modern Minimalis",
            4_500_000,
            "Sofa",
            "Sofa modern dengan desain minimalis",
            &["ergonomis", "mudah dibersihkan", "tahan lama"],
        ),
        product(
            2,
            "Kursi Kerja Executive",
            2_800_000,
            "Kursi",
            "Kursi kerja dengan sandaran tinggi dan penyangga lumbar",
            &["ergonomis", "tinggi dapat diatur", "roda putar"],
        ),
        product(
            3,
            "Meja Makan Kayu Jati",
            6_200_000,
            "Meja",
            "Meja makan enam kursi dari kayu jati solid",
            &["kayu solid", "finishing natural", "tahan lama"],
        ),
        product(
            4,
            "Lemari Pakaian 3 Pintu",
            3_750_000,
            "Lemari",
            "Lemari pakaian tiga pintu dengan cermin",
            &["cermin", "rak gantung", "kunci pintu"],
        ),
        product(
            5,
            "Rak Buku Skandinavia",
            1_250_000,
            "Rak",
            "Rak buku lima tingkat bergaya Skandinavia",
            &["mudah dirakit", "hemat ruang"],
        ),
    ]
}
