use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unique product code (cannot be empty)
    pub code: String,
    /// Free-form description; omitted or blank is stored as null
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Units in stock (non-negative integer)
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// New units in stock (non-negative integer)
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Store-assigned identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unique product code
    pub code: String,
    /// Description, null when not provided
    pub description: Option<String>,
    /// Units in stock
    pub quantity: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            code: product.code,
            description: product.description,
            quantity: product.quantity.value(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    /// All products ordered by name
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub product: ProductResponse,
}

/// Confirmation returned by update and delete.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct MutationResponse {
    pub message: String,
    pub affected_rows: u64,
}
