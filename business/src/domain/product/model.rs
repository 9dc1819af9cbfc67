use super::errors::ProductError;
use super::value_objects::{ProductId, Quantity};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub quantity: Quantity,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        code: String,
        description: Option<String>,
        quantity: Quantity,
    ) -> Self {
        Self {
            id,
            name,
            code,
            description,
            quantity,
        }
    }
}

pub struct NewProductProps {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub quantity: i64,
}

/// A validated product that has not been stored yet, so it carries no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub quantity: Quantity,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let name = props.name.trim();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let code = props.code.trim();
        if code.is_empty() {
            return Err(ProductError::CodeEmpty);
        }

        let quantity = Quantity::new(props.quantity)?;

        // A blank description is stored as NULL, same as an omitted one.
        let description = props
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            name: name.to_string(),
            code: code.to_string(),
            description,
            quantity,
        })
    }
}
