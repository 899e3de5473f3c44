//! Category - Closed set of product categories

use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Product category
///
/// Adding a variant changes the external contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Beverage,
    Other,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Food, Category::Beverage, Category::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Beverage => "beverage",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "food" => Ok(Category::Food),
            "beverage" => Ok(Category::Beverage),
            "other" => Ok(Category::Other),
            _ => Err(ValidationError::InvalidCategory(s.to_string())),
        }
    }
}
