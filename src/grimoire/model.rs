use serde::{Deserialize, Serialize};
use std::fmt;

/// Display-only cost of a card. Datasets mix plain numbers ("2") with
/// free-form text ("1 Speranza"), so both shapes are kept as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Number(n) => write!(f, "{}", n),
            Cost::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Cost {
    fn from(n: i64) -> Self {
        Cost::Number(n.into())
    }
}

impl From<&str> for Cost {
    fn from(s: &str) -> Self {
        Cost::Text(s.to_string())
    }
}

/// One catalog record. Cards are loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(alias = "dominio")]
    pub domain: String,
    #[serde(alias = "livello")]
    pub level: i64,
    #[serde(alias = "categoria")]
    pub category: String,
    #[serde(alias = "costo")]
    pub cost: Cost,
    #[serde(alias = "titolo")]
    pub title: String,
    #[serde(alias = "descrizione")]
    pub description: String,
}

impl Card {
    /// Builds a card with empty display-only fields.
    pub fn new(
        id: impl Into<String>,
        domain: impl Into<String>,
        level: i64,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            domain: domain.into(),
            level,
            category: String::new(),
            cost: Cost::from(0),
            title: title.into(),
            description: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_cost(mut self, cost: impl Into<Cost>) -> Self {
        self.cost = cost.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
