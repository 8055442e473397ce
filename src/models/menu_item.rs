use crate::core::error::Error;
use crate::core::types::{ItemClass, ItemKind};
use crate::utils::format_price;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A purchasable menu item
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    kind: ItemKind,
    name: String,
    price: f64,
    image: String,
    description: String,
    category: String,
}

/// Stored form of a menu item inside a cart record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRecord {
    /// Variant tag ("FoodItem", "DrinkItem", "MenuItem"); older carts call it `type`
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub variant_kind: Option<String>,
    /// Name of the item
    pub name: String,
    /// Price in EGP
    pub price: f64,
    /// Image URL
    pub image: String,
    /// Description, empty when missing
    #[serde(default)]
    pub description: String,
    /// Grouping tag such as "appetizers", empty when missing
    #[serde(default)]
    pub category: String,
}

impl MenuItem {
    /// Creates a new MenuItem with required fields
    pub fn new(kind: ItemKind, name: &str, price: f64, image: &str) -> Self {
        debug_assert!(is_valid_price(price), "invalid price {} for {}", price, name);
        Self {
            kind,
            name: name.to_string(),
            price,
            image: image.to_string(),
            description: String::new(),
            category: String::new(),
        }
    }

    /// Creates a food item
    pub fn food(name: &str, price: f64, image: &str) -> Self {
        Self::new(ItemKind::Food, name, price, image)
    }

    /// Creates a drink item
    pub fn drink(name: &str, price: f64, image: &str) -> Self {
        Self::new(ItemKind::Drink, name, price, image)
    }

    /// Sets the description of the item
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Sets the grouping category of the item
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Grouping tag, independent of [`MenuItem::class`]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Food or drink, derived from the kind
    pub fn class(&self) -> ItemClass {
        ItemClass::from(self.kind)
    }

    /// Human-readable line, e.g. `Hummus - 45 EGP (Served Hot)`
    pub fn display_info(&self) -> String {
        self.to_string()
    }

    /// Converts the item to its stored record
    pub fn to_record(&self) -> MenuItemRecord {
        MenuItemRecord {
            variant_kind: Some(self.kind.as_str().to_string()),
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
        }
    }

    /// Rebuilds an item from a stored record. Unknown or missing tags give a plain item.
    ///
    /// Negative or non-finite prices are rejected.
    pub fn from_record(record: MenuItemRecord) -> Result<Self> {
        if !is_valid_price(record.price) {
            return Err(Error::InvalidData(format!(
                "Invalid price {} for {}",
                record.price, record.name
            )));
        }

        let kind = record
            .variant_kind
            .as_deref()
            .and_then(ItemKind::from_str)
            .unwrap_or(ItemKind::Plain);

        Ok(Self {
            kind,
            name: record.name,
            price: record.price,
            image: record.image,
            description: record.description,
            category: record.category,
        })
    }
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, format_price(self.price))?;
        if let Some(suffix) = self.kind.display_suffix() {
            write!(f, " ({})", suffix)?;
        }
        Ok(())
    }
}
