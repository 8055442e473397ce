//! Common data types and enums

/// Variant of a menu item, decides the display suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Item without a variant
    Plain,
    /// Food, served hot
    Food,
    /// Drink, served cold
    Drink,
}

impl ItemKind {
    /// Converts the enum to the tag stored in cart records
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Plain => "MenuItem",
            ItemKind::Food => "FoodItem",
            ItemKind::Drink => "DrinkItem",
        }
    }

    /// Converts a stored tag to an ItemKind enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MenuItem" => Some(ItemKind::Plain),
            "FoodItem" => Some(ItemKind::Food),
            "DrinkItem" => Some(ItemKind::Drink),
            _ => None,
        }
    }

    /// Suffix appended to the item's display text
    pub fn display_suffix(&self) -> Option<&'static str> {
        match self {
            ItemKind::Plain => None,
            ItemKind::Food => Some("Served Hot"),
            ItemKind::Drink => Some("Served Cold"),
        }
    }
}

/// Food/drink classification derived from the item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemClass {
    Food,
    Drink,
}

impl ItemClass {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemClass::Food => "food",
            ItemClass::Drink => "drink",
        }
    }
}

impl From<ItemKind> for ItemClass {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Food => ItemClass::Food,
            // plain items have always been classified as drinks
            ItemKind::Plain | ItemKind::Drink => ItemClass::Drink,
        }
    }
}

/// Kind of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }

    /// Converts a string to a NotificationKind enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "success" => Some(NotificationKind::Success),
            "error" => Some(NotificationKind::Error),
            "info" => Some(NotificationKind::Info),
            "warning" => Some(NotificationKind::Warning),
            _ => None,
        }
    }
}
