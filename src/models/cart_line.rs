use crate::core::error::Error;
use crate::models::{MenuItem, MenuItemRecord};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One menu item in the cart together with its quantity
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    item: Arc<MenuItem>,
    quantity: u32,
}

/// Stored form of a cart line
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartLineRecord {
    /// The item, stored by value
    pub item: MenuItemRecord,
    /// Quantity as found in storage; signed so corrupt values can be spotted
    pub quantity: i64,
}

impl CartLine {
    /// Creates a new CartLine with a quantity of one
    pub fn new(item: Arc<MenuItem>) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price times quantity
    pub fn total_price(&self) -> f64 {
        self.item.price() * f64::from(self.quantity)
    }

    pub(crate) fn increment(&mut self) {
        self.add_quantity(1);
    }

    pub(crate) fn add_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    /// Decrements unless the line is at one, returns whether it did
    pub(crate) fn decrement(&mut self) -> bool {
        if self.quantity > 1 {
            self.quantity -= 1;
            true
        } else {
            false
        }
    }

    /// Converts the line to its stored record
    pub fn to_record(&self) -> CartLineRecord {
        CartLineRecord {
            item: self.item.to_record(),
            quantity: i64::from(self.quantity),
        }
    }

    /// Rebuilds a line from a stored record. Quantities below one are rejected.
    pub fn from_record(record: CartLineRecord) -> Result<Self> {
        let item = MenuItem::from_record(record.item)?;

        let quantity = u32::try_from(record.quantity)
            .ok()
            .filter(|quantity| *quantity >= 1)
            .ok_or_else(|| {
                Error::InvalidData(format!(
                    "Invalid quantity {} for {}",
                    record.quantity,
                    item.name()
                ))
            })?;

        Ok(Self {
            item: Arc::new(item),
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quantity: i64) -> CartLineRecord {
        CartLineRecord {
            item: MenuItem::food("Hummus", 45.0, "x").to_record(),
            quantity,
        }
    }

    #[test]
    fn test_cart_line_total() {
        let mut line = CartLine::new(Arc::new(MenuItem::food("Hummus", 45.0, "x")));
        assert_eq!(line.quantity(), 1);
        assert_eq!(line.total_price(), 45.0);

        line.increment();
        assert_eq!(line.total_price(), 90.0);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut line = CartLine::new(Arc::new(MenuItem::drink("Tea", 20.0, "x")));
        line.increment();

        assert!(line.decrement());
        assert_eq!(line.quantity(), 1);
        assert!(!line.decrement());
        assert_eq!(line.quantity(), 1);
    }

    #[test]
    fn test_from_record_restores_quantity() {
        let line = CartLine::from_record(record(3)).unwrap();

        assert_eq!(line.item().name(), "Hummus");
        assert_eq!(line.quantity(), 3);
        assert_eq!(line.to_record(), record(3));
    }

    #[test]
    fn test_from_record_rejects_non_positive_quantity() {
        assert!(matches!(
            CartLine::from_record(record(0)),
            Err(Error::InvalidData(_))
        ));
        assert!(CartLine::from_record(record(-2)).is_err());
    }
}
