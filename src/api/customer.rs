//! Customer-facing API tying the menu to the cart

use crate::api::newsletter::{self, SUBSCRIBED_MESSAGE};
use crate::config::CartConfig;
use crate::core::catalog::Catalog;
use crate::core::error::Error;
use crate::core::events::CartEvent;
use crate::core::order::OrderManager;
use crate::core::storage::{FileStorage, MemoryStorage, Storage};
use crate::core::types::NotificationKind;
use crate::Result;

use serde::Serialize;
use tokio::sync::mpsc;

/// One cart line as the UI renders it
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CartSummaryLine {
    /// Position used for the quantity and remove buttons
    pub index: usize,
    pub name: String,
    /// Display text such as `Tea - 20 EGP (Served Cold)`
    pub display: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Snapshot of the cart for rendering
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartSummaryLine>,
    pub item_count: u64,
    pub unique_item_count: usize,
    pub total: f64,
}

/// API for a visitor browsing the menu and building an order
pub struct CustomerApi {
    /// Static menu
    catalog: Catalog,
    /// Order manager holding the cart
    order_manager: OrderManager,
}

impl CustomerApi {
    /// Creates a new CustomerApi from an already built catalog and order manager
    pub fn new(catalog: Catalog, order_manager: OrderManager) -> Self {
        Self {
            catalog,
            order_manager,
        }
    }

    /// Creates the API over the given storage backend and restores the saved cart
    pub fn with_storage(storage: Box<dyn Storage>, config: &CartConfig) -> Self {
        Self::new(Catalog::cairo_bites(), OrderManager::new(storage, config))
    }

    /// Creates the API with the cart kept in the file named by the config
    pub fn open(config: &CartConfig) -> Self {
        log::info!("Opening cart storage at {}", config.storage_path.display());
        Self::with_storage(Box::new(FileStorage::new(&config.storage_path)), config)
    }

    /// Creates the API with a cart that lives only in memory
    pub fn in_memory() -> Self {
        Self::with_storage(Box::new(MemoryStorage::new()), &CartConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn order(&self) -> &OrderManager {
        &self.order_manager
    }

    pub fn order_mut(&mut self) -> &mut OrderManager {
        &mut self.order_manager
    }

    /// Subscribes to toasts and badge updates
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<CartEvent> {
        self.order_manager.subscribe()
    }

    /// Adds one unit of the named menu item to the order
    pub fn add_to_order(&mut self, name: &str) -> Result<()> {
        let item = self
            .catalog
            .find(name)
            .ok_or_else(|| Error::InvalidData(format!("Unknown menu item: {}", name)))?;

        self.order_manager.add_item(item);
        Ok(())
    }

    /// Builds a snapshot of the cart
    pub fn cart_summary(&self) -> CartSummary {
        let lines = self
            .order_manager
            .items()
            .iter()
            .enumerate()
            .map(|(index, line)| CartSummaryLine {
                index,
                name: line.item().name().to_string(),
                display: line.item().display_info(),
                quantity: line.quantity(),
                unit_price: line.item().price(),
                total_price: line.total_price(),
            })
            .collect();

        CartSummary {
            lines,
            item_count: self.order_manager.item_count(),
            unique_item_count: self.order_manager.unique_item_count(),
            total: self.order_manager.calculate_total(),
        }
    }

    /// Signs up for the newsletter, reporting the outcome as a toast
    pub fn subscribe_newsletter(&mut self, input: &str) -> Result<String> {
        match newsletter::validate_email(input) {
            Ok(email) => {
                log::info!("Newsletter subscription for {}", email);
                self.order_manager
                    .notify(SUBSCRIBED_MESSAGE, NotificationKind::Success);
                Ok(email)
            }
            Err(e) => {
                self.order_manager
                    .notify(newsletter::INVALID_EMAIL_MESSAGE, NotificationKind::Error);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_add_to_order_by_name() {
        let mut api = CustomerApi::in_memory();

        api.add_to_order("Hummus").unwrap();
        api.add_to_order("Hummus").unwrap();

        let summary = api.cart_summary();
        assert_eq!(summary.unique_item_count, 1);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, 90.0);
        assert_eq!(summary.lines[0].display, "Hummus - 45 EGP (Served Hot)");
        assert_eq!(summary.lines[0].total_price, 90.0);
    }

    #[test]
    fn test_add_unknown_item() {
        let mut api = CustomerApi::in_memory();

        let result = api.add_to_order("Pizza");
        assert!(matches!(result, Err(Error::InvalidData(_))));
        assert!(api.order().is_empty());
    }

    #[test]
    fn test_summary_indices_follow_order() {
        let mut api = CustomerApi::in_memory();
        api.add_to_order("Tea").unwrap();
        api.add_to_order("Pepsi").unwrap();

        api.order_mut().remove_item(0);

        let summary = api.cart_summary();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].index, 0);
        assert_eq!(summary.lines[0].name, "Pepsi");
        assert_eq!(summary.total, 25.0);
    }

    #[test]
    fn test_newsletter_toasts() {
        let mut api = CustomerApi::in_memory();
        let mut events = api.subscribe();

        assert!(api.subscribe_newsletter("nope").is_err());
        assert_eq!(api.subscribe_newsletter(" a@b.eg ").unwrap(), "a@b.eg");

        let kinds: Vec<NotificationKind> = std::iter::from_fn(|| events.try_recv().ok())
            .filter_map(|event| match event {
                CartEvent::Notification(notification) => Some(notification.kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![NotificationKind::Error, NotificationKind::Success]
        );
    }

    #[test]
    fn test_cart_survives_reopen() {
        let dir = tempdir().expect("tempdir");
        let config = CartConfig::new().with_storage_path(dir.path().join("storage.json"));

        {
            let mut api = CustomerApi::open(&config);
            api.add_to_order("Koshari").unwrap();
            api.add_to_order("Mango Juice").unwrap();
            api.order_mut().increase_quantity(1);
        }

        let api = CustomerApi::open(&config);
        let summary = api.cart_summary();
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.lines[1].name, "Mango Juice");
        assert_eq!(summary.total, 140.0);
    }
}
