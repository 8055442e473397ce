//! Cart state, its persistence and the operations the UI calls

use crate::config::CartConfig;
use crate::core::error::Error;
use crate::core::events::{CartEvent, EventBus, Notification};
use crate::core::storage::Storage;
use crate::core::types::NotificationKind;
use crate::models::{CartLine, CartLineRecord, MenuItem};
use crate::Result;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Order manager owning the cart lines
///
/// Lines keep insertion order and there is at most one line per item name.
/// Every change is written back to the storage backend right away; storage
/// failures are logged and never reach the caller.
pub struct OrderManager {
    /// Lines in the order they were first added
    items: Vec<CartLine>,
    /// Key the cart is stored under
    storage_key: String,
    /// Persistence backend
    storage: Box<dyn Storage>,
    /// Subscribers for toasts and badge updates
    events: EventBus,
    /// Dismissal delay handed to every notification
    notification_timeout: Duration,
}

impl OrderManager {
    /// Creates a new OrderManager and restores any cart saved in `storage`
    pub fn new(storage: Box<dyn Storage>, config: &CartConfig) -> Self {
        let mut manager = Self {
            items: Vec::new(),
            storage_key: config.storage_key.clone(),
            storage,
            events: EventBus::new(),
            notification_timeout: config.notification_timeout,
        };
        manager.load();
        manager
    }

    /// Subscribes to toasts and badge updates
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<CartEvent> {
        self.events.subscribe()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Replaces the cart with the stored one. Corrupt data is logged and ignored.
    pub fn load(&mut self) {
        match self.read_stored() {
            Ok(Some(items)) => {
                log::debug!("Restored {} cart lines", items.len());
                self.items = items;
                self.refresh_badge();
            }
            Ok(None) => {}
            Err(e) => log::error!("Error loading cart from storage: {}", e),
        }
    }

    /// Writes the cart to storage. Failures are logged and ignored.
    pub fn save(&mut self) {
        if let Err(e) = self.write_stored() {
            log::error!("Error saving cart to storage: {}", e);
        }
    }

    /// Adds one unit of `item`, merging with an existing line of the same name
    pub fn add_item(&mut self, item: Arc<MenuItem>) {
        match self
            .items
            .iter_mut()
            .find(|line| line.item().name() == item.name())
        {
            Some(line) => line.increment(),
            None => self.items.push(CartLine::new(item)),
        }

        self.save();
        self.refresh_badge();
        self.notify("Item added to cart!", NotificationKind::Success);
    }

    /// Removes the line at `index`; out-of-range indices are ignored
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }

        let line = self.items.remove(index);
        log::debug!("Removed {} from cart", line.item().name());

        self.save();
        self.refresh_badge();
        self.notify("Item removed from cart", NotificationKind::Success);
    }

    /// Adds one unit to the line at `index`
    pub fn increase_quantity(&mut self, index: usize) {
        if let Some(line) = self.items.get_mut(index) {
            line.increment();
            self.save();
            self.refresh_badge();
        }
    }

    /// Takes one unit off the line at `index`, removing the line when it is the last one
    pub fn decrease_quantity(&mut self, index: usize) {
        let Some(line) = self.items.get_mut(index) else {
            return;
        };

        if line.decrement() {
            self.save();
            self.refresh_badge();
        } else {
            self.remove_item(index);
        }
    }

    /// Sum of all line totals
    pub fn calculate_total(&self) -> f64 {
        self.items.iter().map(CartLine::total_price).sum()
    }

    /// Total number of units in the cart
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Number of distinct lines
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Empties the cart
    pub fn clear(&mut self) {
        self.items.clear();
        self.save();
        self.refresh_badge();
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Emits a toast to all subscribers
    pub fn notify(&mut self, message: &str, kind: NotificationKind) {
        let notification = Notification::new(message, kind, self.notification_timeout);
        self.events.emit(CartEvent::Notification(notification));
    }

    /// Emits the current unit count for the cart badge
    pub fn refresh_badge(&mut self) {
        let count = self.item_count();
        self.events.emit(CartEvent::badge(count));
    }

    fn read_stored(&self) -> Result<Option<Vec<CartLine>>> {
        let stored = match self.storage.get_item(&self.storage_key)? {
            Some(stored) if !stored.trim().is_empty() => stored,
            _ => return Ok(None),
        };

        let records: Vec<CartLineRecord> = serde_json::from_str(&stored)
            .map_err(|e| Error::PersistenceRead(format!("Invalid stored cart: {}", e)))?;

        let mut items: Vec<CartLine> = Vec::with_capacity(records.len());
        for record in records {
            let line = match CartLine::from_record(record) {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Dropping stored cart line: {}", e);
                    continue;
                }
            };

            match items
                .iter_mut()
                .find(|existing| existing.item().name() == line.item().name())
            {
                Some(existing) => existing.add_quantity(line.quantity()),
                None => items.push(line),
            }
        }

        Ok(Some(items))
    }

    fn write_stored(&mut self) -> Result<()> {
        let records: Vec<CartLineRecord> = self.items.iter().map(CartLine::to_record).collect();
        let data = serde_json::to_string(&records)?;
        self.storage.set_item(&self.storage_key, &data)
    }
}
