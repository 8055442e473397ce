//! The static restaurant menu

use crate::core::types::ItemKind;
use crate::models::MenuItem;

use std::sync::Arc;

/// (kind, name, price, image, description)
type CatalogEntry = (ItemKind, &'static str, f64, &'static str, &'static str);

#[rustfmt::skip]
const APPETIZERS: &[CatalogEntry] = &[
    (ItemKind::Food, "Hummus", 45.0, "https://images.unsplash.com/photo-1571155329693-1e4d6d8c43e5?w=400&h=300&fit=crop", "Creamy chickpea dip with tahini, lemon, and garlic"),
    (ItemKind::Food, "Baba Ganoush", 50.0, "https://images.unsplash.com/photo-1623428187969-5da2dcea5ebf?w=400&h=300&fit=crop", "Smoky roasted eggplant dip with tahini"),
    (ItemKind::Food, "Fattoush Salad", 55.0, "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=400&h=300&fit=crop", "Fresh mixed salad with crispy pita bread"),
    (ItemKind::Food, "Tabbouleh", 48.0, "https://images.unsplash.com/photo-1540189549336-e6e99c3679fe?w=400&h=300&fit=crop", "Parsley salad with tomatoes, bulgur, and mint"),
    (ItemKind::Food, "Stuffed Vine Leaves", 60.0, "https://images.unsplash.com/photo-1485921325833-c519f76c4927?w=400&h=300&fit=crop", "Rice-stuffed grape leaves with herbs"),
];

#[rustfmt::skip]
const MAIN_DISHES: &[CatalogEntry] = &[
    (ItemKind::Food, "Koshari", 60.0, "https://images.unsplash.com/photo-1619895862022-091cfb1b6d1f?w=400&h=300&fit=crop", "Egypt's national dish with rice, lentils, and pasta"),
    (ItemKind::Food, "Shawarma", 120.0, "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=400&h=300&fit=crop", "Marinated meat with garlic sauce and pickles"),
    (ItemKind::Food, "Ful Medames", 45.0, "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=400&h=300&fit=crop", "Traditional fava beans cooked to perfection"),
    (ItemKind::Food, "Grilled Kofta", 140.0, "https://images.unsplash.com/photo-1529042410759-befb1204b468?w=400&h=300&fit=crop", "Spiced ground meat skewers with tahini"),
    (ItemKind::Food, "Hawawshi", 80.0, "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=400&h=300&fit=crop", "Spiced meat baked in crispy bread"),
    (ItemKind::Food, "Molokhia", 75.0, "https://images.unsplash.com/photo-1546069901-5d8d92d0e8f5?w=400&h=300&fit=crop", "Traditional jute leaf stew with chicken"),
    (ItemKind::Food, "Kofta with Rice", 130.0, "https://images.unsplash.com/photo-1540189549336-e6e99c3679fe?w=400&h=300&fit=crop", "Spiced meatballs with aromatic rice"),
];

#[rustfmt::skip]
const DRINKS: &[CatalogEntry] = &[
    (ItemKind::Drink, "Pepsi", 25.0, "https://images.unsplash.com/photo-1554866585-cd94860890b7?w=400&h=300&fit=crop", "Refreshing carbonated soft drink"),
    (ItemKind::Drink, "Mango Juice", 40.0, "https://images.unsplash.com/photo-1571575173700-afb9492e6a50?w=400&h=300&fit=crop", "Fresh tropical mango juice"),
    (ItemKind::Drink, "Fresh Orange", 35.0, "https://images.unsplash.com/photo-1600271886742-f049cd451bba?w=400&h=300&fit=crop", "Freshly squeezed orange juice"),
    (ItemKind::Drink, "Tea", 20.0, "https://images.unsplash.com/photo-1544787219-7f47ccb76574?w=400&h=300&fit=crop", "Traditional Egyptian black tea"),
    (ItemKind::Drink, "Hibiscus", 30.0, "https://images.unsplash.com/photo-1556679343-c7306c1976bc?w=400&h=300&fit=crop", "Refreshing hibiscus tea (Karkade)"),
    (ItemKind::Drink, "Lemon Mint", 32.0, "https://images.unsplash.com/photo-1556679343-c7306c1976bc?w=400&h=300&fit=crop", "Cool lemonade with fresh mint"),
    (ItemKind::Drink, "Coffee", 25.0, "https://images.unsplash.com/photo-1511920170033-f8396924c348?w=400&h=300&fit=crop", "Rich Turkish coffee"),
];

#[rustfmt::skip]
const DESSERTS: &[CatalogEntry] = &[
    (ItemKind::Food, "Baklava", 65.0, "https://images.unsplash.com/photo-1567921464020-f85aea2619c0?w=400&h=300&fit=crop", "Layers of phyllo with nuts and honey"),
    (ItemKind::Food, "Basbousa", 50.0, "https://images.unsplash.com/photo-1571115764595-644a1f56a55c?w=400&h=300&fit=crop", "Sweet semolina cake with syrup"),
    (ItemKind::Food, "Umm Ali", 55.0, "https://images.unsplash.com/photo-1571115177098-24ec42ed204d?w=400&h=300&fit=crop", "Traditional bread pudding with nuts"),
    (ItemKind::Food, "Kunafa", 70.0, "https://images.unsplash.com/photo-1567401893414-76b7b1e5a7a5?w=400&h=300&fit=crop", "Sweet cheese pastry with syrup"),
    (ItemKind::Food, "Mahalabia", 40.0, "https://images.unsplash.com/photo-1558636508-e0db3814bd1d?w=400&h=300&fit=crop", "Creamy milk pudding with rose water"),
    (ItemKind::Food, "Zalabia", 45.0, "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=400&h=300&fit=crop", "Crispy fried dough with honey"),
];

/// A named group of menu items, e.g. appetizers
#[derive(Debug, Clone)]
pub struct MenuCategory {
    key: &'static str,
    title: &'static str,
    items: Vec<Arc<MenuItem>>,
}

impl MenuCategory {
    fn build(key: &'static str, title: &'static str, entries: &[CatalogEntry]) -> Self {
        let items = entries
            .iter()
            .map(|(kind, name, price, image, description)| {
                Arc::new(
                    MenuItem::new(*kind, name, *price, image)
                        .with_description(description)
                        .with_category(key),
                )
            })
            .collect();

        Self { key, title, items }
    }

    /// Grouping tag stored on every item of the category
    pub fn key(&self) -> &str {
        self.key
    }

    pub fn title(&self) -> &str {
        self.title
    }

    pub fn items(&self) -> &[Arc<MenuItem>] {
        &self.items
    }
}

/// Read-only menu built once at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<MenuCategory>,
}

impl Catalog {
    /// Builds the Cairo Bites menu
    pub fn cairo_bites() -> Self {
        Self {
            categories: vec![
                MenuCategory::build("appetizers", "Appetizers", APPETIZERS),
                MenuCategory::build("mainDishes", "Main Dishes", MAIN_DISHES),
                MenuCategory::build("drinks", "Drinks", DRINKS),
                MenuCategory::build("desserts", "Desserts", DESSERTS),
            ],
        }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Looks up a category by its key
    pub fn category(&self, key: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|category| category.key == key)
    }

    /// All items, category by category
    pub fn all_items(&self) -> impl Iterator<Item = &Arc<MenuItem>> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
    }

    /// Finds an item by name; the first match wins
    pub fn find(&self, name: &str) -> Option<Arc<MenuItem>> {
        self.all_items().find(|item| item.name() == name).cloned()
    }

    /// Total number of items
    pub fn len(&self) -> usize {
        self.categories.iter().map(|category| category.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::cairo_bites()
    }
}
