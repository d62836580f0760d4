//! In-memory document store for menu items and the shared cart.

use crate::model::Category;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Image used when a merchant does not supply one
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800&h=600&fit=crop";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Menu item not found")]
    MenuItemNotFound,

    #[error("Item not found in cart")]
    NotInCart,
}

/// A persisted menu item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub image_url: String,
    pub category: Category,
    pub merchant_id: String,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new menu item
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub title: String,
    pub description: String,
    pub price: u32,
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub merchant_id: String,
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct MenuItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<u32>,
    pub image_url: Option<String>,
    pub category: Option<Category>,
}

#[derive(Debug, Clone)]
struct CartLine {
    menu_item_id: String,
    quantity: u32,
}

/// Cart with each line resolved to its menu item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_price: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub menu_item: MenuItem,
    pub quantity: u32,
}

/// Menu items in insertion order plus the one shared cart
#[derive(Debug, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    cart: Vec<CartLine>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, newest first
    pub fn list_items(&self) -> Vec<MenuItem> {
        self.items.iter().rev().cloned().collect()
    }

    pub fn get_item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn create_item(&mut self, new: NewMenuItem) -> MenuItem {
        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            title: new.title.trim().to_string(),
            description: new.description,
            price: new.price,
            image_url: new
                .image_url
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            category: new.category.unwrap_or_default(),
            merchant_id: new.merchant_id,
            created_at: Utc::now(),
        };
        self.items.push(item.clone());
        item
    }

    pub fn update_item(&mut self, id: &str, patch: MenuItemPatch) -> Option<MenuItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;

        if let Some(title) = patch.title.filter(|t| !t.trim().is_empty()) {
            item.title = title.trim().to_string();
        }
        if let Some(description) = patch.description.filter(|d| !d.is_empty()) {
            item.description = description;
        }
        if let Some(price) = patch.price.filter(|p| *p > 0) {
            item.price = price;
        }
        if let Some(image_url) = patch.image_url {
            item.image_url = image_url;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }

        Some(item.clone())
    }

    /// Remove an item. Cart lines pointing at it are dropped on the next cart read.
    pub fn delete_item(&mut self, id: &str) -> Option<MenuItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn cart(&self) -> CartView {
        let items: Vec<CartItemView> = self
            .cart
            .iter()
            .filter_map(|line| {
                self.get_item(&line.menu_item_id).map(|item| CartItemView {
                    menu_item: item.clone(),
                    quantity: line.quantity,
                })
            })
            .collect();

        let total_price = items
            .iter()
            .map(|line| u64::from(line.menu_item.price) * u64::from(line.quantity))
            .sum();

        CartView { items, total_price }
    }

    /// Add `quantity` of an item, merging with an existing line
    pub fn add_to_cart(
        &mut self,
        menu_item_id: &str,
        quantity: u32,
    ) -> Result<CartView, StoreError> {
        if self.get_item(menu_item_id).is_none() {
            return Err(StoreError::MenuItemNotFound);
        }

        match self
            .cart
            .iter_mut()
            .find(|line| line.menu_item_id == menu_item_id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.cart.push(CartLine {
                menu_item_id: menu_item_id.to_string(),
                quantity,
            }),
        }

        self.prune_cart();
        Ok(self.cart())
    }

    pub fn remove_from_cart(&mut self, menu_item_id: &str) -> Result<CartView, StoreError> {
        let before = self.cart.len();
        self.cart.retain(|line| line.menu_item_id != menu_item_id);

        if self.cart.len() == before {
            return Err(StoreError::NotInCart);
        }

        self.prune_cart();
        Ok(self.cart())
    }

    pub fn clear_cart(&mut self) -> CartView {
        self.cart.clear();
        self.cart()
    }

    fn prune_cart(&mut self) {
        let items = &self.items;
        self.cart
            .retain(|line| items.iter().any(|item| item.id == line.menu_item_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(title: &str, price: u32) -> NewMenuItem {
        NewMenuItem {
            title: title.to_string(),
            description: format!("Delicious {}", title.to_lowercase()),
            price,
            image_url: None,
            category: None,
            merchant_id: "merchant_001".to_string(),
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let mut store = MenuStore::new();
        let item = store.create_item(new_item("Chicken Curry", 200));
        assert_eq!(item.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(item.category, Category::MainCourse);
        assert_eq!(store.get_item(&item.id), Some(&item));
    }

    #[test]
    fn test_list_newest_first() {
        let mut store = MenuStore::new();
        let first = store.create_item(new_item("First", 100));
        let second = store.create_item(new_item("Second", 100));
        let ids: Vec<String> = store.list_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_update_only_provided_fields() {
        let mut store = MenuStore::new();
        let item = store.create_item(new_item("Chicken Curry", 200));

        let updated = store
            .update_item(
                &item.id,
                MenuItemPatch {
                    price: Some(250),
                    title: Some(String::new()),
                    category: Some(Category::Appetizer),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price, 250);
        assert_eq!(updated.title, "Chicken Curry");
        assert_eq!(updated.category, Category::Appetizer);
        assert!(store.update_item("missing", MenuItemPatch::default()).is_none());
    }

    #[test]
    fn test_cart_merges_lines_and_totals() {
        let mut store = MenuStore::new();
        let curry = store.create_item(new_item("Chicken Curry", 200));
        let naan = store.create_item(new_item("Butter Naan", 40));

        store.add_to_cart(&curry.id, 1).unwrap();
        store.add_to_cart(&naan.id, 3).unwrap();
        let cart = store.add_to_cart(&curry.id, 1).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_price, 2 * 200 + 3 * 40);
    }

    #[test]
    fn test_cart_unknown_item() {
        let mut store = MenuStore::new();
        assert_eq!(
            store.add_to_cart("missing", 1),
            Err(StoreError::MenuItemNotFound)
        );
        assert_eq!(store.remove_from_cart("missing"), Err(StoreError::NotInCart));
    }

    #[test]
    fn test_deleted_item_leaves_cart() {
        let mut store = MenuStore::new();
        let curry = store.create_item(new_item("Chicken Curry", 200));
        let lassi = store.create_item(new_item("Mango Lassi", 60));
        store.add_to_cart(&curry.id, 1).unwrap();
        store.add_to_cart(&lassi.id, 2).unwrap();

        store.delete_item(&curry.id).unwrap();
        let cart = store.cart();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_price, 120);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = MenuStore::new();
        let curry = store.create_item(new_item("Chicken Curry", 200));
        let lassi = store.create_item(new_item("Mango Lassi", 60));
        store.add_to_cart(&curry.id, 1).unwrap();
        store.add_to_cart(&lassi.id, 1).unwrap();

        let cart = store.remove_from_cart(&curry.id).unwrap();
        assert_eq!(cart.total_price, 60);

        let cart = store.clear_cart();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total_price, 0);
    }
}
