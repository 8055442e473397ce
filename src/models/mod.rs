mod cart_line;
mod menu_item;

pub use cart_line::{CartLine, CartLineRecord};
pub use menu_item::{MenuItem, MenuItemRecord};
