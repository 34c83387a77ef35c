//! Shopping-list construction and price estimation for generated menus.

pub mod aggregation;
pub mod pricing;

pub use aggregation::{
    AisleSection, ShoppingList, ShoppingListItem, ShoppingSummary, build_shopping_list,
};
pub use pricing::{
    FALLBACK_ITEM_PRICE, MenuCostBreakdown, PriceEntry, PriceTable, menu_cost,
};
