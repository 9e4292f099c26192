//! Banquet Common Library
//!
//! Модель меню и расчётное ядро банкетного калькулятора:
//! порции по блюдам и сводный список закупки.

pub mod types;
pub mod guests;
pub mod portions;
pub mod aggregate;
pub mod plan;
pub mod draft;
pub mod menu;
pub mod error;
pub mod export;

pub use types::{Dish, DishPortions, Ingredient, ShoppingItem};
pub use guests::{GuestCount, DEFAULT_GUESTS, DEFAULT_GUEST_STEP};
pub use portions::{is_cold_dish, portions_for, COLD_DISH_CATEGORIES};
pub use aggregate::aggregate_ingredients;
pub use plan::{dish_portions, BanquetPlan};
pub use draft::{parse_amount, parse_portion_size, DishDraft, IngredientDraft, DEFAULT_UNIT};
pub use menu::Menu;
pub use error::{Error, Result};
