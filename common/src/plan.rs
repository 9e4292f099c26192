//! План банкета
//!
//! Два представления результата: порции по блюдам и список закупки.
//! Пересчитывается целиком при каждом обращении, без кэширования.

use crate::aggregate::aggregate_ingredients;
use crate::guests::GuestCount;
use crate::portions::{is_cold_dish, portions_for};
use crate::types::{Dish, DishPortions, ShoppingItem};
use serde::Serialize;

/// Порции по каждому блюду в порядке меню
pub fn dish_portions(dishes: &[Dish], guests: GuestCount) -> Vec<DishPortions> {
    dishes
        .iter()
        .map(|dish| DishPortions {
            dish_id: dish.id.clone(),
            name: dish.name.clone(),
            category: dish.category.clone(),
            portion_size: dish.portion_size,
            portions: portions_for(&dish.category, guests),
            is_cold: is_cold_dish(&dish.category),
        })
        .collect()
}

/// Результат расчёта для отображения
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BanquetPlan {
    pub guests: GuestCount,
    pub dishes: Vec<DishPortions>,
    pub shopping_list: Vec<ShoppingItem>,
}

impl BanquetPlan {
    pub fn compute(guests: GuestCount, dishes: &[Dish]) -> Self {
        Self {
            guests,
            dishes: dish_portions(dishes, guests),
            shopping_list: aggregate_ingredients(dishes, guests),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
