//! Сводный список закупки
//!
//! Количество каждого ингредиента умножается на число порций блюда
//! и суммируется по ключу (название, единица). Строки идут в порядке
//! первого появления ингредиента в меню.

use crate::guests::GuestCount;
use crate::portions::portions_for;
use crate::types::{Dish, ShoppingItem};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Собрать список закупки для всего меню
///
/// Названия сравниваются как есть, без приведения регистра и обрезки
/// пробелов: «Картофель» и «картофель» считаются разными строками.
pub fn aggregate_ingredients(dishes: &[Dish], guests: GuestCount) -> Vec<ShoppingItem> {
    let mut items: Vec<ShoppingItem> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for dish in dishes {
        let portions = f64::from(portions_for(&dish.category, guests));

        for ingredient in &dish.ingredients {
            let total = ingredient.amount * portions;

            match index.entry((ingredient.name.as_str(), ingredient.unit.as_str())) {
                Entry::Occupied(entry) => items[*entry.get()].amount += total,
                Entry::Vacant(entry) => {
                    entry.insert(items.len());
                    items.push(ShoppingItem {
                        name: ingredient.name.clone(),
                        amount: total,
                        unit: ingredient.unit.clone(),
                    });
                }
            }
        }
    }

    items
}
