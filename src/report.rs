//! Текстовое представление расчёта
//!
//! Порции по блюдам и список закупки в виде строк для терминала.

use banquet_common::{BanquetPlan, Dish, Ingredient};
use std::fmt::Write;

/// Заглушка для пустого списка закупки
pub const EMPTY_SHOPPING_LIST: &str = "Добавьте блюда для расчёта ингредиентов";

/// Количество без дробной части (половина округляется от нуля)
pub fn format_amount(amount: f64) -> String {
    format!("{:.0}", amount.round())
}

/// Строка ингредиента на одну порцию: «Картофель: 300 г»
pub fn format_ingredient(ingredient: &Ingredient) -> String {
    format!("{}: {} {}", ingredient.name, ingredient.amount, ingredient.unit)
}

/// Краткое описание блюда для списков выбора
pub fn format_dish(dish: &Dish) -> String {
    format!("{} ({}, {}г)", dish.name, dish.category, dish.portion_size)
}

/// Порции по каждому блюду
pub fn render_portions(plan: &BanquetPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Меню на {}", plan.guests.label());

    if plan.dishes.is_empty() {
        let _ = writeln!(out, "  (меню пусто)");
        return out;
    }

    for (i, dish) in plan.dishes.iter().enumerate() {
        let cold = if dish.is_cold { " (холодное)" } else { "" };
        let _ = writeln!(
            out,
            "  {}. {} [{}]{}: {} порц. по {}г",
            i + 1,
            dish.name,
            dish.category,
            cold,
            dish.portions,
            dish.portion_size
        );
    }
    out
}

/// Сводный список закупки
pub fn render_shopping_list(plan: &BanquetPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Список закупки на {}", plan.guests.label());

    if plan.shopping_list.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY_SHOPPING_LIST);
        return out;
    }

    for item in &plan.shopping_list {
        let _ = writeln!(out, "  {}: {} {}", item.name, format_amount(item.amount), item.unit);
    }
    out
}

/// Меню целиком, с составом каждого блюда на порцию
pub fn render_menu(dishes: &[Dish]) -> String {
    let mut out = String::new();
    for (i, dish) in dishes.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, format_dish(dish));
        for ingredient in &dish.ingredients {
            let _ = writeln!(out, "     · {}", format_ingredient(ingredient));
        }
    }
    out
}
