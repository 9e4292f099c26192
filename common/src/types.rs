//! Типы данных меню
//!
//! Общие для CLI и интерактивной сессии:
//! - Ingredient: строка состава блюда (на одну порцию)
//! - Dish: блюдо меню
//! - DishPortions / ShoppingItem: результаты расчёта

use serde::{Deserialize, Serialize};

/// Ингредиент блюда (количество на одну порцию)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// Блюдо меню
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,

    /// Размер порции в граммах (только для отображения)
    #[serde(default)]
    pub portion_size: u32,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Категория (свободный текст)
    #[serde(default)]
    pub category: String,
}

/// Расчёт порций для одного блюда
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishPortions {
    pub dish_id: String,
    pub name: String,
    pub category: String,
    pub portion_size: u32,
    pub portions: u32,
    pub is_cold: bool,
}

/// Строка списка закупки
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_deserialize_camel_case() {
        let json = r#"{
            "id": "1",
            "name": "Оливье",
            "portionSize": 200,
            "category": "Салаты",
            "ingredients": [
                { "name": "Картофель", "amount": 300, "unit": "г" }
            ]
        }"#;

        let dish: Dish = serde_json::from_str(json).expect("десериализация не удалась");
        assert_eq!(dish.portion_size, 200);
        assert_eq!(dish.ingredients.len(), 1);
        assert_eq!(dish.ingredients[0], Ingredient::new("Картофель", 300.0, "г"));
    }

    #[test]
    fn test_dish_deserialize_missing_optional_fields() {
        let json = r#"{ "id": "7", "name": "Хлеб" }"#;

        let dish: Dish = serde_json::from_str(json).expect("десериализация не удалась");
        assert_eq!(dish.portion_size, 0);
        assert!(dish.ingredients.is_empty());
        assert_eq!(dish.category, "");
    }

    #[test]
    fn test_shopping_item_serialize() {
        let item = ShoppingItem {
            name: "Лук".to_string(),
            amount: 1000.0,
            unit: "г".to_string(),
        };

        let json = serde_json::to_string(&item).expect("сериализация не удалась");
        assert!(json.contains("\"name\":\"Лук\""));
        assert!(json.contains("\"amount\":1000.0"));
    }

    #[test]
    fn test_dish_portions_serialize_camel_case() {
        let row = DishPortions {
            dish_id: "2".to_string(),
            name: "Куриные котлеты".to_string(),
            category: "Горячее".to_string(),
            portion_size: 150,
            portions: 10,
            is_cold: false,
        };

        let json = serde_json::to_string(&row).expect("сериализация не удалась");
        assert!(json.contains("\"dishId\":\"2\""));
        assert!(json.contains("\"portionSize\":150"));
        assert!(json.contains("\"isCold\":false"));
    }
}
