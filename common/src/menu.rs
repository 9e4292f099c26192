//! Меню банкета
//!
//! Упорядоченный список блюд. Поддерживает только добавление и удаление
//! по идентификатору; существующие блюда не редактируются.

use crate::draft::{has_required_fields, DishDraft};
use crate::error::Result;
use crate::types::{Dish, Ingredient};
use serde::{Deserialize, Serialize};

/// Меню (упорядоченный список блюд)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    dishes: Vec<Dish>,
}

impl Menu {
    /// Пустое меню
    pub fn new() -> Self {
        Self::default()
    }

    /// Меню с тремя стартовыми блюдами
    pub fn with_sample_dishes() -> Self {
        let dishes = vec![
            Dish {
                id: "1".into(),
                name: "Оливье".into(),
                portion_size: 200,
                category: "Салаты".into(),
                ingredients: vec![
                    Ingredient::new("Картофель", 300.0, "г"),
                    Ingredient::new("Морковь", 150.0, "г"),
                    Ingredient::new("Яйца", 3.0, "шт"),
                    Ingredient::new("Горошек", 100.0, "г"),
                    Ingredient::new("Майонез", 150.0, "г"),
                ],
            },
            Dish {
                id: "2".into(),
                name: "Куриные котлеты".into(),
                portion_size: 150,
                category: "Горячее".into(),
                ingredients: vec![
                    Ingredient::new("Куриный фарш", 500.0, "г"),
                    Ingredient::new("Лук", 100.0, "г"),
                    Ingredient::new("Яйца", 1.0, "шт"),
                    Ingredient::new("Хлеб", 50.0, "г"),
                ],
            },
            Dish {
                id: "3".into(),
                name: "Греческий салат".into(),
                portion_size: 180,
                category: "Салаты".into(),
                ingredients: vec![
                    Ingredient::new("Помидоры", 200.0, "г"),
                    Ingredient::new("Огурцы", 150.0, "г"),
                    Ingredient::new("Сыр фета", 100.0, "г"),
                    Ingredient::new("Оливки", 50.0, "г"),
                    Ingredient::new("Масло оливковое", 30.0, "мл"),
                ],
            },
        ];
        Self { dishes }
    }

    /// JSON-массив блюд
    pub fn from_json(json: &str) -> Result<Self> {
        let menu: Self = serde_json::from_str(json)?;
        Ok(menu)
    }

    /// Прочитать меню из JSON-файла (только чтение)
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Добавить блюдо в конец меню
    ///
    /// Блюдо без названия, размера порции, категории или ингредиентов
    /// не добавляется; возвращает false.
    pub fn append(&mut self, dish: Dish) -> bool {
        if !has_required_fields(&dish.name, dish.portion_size, &dish.category, &dish.ingredients) {
            return false;
        }
        self.dishes.push(dish);
        true
    }

    /// Удалить блюдо по идентификатору; неизвестный id ничего не меняет
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.dishes.len();
        self.dishes.retain(|d| d.id != id);
        self.dishes.len() != before
    }

    /// Сохранить черновик как новое блюдо
    ///
    /// Неполный черновик не сохраняется и остаётся как есть.
    /// После сохранения черновик очищается.
    pub fn save_draft(&mut self, draft: &mut DishDraft) -> Option<&Dish> {
        let id = self.next_id();
        let dish = draft.take_dish(id)?;
        self.dishes.push(dish);
        self.dishes.last()
    }

    /// Идентификатор из текущего времени в миллисекундах
    pub fn next_id(&self) -> String {
        self.next_id_from(chrono::Utc::now().timestamp_millis())
    }

    /// Первый свободный идентификатор, начиная с метки времени
    fn next_id_from(&self, mut stamp: i64) -> String {
        while self.contains(&stamp.to_string()) {
            stamp += 1;
        }
        stamp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::IngredientDraft;

    fn salad(id: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: "Цезарь".to_string(),
            portion_size: 220,
            ingredients: vec![Ingredient::new("Салат романо", 80.0, "г")],
            category: "Салаты".to_string(),
        }
    }

    #[test]
    fn test_sample_menu() {
        let menu = Menu::with_sample_dishes();
        assert_eq!(menu.len(), 3);
        let ids: Vec<&str> = menu.dishes().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(menu.get("2").map(|d| d.name.as_str()), Some("Куриные котлеты"));
    }

    #[test]
    fn test_append_keeps_order() {
        let mut menu = Menu::new();
        assert!(menu.append(salad("a")));
        assert!(menu.append(salad("b")));

        let ids: Vec<&str> = menu.dishes().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_append_rejects_incomplete_dish() {
        let mut menu = Menu::with_sample_dishes();
        let before = menu.clone();

        let mut no_ingredients = salad("x");
        no_ingredients.ingredients.clear();
        assert!(!menu.append(no_ingredients));

        let mut no_portion = salad("y");
        no_portion.portion_size = 0;
        assert!(!menu.append(no_portion));

        let mut no_name = salad("z");
        no_name.name.clear();
        assert!(!menu.append(no_name));

        let mut no_category = salad("w");
        no_category.category.clear();
        assert!(!menu.append(no_category));

        assert_eq!(menu, before);
    }

    #[test]
    fn test_remove() {
        let mut menu = Menu::with_sample_dishes();
        assert!(menu.remove("2"));
        assert_eq!(menu.len(), 2);
        assert!(!menu.contains("2"));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut menu = Menu::with_sample_dishes();
        let before = menu.clone();

        assert!(!menu.remove("404"));
        assert!(!menu.remove(""));
        assert_eq!(menu, before);
    }

    #[test]
    fn test_save_draft() {
        let mut menu = Menu::new();
        let mut draft = DishDraft {
            name: "Цезарь".to_string(),
            portion_size: 220,
            category: "Салаты".to_string(),
            ..Default::default()
        };
        draft.add_ingredient(IngredientDraft::new("Салат романо", 80.0, "г"));

        let saved = menu.save_draft(&mut draft).map(|d| d.name.clone());
        assert_eq!(saved.as_deref(), Some("Цезарь"));
        assert_eq!(menu.len(), 1);
        assert!(menu.dishes()[0].id.parse::<i64>().is_ok());
        assert_eq!(draft, DishDraft::default());
    }

    #[test]
    fn test_save_draft_without_ingredients_is_rejected() {
        let mut menu = Menu::with_sample_dishes();
        let mut draft = DishDraft {
            name: "Пустое".to_string(),
            portion_size: 100,
            category: "Горячее".to_string(),
            ..Default::default()
        };

        assert!(menu.save_draft(&mut draft).is_none());
        assert_eq!(menu.len(), 3);
        assert_eq!(draft.name, "Пустое");
    }

    #[test]
    fn test_next_id_skips_taken() {
        let mut menu = Menu::new();
        menu.append(salad("1000"));
        menu.append(salad("1001"));

        assert_eq!(menu.next_id_from(1000), "1002");
        assert_eq!(menu.next_id_from(5), "5");
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "id": "1",
                "name": "Морс",
                "portionSize": 250,
                "category": "Напитки",
                "ingredients": [{ "name": "Клюква", "amount": 40, "unit": "г" }]
            }
        ]"#;

        let menu = Menu::from_json(json).expect("меню должно прочитаться");
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.dishes()[0].ingredients[0].amount, 40.0);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Menu::from_json("{ not a menu }").is_err());
    }
}
