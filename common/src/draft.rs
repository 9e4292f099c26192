//! Черновик нового блюда
//!
//! Состояние формы «Добавить блюдо»: строки ингредиентов добавляются
//! и удаляются по одной, блюдо сохраняется в меню только целиком.
//! Неполный ввод молча игнорируется.

use crate::guests::parse_leading_u32;
use crate::types::{Dish, Ingredient};

/// Единица измерения по умолчанию для новой строки
pub const DEFAULT_UNIT: &str = "г";

/// Строка ингредиента в процессе ввода
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDraft {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Default for IngredientDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            amount: 0.0,
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl IngredientDraft {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }

    /// Название задано и количество положительно
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.amount > 0.0
    }
}

/// Черновик блюда
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DishDraft {
    pub name: String,
    pub portion_size: u32,
    pub category: String,
    pub ingredients: Vec<Ingredient>,
}

impl DishDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить строку ингредиента; некорректная строка игнорируется
    pub fn add_ingredient(&mut self, line: IngredientDraft) -> bool {
        if !line.is_valid() {
            return false;
        }
        self.ingredients.push(Ingredient {
            name: line.name,
            amount: line.amount,
            unit: line.unit,
        });
        true
    }

    /// Удалить строку по индексу
    pub fn remove_ingredient(&mut self, index: usize) -> Option<Ingredient> {
        if index < self.ingredients.len() {
            Some(self.ingredients.remove(index))
        } else {
            None
        }
    }

    /// Все обязательные поля заполнены
    pub fn is_complete(&self) -> bool {
        has_required_fields(&self.name, self.portion_size, &self.category, &self.ingredients)
    }

    /// Сбросить форму
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Забрать готовое блюдо, оставив пустой черновик
    ///
    /// Для неполного черновика возвращает None и ничего не меняет.
    pub fn take_dish(&mut self, id: String) -> Option<Dish> {
        if !self.is_complete() {
            return None;
        }
        let draft = std::mem::take(self);
        Some(Dish {
            id,
            name: draft.name,
            portion_size: draft.portion_size,
            ingredients: draft.ingredients,
            category: draft.category,
        })
    }
}

/// Размер порции из текстового поля (целые граммы, иначе 0)
pub fn parse_portion_size(text: &str) -> u32 {
    parse_leading_u32(text)
}

/// Количество из текстового поля
///
/// Читается число в начале строки; запятая допускается как десятичный
/// разделитель. Нечисловой ввод даёт 0.
pub fn parse_amount(text: &str) -> f64 {
    let normalized = text.trim_start().replace(',', ".");
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in normalized.char_indices() {
        let accepted = match c {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            '-' | '+' if i == 0 => true,
            _ => false,
        };
        if !accepted {
            break;
        }
        end = i + c.len_utf8();
    }
    normalized[..end].parse::<f64>().unwrap_or(0.0)
}

/// Проверка обязательных полей блюда (только непустота и ненулевой размер)
pub(crate) fn has_required_fields(
    name: &str,
    portion_size: u32,
    category: &str,
    ingredients: &[Ingredient],
) -> bool {
    !name.is_empty() && portion_size > 0 && !category.is_empty() && !ingredients.is_empty()
}
