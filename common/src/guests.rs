//! Количество гостей
//!
//! Всегда не меньше 1: ввод, шаговое изменение и десериализация
//! проходят через одно и то же ограничение.

use serde::{Deserialize, Deserializer, Serialize};

/// Количество гостей по умолчанию
pub const DEFAULT_GUESTS: u32 = 10;

/// Шаг кнопок «+» / «−» по умолчанию
pub const DEFAULT_GUEST_STEP: u32 = 5;

/// Количество гостей (>= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GuestCount(u32);

impl GuestCount {
    pub const MIN: GuestCount = GuestCount(1);

    /// Создать с ограничением снизу единицей
    pub fn new(count: u32) -> Self {
        Self(count.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Разобрать текстовый ввод
    ///
    /// Берётся целое число в начале строки (допускаются пробелы и знак).
    /// Нечисловой ввод считается нулём, итог ограничивается единицей.
    pub fn parse_input(text: &str) -> Self {
        Self::new(parse_leading_u32(text))
    }

    /// Увеличить на шаг
    pub fn increase(self, step: u32) -> Self {
        Self::new(self.0.saturating_add(step))
    }

    /// Уменьшить на шаг, не опускаясь ниже 1
    pub fn decrease(self, step: u32) -> Self {
        Self::new(self.0.saturating_sub(step))
    }

    /// Подпись вида «на 10 гостей»: единственное число только для 1
    pub fn label(self) -> String {
        if self.0 == 1 {
            format!("{} гостя", self.0)
        } else {
            format!("{} гостей", self.0)
        }
    }
}

/// Целое без знака в начале строки
///
/// Нет цифр или отрицательное число дают 0, при переполнении u32::MAX.
pub(crate) fn parse_leading_u32(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let (negative, rest) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if negative || digits.is_empty() {
        return 0;
    }

    // цифры уже проверены, ошибкой может быть только переполнение
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(DEFAULT_GUESTS)
    }
}

impl From<u32> for GuestCount {
    fn from(count: u32) -> Self {
        Self::new(count)
    }
}

impl std::fmt::Display for GuestCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for GuestCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let count = u32::deserialize(deserializer)?;
        Ok(Self::new(count))
    }
}
