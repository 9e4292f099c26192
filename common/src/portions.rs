//! Расчёт количества порций
//!
//! Холодные блюда (салаты и холодные закуски) готовятся с запасом 1.5x,
//! остальные по одной порции на гостя. Округление всегда вверх.

use crate::guests::GuestCount;

/// Категории, считающиеся холодными блюдами
pub const COLD_DISH_CATEGORIES: [&str; 2] = ["Салаты", "Холодные закуски"];

/// Является ли категория холодным блюдом (точное совпадение строки)
pub fn is_cold_dish(category: &str) -> bool {
    COLD_DISH_CATEGORIES.contains(&category)
}

/// Число порций блюда для заданного количества гостей
pub fn portions_for(category: &str, guests: GuestCount) -> u32 {
    let guests = guests.get();
    if is_cold_dish(category) {
        // ceil(guests * 1.5) в целых числах
        let portions = (u64::from(guests) * 3).div_ceil(2);
        u32::try_from(portions).unwrap_or(u32::MAX)
    } else {
        guests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cold_dish() {
        assert!(is_cold_dish("Салаты"));
        assert!(is_cold_dish("Холодные закуски"));
        assert!(!is_cold_dish("Горячее"));
        assert!(!is_cold_dish("салаты"));
        assert!(!is_cold_dish(" Салаты"));
        assert!(!is_cold_dish(""));
    }

    #[test]
    fn test_cold_dish_portions_round_up() {
        for g in 1..=200u32 {
            let expected = (f64::from(g) * 1.5).ceil() as u32;
            assert_eq!(portions_for("Салаты", GuestCount::new(g)), expected, "guests = {}", g);
            assert_eq!(portions_for("Холодные закуски", GuestCount::new(g)), expected);
        }
    }

    #[test]
    fn test_other_categories_one_per_guest() {
        for g in [1u32, 2, 7, 10, 333] {
            assert_eq!(portions_for("Горячее", GuestCount::new(g)), g);
            assert_eq!(portions_for("", GuestCount::new(g)), g);
        }
    }

    #[test]
    fn test_examples() {
        let guests = GuestCount::new(10);
        assert_eq!(portions_for("Салаты", guests), 15);
        assert_eq!(portions_for("Горячее", guests), 10);
        assert_eq!(portions_for("Салаты", GuestCount::new(1)), 2);
        assert_eq!(portions_for("Салаты", GuestCount::new(3)), 5);
    }

    #[test]
    fn test_huge_guest_count_saturates() {
        assert_eq!(portions_for("Салаты", GuestCount::new(u32::MAX)), u32::MAX);
    }
}
