//! Выгрузка плана в Excel (общая библиотека)
//!
//! Книга из двух листов: «Меню» (порции по блюдам) и «Закупка»
//! (сводный список ингредиентов).

use crate::plan::BanquetPlan;
use rust_xlsxwriter::*;

/// Имя листа с порциями
pub const MENU_SHEET: &str = "Меню";
/// Имя листа со списком закупки
pub const SHOPPING_SHEET: &str = "Закупка";

const NAME_COL_WIDTH: f64 = 32.0;
const VALUE_COL_WIDTH: f64 = 14.0;

/// Сгенерировать книгу в буфер
///
/// # Arguments
/// * `plan` - рассчитанный план
/// * `title` - заголовок в первой строке каждого листа
pub fn generate_excel_buffer(plan: &BanquetPlan, title: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let number_format = Format::new()
        .set_num_format("0")
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let subtitle = format!("{}: на {}", title, plan.guests.label());

    // Лист 1: порции по блюдам
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(MENU_SHEET)
        .map_err(|e| format!("Ошибка имени листа: {}", e))?;
    set_column_widths(worksheet, 4)?;

    worksheet.write_string_with_format(0, 0, &subtitle, &title_format)
        .map_err(|e| format!("Ошибка записи заголовка: {}", e))?;

    for (col, header) in ["Блюдо", "Категория", "Порция, г", "Порций"].iter().enumerate() {
        worksheet.write_string_with_format(2, col as u16, *header, &header_format)
            .map_err(|e| format!("Ошибка записи шапки: {}", e))?;
    }

    for (i, dish) in plan.dishes.iter().enumerate() {
        let row = 3 + i as u32;
        worksheet.write_string_with_format(row, 0, &dish.name, &text_format)
            .map_err(|e| format!("Ошибка записи блюда: {}", e))?;
        worksheet.write_string_with_format(row, 1, &dish.category, &text_format)
            .map_err(|e| format!("Ошибка записи категории: {}", e))?;
        worksheet.write_number_with_format(row, 2, f64::from(dish.portion_size), &number_format)
            .map_err(|e| format!("Ошибка записи порции: {}", e))?;
        worksheet.write_number_with_format(row, 3, f64::from(dish.portions), &number_format)
            .map_err(|e| format!("Ошибка записи порций: {}", e))?;
    }

    // Лист 2: список закупки
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHOPPING_SHEET)
        .map_err(|e| format!("Ошибка имени листа: {}", e))?;
    set_column_widths(worksheet, 3)?;

    worksheet.write_string_with_format(0, 0, &subtitle, &title_format)
        .map_err(|e| format!("Ошибка записи заголовка: {}", e))?;

    for (col, header) in ["Ингредиент", "Количество", "Ед."].iter().enumerate() {
        worksheet.write_string_with_format(2, col as u16, *header, &header_format)
            .map_err(|e| format!("Ошибка записи шапки: {}", e))?;
    }

    for (i, item) in plan.shopping_list.iter().enumerate() {
        let row = 3 + i as u32;
        worksheet.write_string_with_format(row, 0, &item.name, &text_format)
            .map_err(|e| format!("Ошибка записи ингредиента: {}", e))?;
        worksheet.write_number_with_format(row, 1, item.amount, &number_format)
            .map_err(|e| format!("Ошибка записи количества: {}", e))?;
        worksheet.write_string_with_format(row, 2, &item.unit, &text_format)
            .map_err(|e| format!("Ошибка записи единицы: {}", e))?;
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Ошибка сохранения Excel: {}", e))
}

/// Первый столбец широкий, остальные узкие
fn set_column_widths(worksheet: &mut Worksheet, columns: u16) -> Result<(), String> {
    worksheet.set_column_width(0, NAME_COL_WIDTH)
        .map_err(|e| format!("Ошибка ширины столбца: {}", e))?;
    for col in 1..columns {
        worksheet.set_column_width(col, VALUE_COL_WIDTH)
            .map_err(|e| format!("Ошибка ширины столбца: {}", e))?;
    }
    Ok(())
}
