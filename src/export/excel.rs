//! Выгрузка в Excel (CLI)
//!
//! Книга собирается в общей библиотеке, здесь только запись в файл.

use crate::error::{BanquetError, Result};
use banquet_common::export::excel_core::generate_excel_buffer;
use banquet_common::BanquetPlan;
use std::path::Path;

pub fn generate_excel(plan: &BanquetPlan, output_path: &Path, title: &str) -> Result<()> {
    let buffer = generate_excel_buffer(plan, title).map_err(banquet_common::Error::Excel)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, buffer)
        .map_err(|e| BanquetError::ExcelGeneration(format!("Ошибка записи файла: {}", e)))?;

    Ok(())
}
