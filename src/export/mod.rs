pub mod excel;

use crate::error::Result;
use banquet_common::BanquetPlan;
use std::path::{Path, PathBuf};

/// Имя файла по умолчанию: заголовок и дата
pub fn default_file_stem(title: &str) -> String {
    format!("{}-{}", title, chrono::Local::now().format("%Y-%m-%d"))
}

/// Каталог или путь без расширения дополняется именем файла
pub fn output_path_for(output: &Path, title: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.xlsx", default_file_stem(title)))
    } else {
        output.to_path_buf()
    }
}

pub fn export_plan(plan: &BanquetPlan, output: &Path, title: &str) -> Result<PathBuf> {
    let output_path = output_path_for(output, title);

    println!("- Формирую Excel...");
    excel::generate_excel(plan, &output_path, title)?;
    println!("✔ Excel: {}", output_path.display());

    Ok(output_path)
}
