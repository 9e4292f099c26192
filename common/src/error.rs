//! Типы ошибок
//!
//! Расчёт сам по себе ошибок не порождает: ошибки возникают только
//! на границе ввода-вывода (чтение меню, выгрузка в Excel).

use thiserror::Error;

/// Общий тип ошибки
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel error: {0}")]
    Excel(String),
}

/// Псевдоним Result
pub type Result<T> = std::result::Result<T, Error>;
