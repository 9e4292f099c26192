use thiserror::Error;

#[derive(Error, Debug)]
pub enum BanquetError {
    #[error("Ошибка настроек: {0}")]
    Config(String),

    #[error("Файл меню не найден: {0}")]
    MenuFileNotFound(String),

    #[error("Некорректный файл меню: {0}")]
    InvalidMenu(String),

    #[error("Ошибка разбора JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка выгрузки Excel: {0}")]
    ExcelGeneration(String),

    #[error("Ошибка ввода в терминале: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] banquet_common::Error),
}

impl From<dialoguer::Error> for BanquetError {
    fn from(e: dialoguer::Error) -> Self {
        BanquetError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BanquetError>;
