use crate::error::{BanquetError, Result};
use banquet_common::{GuestCount, DEFAULT_GUESTS, DEFAULT_GUEST_STEP, DEFAULT_UNIT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Гостей, если --guests не указан
    pub default_guests: u32,
    /// Шаг кнопок «+» / «−» в интерактивном режиме
    pub guest_step: u32,
    /// Единица новой строки ингредиента
    pub default_unit: String,
    /// Заголовок выгрузки в Excel
    pub export_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_guests: DEFAULT_GUESTS,
            guest_step: DEFAULT_GUEST_STEP,
            default_unit: DEFAULT_UNIT.into(),
            export_title: "Банкет".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BanquetError::Config("Не найден домашний каталог".into()))?;
        Ok(home.join(".config").join("banquet-calc").join("config.json"))
    }

    pub fn default_guests(&self) -> GuestCount {
        GuestCount::new(self.default_guests)
    }

    /// Шаг не может быть нулевым
    pub fn guest_step(&self) -> u32 {
        self.guest_step.max(1)
    }

    pub fn set_default_guests(&mut self, guests: u32) -> Result<()> {
        self.default_guests = GuestCount::new(guests).get();
        self.save()
    }

    pub fn set_guest_step(&mut self, step: u32) -> Result<()> {
        if step == 0 {
            return Err(BanquetError::Config("Шаг должен быть больше нуля".into()));
        }
        self.guest_step = step;
        self.save()
    }
}
