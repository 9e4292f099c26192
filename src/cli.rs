use crate::config::Config;
use crate::error::{BanquetError, Result};
use banquet_common::{GuestCount, Menu};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "banquet")]
#[command(about = "Банкетный калькулятор: расчёт порций и ингредиентов", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Подробный вывод
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Откуда берётся меню и на сколько гостей считать
#[derive(Args, Clone, Debug, Default)]
pub struct MenuSource {
    /// Количество гостей (по умолчанию из настроек)
    #[arg(short, long, value_parser = parse_guests)]
    pub guests: Option<GuestCount>,

    /// JSON-файл с меню (массив блюд, только чтение)
    #[arg(short, long, conflicts_with = "empty")]
    pub menu: Option<PathBuf>,

    /// Начать с пустого меню вместо стартового
    #[arg(long)]
    pub empty: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Рассчитать порции и список закупки
    Plan {
        #[command(flatten)]
        source: MenuSource,

        /// Что показать (all/portions/shopping)
        #[arg(long, default_value = "all")]
        view: PlanView,

        /// Формат вывода (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Выгрузить расчёт в Excel
    Export {
        #[command(flatten)]
        source: MenuSource,

        /// Файл или каталог для выгрузки
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Заголовок (по умолчанию из настроек)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Интерактивный режим: гости, добавление и удаление блюд
    Session {
        #[command(flatten)]
        source: MenuSource,
    },

    /// Показать или изменить настройки
    Config {
        /// Гостей по умолчанию
        #[arg(long)]
        set_default_guests: Option<u32>,

        /// Шаг изменения количества гостей
        #[arg(long)]
        set_guest_step: Option<u32>,

        /// Показать настройки
        #[arg(long)]
        show: bool,
    },
}

fn parse_guests(s: &str) -> std::result::Result<GuestCount, String> {
    Ok(GuestCount::parse_input(s))
}

impl MenuSource {
    pub fn guests(&self, config: &Config) -> GuestCount {
        self.guests.unwrap_or_else(|| config.default_guests())
    }

    /// Загрузить меню: из файла, пустое или стартовое
    pub fn load_menu(&self) -> Result<Menu> {
        if self.empty {
            return Ok(Menu::new());
        }

        match &self.menu {
            Some(path) => {
                if !path.exists() {
                    return Err(BanquetError::MenuFileNotFound(path.display().to_string()));
                }
                Menu::from_file(path).map_err(|e| {
                    BanquetError::InvalidMenu(format!("{}: {}", path.display(), e))
                })
            }
            None => Ok(Menu::with_sample_dishes()),
        }
    }
}

/// Представление результата
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlanView {
    #[default]
    All,
    Portions,
    Shopping,
}

impl std::str::FromStr for PlanView {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "a" => Ok(PlanView::All),
            "portions" | "menu" | "p" => Ok(PlanView::Portions),
            "shopping" | "list" | "s" => Ok(PlanView::Shopping),
            _ => Err(format!("Unknown view: {}. Use all, portions, or shopping", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_command() {
        let cli = Cli::try_parse_from([
            "banquet", "plan", "--guests", "25", "--view", "shopping", "-f", "json",
        ])
        .expect("аргументы должны разобраться");

        match cli.command {
            Commands::Plan { source, view, format } => {
                assert_eq!(source.guests.map(|g| g.get()), Some(25));
                assert_eq!(view, PlanView::Shopping);
                assert_eq!(format, OutputFormat::Json);
                assert!(!source.empty);
            }
            _ => panic!("ожидалась команда plan"),
        }
    }

    #[test]
    fn test_guests_argument_is_clamped() {
        let cli = Cli::try_parse_from(["banquet", "plan", "-g", "0"]).expect("разбор");
        match cli.command {
            Commands::Plan { source, .. } => assert_eq!(source.guests, Some(GuestCount::MIN)),
            _ => panic!("ожидалась команда plan"),
        }
    }

    #[test]
    fn test_menu_conflicts_with_empty() {
        let result = Cli::try_parse_from(["banquet", "plan", "--menu", "m.json", "--empty"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_guests_fall_back_to_config() {
        let source = MenuSource::default();
        let config = Config {
            default_guests: 30,
            ..Default::default()
        };
        assert_eq!(source.guests(&config).get(), 30);
    }

    #[test]
    fn test_load_menu_variants() {
        let sample = MenuSource::default().load_menu().expect("стартовое меню");
        assert_eq!(sample.len(), 3);

        let empty = MenuSource { empty: true, ..Default::default() }
            .load_menu()
            .expect("пустое меню");
        assert!(empty.is_empty());

        let missing = MenuSource {
            menu: Some(PathBuf::from("/nonexistent/menu-12345.json")),
            ..Default::default()
        }
        .load_menu();
        assert!(matches!(missing, Err(BanquetError::MenuFileNotFound(_))));
    }

    #[test]
    fn test_view_and_format_from_str() {
        assert_eq!("ALL".parse::<PlanView>(), Ok(PlanView::All));
        assert_eq!("portions".parse::<PlanView>(), Ok(PlanView::Portions));
        assert!("pdf".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
