//! Интерактивный режим
//!
//! Терминальная замена формы калькулятора: количество гостей,
//! добавление блюда через черновик, удаление блюда, просмотр расчёта.
//! Всё состояние живёт только в памяти на время сессии.

use crate::config::Config;
use crate::error::Result;
use crate::report;
use banquet_common::{
    parse_amount, parse_portion_size, BanquetPlan, DishDraft, GuestCount, IngredientDraft, Menu,
};
use dialoguer::{Input, Select};

/// Пункты главного меню
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    ShowPlan,
    IncreaseGuests,
    DecreaseGuests,
    TypeGuests,
    AddDish,
    RemoveDish,
    ShowMenu,
    Quit,
}

impl SessionAction {
    pub const ALL: [SessionAction; 8] = [
        SessionAction::ShowPlan,
        SessionAction::IncreaseGuests,
        SessionAction::DecreaseGuests,
        SessionAction::TypeGuests,
        SessionAction::AddDish,
        SessionAction::RemoveDish,
        SessionAction::ShowMenu,
        SessionAction::Quit,
    ];

    pub fn label(self, step: u32) -> String {
        match self {
            SessionAction::ShowPlan => "Показать расчёт".into(),
            SessionAction::IncreaseGuests => format!("+{} гостей", step),
            SessionAction::DecreaseGuests => format!("−{} гостей", step),
            SessionAction::TypeGuests => "Ввести количество гостей".into(),
            SessionAction::AddDish => "Добавить блюдо".into(),
            SessionAction::RemoveDish => "Удалить блюдо".into(),
            SessionAction::ShowMenu => "Показать меню".into(),
            SessionAction::Quit => "Выход".into(),
        }
    }
}

/// Пункты формы нового блюда
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftAction {
    AddIngredient,
    RemoveIngredient,
    Save,
    Close,
}

impl DraftAction {
    const ALL: [DraftAction; 4] = [
        DraftAction::AddIngredient,
        DraftAction::RemoveIngredient,
        DraftAction::Save,
        DraftAction::Close,
    ];

    fn label(self) -> &'static str {
        match self {
            DraftAction::AddIngredient => "Добавить ингредиент",
            DraftAction::RemoveIngredient => "Удалить ингредиент",
            DraftAction::Save => "Сохранить блюдо",
            DraftAction::Close => "Закрыть (черновик сохранится)",
        }
    }
}

/// Состояние сессии
#[derive(Debug, Clone)]
pub struct Session {
    pub guests: GuestCount,
    pub menu: Menu,
    /// Черновик сохраняется при закрытии формы
    pub draft: DishDraft,
    step: u32,
    default_unit: String,
    verbose: bool,
}

impl Session {
    pub fn new(guests: GuestCount, menu: Menu, config: &Config, verbose: bool) -> Self {
        Self {
            guests,
            menu,
            draft: DishDraft::new(),
            step: config.guest_step(),
            default_unit: config.default_unit.clone(),
            verbose,
        }
    }

    /// Пересчёт при каждом показе
    pub fn plan(&self) -> BanquetPlan {
        BanquetPlan::compute(self.guests, self.menu.dishes())
    }

    pub fn increase_guests(&mut self) {
        self.guests = self.guests.increase(self.step);
    }

    pub fn decrease_guests(&mut self) {
        self.guests = self.guests.decrease(self.step);
    }

    pub fn set_guests_from_input(&mut self, text: &str) {
        self.guests = GuestCount::parse_input(text);
    }

    pub fn remove_dish(&mut self, id: &str) -> bool {
        let removed = self.menu.remove(id);
        if self.verbose {
            eprintln!("[session] remove {} -> {}", id, removed);
        }
        removed
    }

    /// Главный цикл
    pub fn run(&mut self) -> Result<()> {
        println!("🍽  Банкетный калькулятор");
        println!("Блюд в меню: {}, гостей: {}\n", self.menu.len(), self.guests);

        loop {
            let labels: Vec<String> = SessionAction::ALL.iter().map(|a| a.label(self.step)).collect();
            let choice = Select::new()
                .with_prompt(format!("Гостей: {}", self.guests))
                .items(&labels)
                .default(0)
                .interact()?;

            match SessionAction::ALL[choice] {
                SessionAction::ShowPlan => {
                    let plan = self.plan();
                    println!("\n{}", report::render_portions(&plan));
                    println!("{}", report::render_shopping_list(&plan));
                }
                SessionAction::IncreaseGuests => {
                    self.increase_guests();
                    println!("  → {}\n", self.guests.label());
                }
                SessionAction::DecreaseGuests => {
                    self.decrease_guests();
                    println!("  → {}\n", self.guests.label());
                }
                SessionAction::TypeGuests => {
                    let input: String = Input::new()
                        .with_prompt("Количество гостей")
                        .with_initial_text(self.guests.to_string())
                        .allow_empty(true)
                        .interact_text()?;
                    self.set_guests_from_input(&input);
                    println!("  → {}\n", self.guests.label());
                }
                SessionAction::AddDish => self.edit_draft()?,
                SessionAction::RemoveDish => self.prompt_remove_dish()?,
                SessionAction::ShowMenu => {
                    if self.menu.is_empty() {
                        println!("  (меню пусто)\n");
                    } else {
                        println!("\n{}", report::render_menu(self.menu.dishes()));
                    }
                }
                SessionAction::Quit => break,
            }
        }

        Ok(())
    }

    /// Форма нового блюда
    fn edit_draft(&mut self) -> Result<()> {
        println!("\nДобавить блюдо: заполните информацию о блюде и его составе\n");

        self.draft.name = Input::new()
            .with_prompt("Название блюда")
            .with_initial_text(self.draft.name.clone())
            .allow_empty(true)
            .interact_text()?;

        let portion_initial = if self.draft.portion_size > 0 {
            self.draft.portion_size.to_string()
        } else {
            String::new()
        };
        let portion: String = Input::new()
            .with_prompt("Размер порции (г)")
            .with_initial_text(portion_initial)
            .allow_empty(true)
            .interact_text()?;
        self.draft.portion_size = parse_portion_size(&portion);

        self.draft.category = Input::new()
            .with_prompt("Категория (Салаты, Горячее...)")
            .with_initial_text(self.draft.category.clone())
            .allow_empty(true)
            .interact_text()?;

        loop {
            self.print_draft_ingredients();

            let labels: Vec<&str> = DraftAction::ALL.iter().map(|a| a.label()).collect();
            let choice = Select::new()
                .with_prompt("Состав блюда")
                .items(&labels)
                .default(0)
                .interact()?;

            match DraftAction::ALL[choice] {
                DraftAction::AddIngredient => {
                    let line = self.prompt_ingredient()?;
                    let accepted = self.draft.add_ingredient(line);
                    if self.verbose {
                        eprintln!("[session] ingredient accepted: {}", accepted);
                    }
                }
                DraftAction::RemoveIngredient => {
                    if self.draft.ingredients.is_empty() {
                        continue;
                    }
                    let items: Vec<String> = self
                        .draft
                        .ingredients
                        .iter()
                        .map(report::format_ingredient)
                        .collect();
                    let index = Select::new()
                        .with_prompt("Какую строку удалить")
                        .items(&items)
                        .default(0)
                        .interact()?;
                    self.draft.remove_ingredient(index);
                }
                DraftAction::Save => {
                    // неполный черновик не сохраняется, форма остаётся открытой
                    if let Some(dish) = self.menu.save_draft(&mut self.draft) {
                        println!("✔ Блюдо добавлено: {}\n", report::format_dish(dish));
                        break;
                    }
                    if self.verbose {
                        eprintln!("[session] draft incomplete, not saved");
                    }
                }
                DraftAction::Close => break,
            }
        }

        Ok(())
    }

    fn print_draft_ingredients(&self) {
        if self.draft.ingredients.is_empty() {
            println!("  Ингредиентов пока нет");
            return;
        }
        println!("  Ингредиенты:");
        for ingredient in &self.draft.ingredients {
            println!("   · {}", report::format_ingredient(ingredient));
        }
    }

    fn prompt_ingredient(&self) -> Result<IngredientDraft> {
        let name: String = Input::new()
            .with_prompt("  Название")
            .allow_empty(true)
            .interact_text()?;
        let amount: String = Input::new()
            .with_prompt("  Кол-во")
            .allow_empty(true)
            .interact_text()?;
        let unit: String = Input::new()
            .with_prompt("  Ед.")
            .default(self.default_unit.clone())
            .interact_text()?;

        Ok(IngredientDraft::new(name, parse_amount(&amount), unit))
    }

    fn prompt_remove_dish(&mut self) -> Result<()> {
        if self.menu.is_empty() {
            println!("  (меню пусто)\n");
            return Ok(());
        }

        let mut items: Vec<String> = self.menu.dishes().iter().map(report::format_dish).collect();
        items.push("Отмена".into());

        let choice = Select::new()
            .with_prompt("Какое блюдо удалить")
            .items(&items)
            .default(items.len() - 1)
            .interact()?;

        if let Some(dish) = self.menu.dishes().get(choice) {
            let id = dish.id.clone();
            let name = dish.name.clone();
            if self.remove_dish(&id) {
                println!("✔ Удалено: {}\n", name);
            }
        }

        Ok(())
    }
}
