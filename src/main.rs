use anyhow::Context;
use banquet_calc::{cli, config, export, report, session};
use banquet_common::BanquetPlan;
use clap::Parser;
use cli::{Cli, Commands, OutputFormat, PlanView};
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Plan { source, view, format } => {
            let menu = source.load_menu()?;
            let guests = source.guests(&config);
            if cli.verbose {
                eprintln!("[plan] блюд: {}, гостей: {}", menu.len(), guests);
            }

            let plan = BanquetPlan::compute(guests, menu.dishes());

            match format {
                OutputFormat::Json => {
                    let json = match view {
                        PlanView::All => serde_json::to_string_pretty(&plan)?,
                        PlanView::Portions => serde_json::to_string_pretty(&plan.dishes)?,
                        PlanView::Shopping => serde_json::to_string_pretty(&plan.shopping_list)?,
                    };
                    println!("{}", json);
                }
                OutputFormat::Text => {
                    if view != PlanView::Shopping {
                        println!("{}", report::render_portions(&plan));
                    }
                    if view != PlanView::Portions {
                        println!("{}", report::render_shopping_list(&plan));
                    }
                }
            }
        }

        Commands::Export { source, output, title } => {
            println!("📄 banquet - выгрузка в Excel\n");

            let menu = source.load_menu()?;
            let guests = source.guests(&config);
            let title = title.unwrap_or_else(|| config.export_title.clone());
            let output = output.unwrap_or_else(|| std::path::PathBuf::from("."));

            let plan = BanquetPlan::compute(guests, menu.dishes());
            println!("✔ Расчёт на {}: блюд {}, позиций закупки {}",
                guests.label(), plan.dishes.len(), plan.shopping_list.len());

            export::export_plan(&plan, &output, &title)
                .with_context(|| format!("не удалось выгрузить в {}", output.display()))?;

            println!("\n✅ Готово");
        }

        Commands::Session { source } => {
            let menu = source.load_menu()?;
            let guests = source.guests(&config);
            let mut session = session::Session::new(guests, menu, &config, cli.verbose);
            session.run()?;
        }

        Commands::Config { set_default_guests, set_guest_step, show } => {
            let mut config = config;

            if let Some(guests) = set_default_guests {
                config.set_default_guests(guests)?;
                println!("✔ Гостей по умолчанию: {}", config.default_guests);
            }

            if let Some(step) = set_guest_step {
                config.set_guest_step(step)?;
                println!("✔ Шаг изменения гостей: {}", config.guest_step);
            }

            if show {
                println!("Настройки:");
                println!("  Гостей по умолчанию: {}", config.default_guests);
                println!("  Шаг: {}", config.guest_step());
                println!("  Единица по умолчанию: {}", config.default_unit);
                println!("  Заголовок выгрузки: {}", config.export_title);
                if let Ok(path) = Config::config_path() {
                    println!("  Файл: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
