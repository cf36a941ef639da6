use clap::Parser;
use tea_guide::{cli, config, display, error, load_catalog, session};
use cli::{spoon_override, Cli, Commands, ListKind};
use config::Config;
use error::{Result, TeaGuideError};
use tea_guide_common::{Card, DetailView, Filter, SearchQuery};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Search { query, category, region, tea_type, json } => {
            let catalog = load_catalog(&config, cli.dataset.as_deref())?;
            let filter = Filter { category, region, tea_type };
            let query = query.unwrap_or_default();

            let results = catalog.search(&filter, &query);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                let parsed = SearchQuery::parse(&query);
                let cards: Vec<Card> = results
                    .iter()
                    .map(|entry| Card::build(entry, &parsed))
                    .collect();
                display::print_cards(&cards);
            }
        }

        Commands::Show { name, method, vessel, units, spoon, no_spoon, full } => {
            let catalog = load_catalog(&config, cli.dataset.as_deref())?;
            let entry = catalog
                .find(&name)
                .ok_or_else(|| TeaGuideError::TeaNotFound(name.clone()))?;

            let mut settings = config.brew_settings();
            if let Some(method) = method {
                settings.method = method;
            }
            if let Some(units) = units {
                settings.unit_system = units;
            }
            if let Some(vessel) = vessel {
                settings.vessel_size = vessel;
            }
            if let Some(spoon) = spoon_override(spoon, no_spoon) {
                settings.spoon_measure = spoon;
            }

            display::print_detail(entry, &DetailView::build(entry, &settings), full);
        }

        Commands::Brew { name, full } => {
            let catalog = load_catalog(&config, cli.dataset.as_deref())?;
            let entry = catalog
                .find(&name)
                .ok_or_else(|| TeaGuideError::TeaNotFound(name.clone()))?;

            println!("🍵 tea-guide - 抽出量計算\n");
            session::run_interactive_brew(entry, config.brew_settings(), full)?;
        }

        Commands::List { kind, category, region } => {
            let catalog = load_catalog(&config, cli.dataset.as_deref())?;

            let values = match kind {
                ListKind::Categories => catalog.categories(),
                ListKind::Regions => catalog.regions(),
                ListKind::Types => match (category.as_deref(), region.as_deref()) {
                    (Some(category), _) => catalog.types_in_category(category),
                    (None, Some(region)) => catalog.types_in_region(region),
                    (None, None) => {
                        let mut types: Vec<String> =
                            catalog.entries().iter().map(|e| e.tea_type.clone()).collect();
                        types.sort();
                        types
                    }
                },
            };

            for value in &values {
                println!("{}", value);
            }
        }

        Commands::Config { set_dataset, set_vessel, set_units, show } => {
            let mut config = config;
            let changed = set_dataset.is_some() || set_vessel.is_some() || set_units.is_some();

            if let Some(path) = set_dataset {
                config.set_dataset(path)?;
            }
            if let Some(size) = set_vessel {
                config.set_vessel_size(size)?;
            }
            if let Some(units) = set_units {
                config.unit_system = units;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!(
                    "  データセット: {}",
                    config
                        .dataset
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".to_string())
                );
                println!("  抽出方法: {}", config.brew_method);
                println!(
                    "  容器サイズ: {} {}",
                    config.default_vessel_size,
                    config.unit_system.volume_label()
                );
                println!("  単位系: {}", config.unit_system);
                println!("  茶さじ表示: {}", if config.spoon_measure { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
