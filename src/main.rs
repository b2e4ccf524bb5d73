//! Used Car Price Estimation CLI
//!
//! Interactive front-end for a pre-trained random-forest price model.

use clap::{Parser, Subcommand};
use sayara::{Config, Result, ENGINE_SIZE_MAX, ENGINE_SIZE_MIN, MILEAGE_MAX, YEAR_MAX, YEAR_MIN};

#[derive(Parser)]
#[command(name = "sayara")]
#[command(about = "Used car price estimation from a pre-trained model", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the price of a car from its attributes
    Predict {
        /// Manufacturer (see `catalog makes`)
        #[arg(long, default_value = "Hyundai")]
        make: String,
        /// Model year
        #[arg(long, default_value_t = 2018, value_parser = clap::value_parser!(u16).range(YEAR_MIN as i64..=YEAR_MAX as i64))]
        year: u16,
        /// Exterior color (see `catalog colors`)
        #[arg(long, default_value = "Another Color")]
        color: String,
        /// Options package: Standard, Semi Full or Full
        #[arg(long, default_value = "Standard")]
        options: String,
        /// Gear type: Automatic or Manual
        #[arg(long, default_value = "Automatic")]
        gear: String,
        /// Engine size in liters
        #[arg(long, default_value_t = 2.0)]
        engine_size: f64,
        /// Mileage in kilometers
        #[arg(long, default_value_t = 120_000, value_parser = clap::value_parser!(u32).range(0..=MILEAGE_MAX as i64))]
        mileage: u32,
        /// How many importance entries to chart
        #[arg(long)]
        top: Option<usize>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Prompt for each attribute, then estimate
    Interactive,
    /// List the supported attribute domains
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
    /// Model management commands
    Model {
        #[command(subcommand)]
        action: ModelCommands,
    },
    /// Initialize a new project with default config
    Init,
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List supported makes
    Makes,
    /// List supported colors
    Colors,
}

#[derive(Subcommand)]
enum ModelCommands {
    /// Show model information
    Info,
    /// Show the global feature-importance ranking
    Importance {
        /// How many entries to show
        #[arg(long, default_value = "10")]
        top: usize,
    },
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use table, json, or csv.", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Run command
    let result = match cli.command {
        Commands::Predict {
            make,
            year,
            color,
            options,
            gear,
            engine_size,
            mileage,
            top,
            format,
        } => commands::predict(
            &config,
            &make,
            year,
            &color,
            &options,
            &gear,
            engine_size,
            mileage,
            top,
            format,
        ),
        Commands::Interactive => commands::interactive(&config),
        Commands::Catalog { action } => match action {
            CatalogCommands::Makes => commands::catalog_makes(),
            CatalogCommands::Colors => commands::catalog_colors(),
        },
        Commands::Model { action } => match action {
            ModelCommands::Info => commands::model_info(&config),
            ModelCommands::Importance { top } => commands::model_importance(&config, top),
        },
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use sayara::catalog::{Color, Make};
    use sayara::predict::display::{format_prediction, render_importance_chart};
    use sayara::predict::Predictor;
    use sayara::{CarError, CarRecord, GearType, OptionsPackage};
    use std::io::Write;

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        std::fs::create_dir_all("model")?;
        println!("Created model/ directory");

        println!("\nNext steps:");
        println!("  1. Edit {} to customize settings", config_path);
        println!(
            "  2. Place the trained artifacts at {} and {}",
            config.artifacts.model_path, config.artifacts.columns_path
        );
        println!("  3. Run 'sayara predict --make Toyota --year 2020' for an estimate");

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn predict(
        config: &Config,
        make: &str,
        year: u16,
        color: &str,
        options: &str,
        gear: &str,
        engine_size: f64,
        mileage: u32,
        top: Option<usize>,
        format: OutputFormat,
    ) -> Result<()> {
        let record = CarRecord {
            make: Make::parse(make)?,
            year,
            color: Color::parse(color)?,
            options: OptionsPackage::parse(options)?,
            gear_type: GearType::parse(gear)?,
            engine_size,
            mileage,
        };
        record.validate()?;

        let predictor = Predictor::load(config)?;
        let prediction = predictor.predict(&record);
        let top = top.unwrap_or(config.display.top_features);

        match format {
            OutputFormat::Table => {
                print!(
                    "{}",
                    format_prediction(&record, &prediction, &config.display.currency)
                );
                println!("Top {} features influencing price:", top);
                print!(
                    "{}",
                    render_importance_chart(
                        &predictor.importances().top(top),
                        config.display.chart_width
                    )
                );
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "make": record.make.as_str(),
                    "year": record.year,
                    "color": record.color.as_str(),
                    "options": record.options.as_str(),
                    "gear_type": record.gear_type.as_str(),
                    "engine_size": record.engine_size,
                    "mileage": record.mileage,
                    "price": prediction.price,
                    "currency": config.display.currency,
                    "uncovered_columns": prediction.uncovered,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Csv => {
                println!("make,year,color,options,gear_type,engine_size,mileage,price");
                println!(
                    "{},{},{},{},{},{},{},{:.0}",
                    record.make,
                    record.year,
                    record.color,
                    record.options,
                    record.gear_type,
                    record.engine_size,
                    record.mileage,
                    prediction.price
                );
            }
        }

        Ok(())
    }

    pub fn interactive(config: &Config) -> Result<()> {
        // Load artifacts up front so a bad path fails before any prompting.
        let predictor = Predictor::load(config)?;

        println!("Car details (press Enter to keep the default):\n");
        let defaults = CarRecord::default();

        let make = prompt_parsed("Make", defaults.make.as_str(), Make::parse)?;
        let year = prompt_parsed("Model year", &defaults.year.to_string(), parse_year)?;
        let color = prompt_parsed("Color", defaults.color.as_str(), Color::parse)?;
        let options = prompt_parsed("Options package", defaults.options.as_str(), OptionsPackage::parse)?;
        let gear_type = prompt_parsed("Gear type", defaults.gear_type.as_str(), GearType::parse)?;
        let engine_size = prompt_parsed(
            "Engine size (L)",
            &defaults.engine_size.to_string(),
            parse_engine_size,
        )?;
        let mileage = prompt_parsed("Mileage (km)", &defaults.mileage.to_string(), parse_mileage)?;

        let record = CarRecord {
            make,
            year,
            color,
            options,
            gear_type,
            engine_size,
            mileage,
        };
        record.validate()?;

        print!("\nPress Enter to estimate the price...");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;

        let prediction = predictor.predict(&record);
        print!(
            "{}",
            format_prediction(&record, &prediction, &config.display.currency)
        );
        println!(
            "Top {} features influencing price:",
            config.display.top_features
        );
        print!(
            "{}",
            render_importance_chart(
                &predictor.importances().top(config.display.top_features),
                config.display.chart_width
            )
        );

        Ok(())
    }

    /// Prompt until the input parses; empty input takes the default
    fn prompt_parsed<T>(
        label: &str,
        default: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            print!("  {} [{}]: ", label, default);
            std::io::stdout().flush()?;
            let mut line = String::new();
            std::io::stdin().read_line(&mut line)?;
            let input = line.trim();
            let input = if input.is_empty() { default } else { input };
            match parse(input) {
                Ok(value) => return Ok(value),
                Err(e) => println!("  {}", e),
            }
        }
    }

    fn parse_year(s: &str) -> Result<u16> {
        let year: u16 = s
            .parse()
            .map_err(|_| CarError::Parse(format!("Not a year: {}", s)))?;
        let record = CarRecord {
            year,
            ..CarRecord::default()
        };
        record.validate()?;
        Ok(year)
    }

    fn parse_engine_size(s: &str) -> Result<f64> {
        let engine_size: f64 = s
            .parse()
            .map_err(|_| CarError::Parse(format!("Not a number: {}", s)))?;
        if !(ENGINE_SIZE_MIN..=ENGINE_SIZE_MAX).contains(&engine_size) {
            return Err(CarError::OutOfRange {
                field: "Engine size",
                value: engine_size,
                min: ENGINE_SIZE_MIN,
                max: ENGINE_SIZE_MAX,
            });
        }
        Ok(engine_size)
    }

    fn parse_mileage(s: &str) -> Result<u32> {
        let mileage: u32 = s
            .replace([',', '_'], "")
            .parse()
            .map_err(|_| CarError::Parse(format!("Not a mileage: {}", s)))?;
        let record = CarRecord {
            mileage,
            ..CarRecord::default()
        };
        record.validate()?;
        Ok(mileage)
    }

    pub fn catalog_makes() -> Result<()> {
        println!("Supported makes ({}):", Make::ALL.len());
        for make in Make::ALL {
            println!("  {}", make);
        }
        Ok(())
    }

    pub fn catalog_colors() -> Result<()> {
        println!("Supported colors ({}):", Color::ALL.len());
        for color in Color::ALL {
            println!("  {}", color);
        }
        Ok(())
    }

    pub fn model_info(config: &Config) -> Result<()> {
        let predictor = Predictor::load(config)?;

        println!("Model Information");
        println!("───────────────────────────────");
        println!("  Model:    {}", config.artifacts.model_path);
        println!("  Columns:  {}", config.artifacts.columns_path);
        println!("  Trees:    {}", predictor.forest().n_trees());
        println!("  Features: {}", predictor.forest().n_features());

        Ok(())
    }

    pub fn model_importance(config: &Config, top: usize) -> Result<()> {
        let predictor = Predictor::load(config)?;

        println!("Top {} features influencing price:", top);
        print!(
            "{}",
            render_importance_chart(
                &predictor.importances().top(top),
                config.display.chart_width
            )
        );

        Ok(())
    }
}
