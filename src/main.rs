use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use nutrigraph_rs::catalog::{FoodCatalog, load_catalog};
use nutrigraph_rs::cli::{Cli, Command, RecommendArgs, ServeArgs};
use nutrigraph_rs::config::Config;
use nutrigraph_rs::error::Result;
use nutrigraph_rs::interface::{
    ProfileDraft, collect_profile, display_catalog_summary, display_meal_plan, prompt_yes_no,
};
use nutrigraph_rs::planner::recommend_meals;
use nutrigraph_rs::server::start_server;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Serve(args) => cmd_serve(args),
        Command::Recommend(args) => cmd_recommend(args),
        Command::Catalog { file } => cmd_catalog(file),
    }
}

/// Run the HTTP service until Ctrl+C or SIGTERM.
fn cmd_serve(args: ServeArgs) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(file) = args.file {
        config.catalog_path = file;
    }
    if let Some(origin) = args.cors_origin {
        config.cors_origin = origin;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(start_server(config))
}

/// Resolve the catalog path from a flag or the environment and load it.
fn open_catalog(file: Option<PathBuf>) -> Result<FoodCatalog> {
    let path = match file {
        Some(path) => path,
        None => Config::load()?.catalog_path,
    };
    load_catalog(path)
}

/// Generate plans in the terminal.
fn cmd_recommend(args: RecommendArgs) -> Result<()> {
    let catalog = open_catalog(args.file)?;
    if catalog.is_empty() {
        println!("Catalog has no foods; every meal will be empty.");
    }

    let profile = collect_profile(ProfileDraft {
        name: args.name,
        age: args.age,
        weight_kg: args.weight,
        height_cm: args.height,
        activity_level: args.activity,
        preference: args.preference,
        disease: args.disease,
    })?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    loop {
        let plan = recommend_meals(&catalog, &profile, &mut rng);
        info!(items = plan.item_count(), "Plan generated");
        display_meal_plan(&profile, &plan);

        // Seeded runs are scripted: one plan, no prompt.
        if args.seed.is_some() || !prompt_yes_no("Generate another plan?", false)? {
            break;
        }
    }

    Ok(())
}

/// Print catalog counts.
fn cmd_catalog(file: Option<PathBuf>) -> Result<()> {
    let catalog = open_catalog(file)?;
    display_catalog_summary(&catalog.summary());
    Ok(())
}
