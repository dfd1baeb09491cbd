use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// NutriGraph: daily meal recommendations from a food catalog and a health profile.
#[derive(Parser, Debug)]
#[command(name = "nutrigraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP recommendation service.
    Serve(ServeArgs),

    /// Build one plan in the terminal, prompting for missing profile fields.
    Recommend(RecommendArgs),

    /// Summarize the food catalog.
    Catalog {
        /// Path to the food catalog (.json or .csv).
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve(ServeArgs::default())
    }
}

/// Overrides for the environment-driven server config.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on (overrides PORT).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to the food catalog (overrides NUTRI_CATALOG).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Allowed CORS origin (overrides NUTRI_CORS_ORIGIN).
    #[arg(long)]
    pub cors_origin: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct RecommendArgs {
    /// Path to the food catalog (.json or .csv).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub age: Option<u32>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimetres.
    #[arg(long)]
    pub height: Option<f64>,

    /// low, moderate or high.
    #[arg(long)]
    pub activity: Option<String>,

    /// vegetarian, non_vegetarian or both.
    #[arg(long)]
    pub preference: Option<String>,

    /// Free-text conditions, e.g. "diabetes".
    #[arg(long)]
    pub disease: Option<String>,

    /// Seed for a reproducible plan.
    #[arg(long)]
    pub seed: Option<u64>,
}
