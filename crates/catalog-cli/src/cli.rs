use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Filter and sort dataset catalog cards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the card file (or set CATALOG_FILE env var)
    #[arg(short, long, value_name = "FILE", env = "CATALOG_FILE", global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the filtered and sorted cards
    View(ViewArgs),
    /// List the field names accepted by --sort
    Fields,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Range bounds are taken as raw text: anything that does not parse is
/// treated as "no bound", the same way the filter form behaves.
#[derive(Args, Default)]
pub struct ViewArgs {
    /// Case-insensitive name substring
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub size_from: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub size_to: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub rows_from: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub rows_to: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub columns_from: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub columns_to: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub views_from: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub views_to: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub downloads_from: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub downloads_to: Option<String>,

    /// Creation date lower bound (YYYY-MM-DD)
    #[arg(long)]
    pub created_from: Option<String>,
    /// Creation date upper bound (YYYY-MM-DD)
    #[arg(long)]
    pub created_to: Option<String>,

    /// Modification date lower bound (YYYY-MM-DD)
    #[arg(long)]
    pub modified_from: Option<String>,
    /// Modification date upper bound (YYYY-MM-DD)
    #[arg(long)]
    pub modified_to: Option<String>,

    /// Field to sort by; an empty value disables sorting
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort order (asc or desc)
    #[arg(long)]
    pub order: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Cards per page; 0 shows everything
    #[arg(long)]
    pub per_page: Option<usize>,
}
