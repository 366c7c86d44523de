use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use proply::cli::compare::CompareOptions;
use proply::cli::currency::{CurrencyAction, SetOptions};
use proply::cli::listings::ListingOptions;
use proply::core::currency::SymbolPosition;
use proply::core::filter::ListingView;
use proply::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Browse and filter the listing catalog
    Listings {
        /// Case-insensitive match against listing name or type
        #[arg(short, long)]
        keyword: Option<String>,

        /// Exact property type; "All" disables the filter
        #[arg(short = 't', long = "type")]
        property_type: Option<String>,

        /// Lower price bound in GHS, inclusive
        #[arg(long)]
        min_price: Option<String>,

        /// Upper price bound in GHS, inclusive
        #[arg(long)]
        max_price: Option<String>,

        /// Bedroom count, or "4+" for four or more
        #[arg(short, long)]
        bedrooms: Option<String>,

        /// Listing view to browse
        #[arg(long, value_enum, default_value_t)]
        view: ViewArg,
    },
    /// Compare listings side by side
    Compare {
        /// Listing id to compare; repeat for several
        #[arg(short, long = "id")]
        ids: Vec<u32>,

        /// Top up with the first listings not already selected
        #[arg(short, long)]
        fill: bool,
    },
    /// Show or change how prices are displayed
    Currency {
        #[command(subcommand)]
        action: Option<CurrencyCommand>,
    },
}

#[derive(Subcommand)]
enum CurrencyCommand {
    /// Print the active settings with a formatting preview
    Show,
    /// Persist new settings; omitted fields keep their current value
    Set {
        /// Currency symbol, e.g. "GH₵" or "$"
        #[arg(long)]
        symbol: Option<String>,

        /// Where the symbol goes relative to the amount
        #[arg(long, value_enum)]
        position: Option<PositionArg>,

        /// Separator between digit groups
        #[arg(long)]
        thousand_separator: Option<String>,

        /// Separator before the fraction
        #[arg(long)]
        decimal_separator: Option<String>,

        /// Number of fraction digits
        #[arg(long)]
        decimals: Option<u8>,
    },
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum ViewArg {
    #[default]
    All,
    Sale,
    Rent,
    Land,
}

impl From<ViewArg> for ListingView {
    fn from(view: ViewArg) -> ListingView {
        match view {
            ViewArg::All => ListingView::All,
            ViewArg::Sale => ListingView::Sale,
            ViewArg::Rent => ListingView::Rent,
            ViewArg::Land => ListingView::Land,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PositionArg {
    Before,
    After,
}

impl From<PositionArg> for SymbolPosition {
    fn from(position: PositionArg) -> SymbolPosition {
        match position {
            PositionArg::Before => SymbolPosition::Before,
            PositionArg::After => SymbolPosition::After,
        }
    }
}

impl From<Commands> for proply::AppCommand {
    fn from(cmd: Commands) -> proply::AppCommand {
        match cmd {
            Commands::Listings {
                keyword,
                property_type,
                min_price,
                max_price,
                bedrooms,
                view,
            } => proply::AppCommand::Listings(ListingOptions {
                keyword,
                property_type,
                min_price,
                max_price,
                bedrooms,
                view: view.into(),
            }),
            Commands::Compare { ids, fill } => {
                proply::AppCommand::Compare(CompareOptions { ids, fill })
            }
            Commands::Currency { action } => {
                let action = match action {
                    None | Some(CurrencyCommand::Show) => CurrencyAction::Show,
                    Some(CurrencyCommand::Set {
                        symbol,
                        position,
                        thousand_separator,
                        decimal_separator,
                        decimals,
                    }) => CurrencyAction::Set(SetOptions {
                        symbol,
                        position: position.map(Into::into),
                        thousand_separator,
                        decimal_separator,
                        decimals,
                    }),
                };
                proply::AppCommand::Currency(action)
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => proply::cli::setup::setup(),
        Some(cmd) => proply::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
