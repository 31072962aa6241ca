use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for fuellog
/// CLI application to record fuel fill-ups and stock deductions of a bus fleet
#[derive(Parser)]
#[command(
    name = "fuellog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record bus-fleet fuel fill-ups and stock deductions into CSV datasets kept in object storage",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Name recorded as the person entering the data
    #[arg(global = true, long = "user", value_name = "NAME")]
    pub user: Option<String>,

    /// Use a local directory as the bucket instead of the configured store
    #[arg(global = true, long = "store-dir", value_name = "DIR")]
    pub store_dir: Option<String>,

    /// Directory for the local copy of each dataset
    #[arg(global = true, long = "mirror-dir", value_name = "DIR")]
    pub mirror_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and local directories
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// List the vehicle numbers of the fleet
    Fleet,

    /// Record a fuel fill-up
    Fill {
        #[command(subcommand)]
        kind: FillKind,
    },

    /// Record a manual deduction of fuel stock for a vehicle
    Deduct {
        #[arg(long = "vehicle", help = "Vehicle number (must belong to the fleet)")]
        vehicle: u32,

        #[arg(long = "liters", help = "Approximate liters consumed")]
        liters: Option<u64>,

        #[arg(long = "comment", help = "Optional comment")]
        comment: Option<String>,
    },

    /// Show a dataset, newest records first
    View {
        #[arg(value_enum)]
        dataset: DatasetChoice,

        #[arg(
            long = "date",
            conflicts_with = "today",
            help = "Only records of this date (DD/MM/YYYY or YYYY-MM-DD)"
        )]
        date: Option<String>,

        #[arg(long = "today", help = "Only today's records")]
        today: bool,

        #[arg(long = "json", help = "Print rows as JSON instead of a table")]
        json: bool,
    },

    /// Print the activity log
    Log {
        #[arg(long = "print", help = "Print the activity log")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum FillKind {
    /// Fuel bought at a pump
    Pump {
        #[arg(long = "vehicle", help = "Vehicle number (must belong to the fleet)")]
        vehicle: u32,

        #[arg(long = "old-seal", default_value_t = 0, help = "Old seal number")]
        old_seal: u64,

        #[arg(long = "liters", default_value_t = 0, help = "Liters loaded")]
        liters: u64,

        #[arg(long = "price", default_value_t = 0, help = "Price paid")]
        price: u64,

        #[arg(long = "new-seal", default_value_t = 0, help = "New seal number")]
        new_seal: u64,

        #[arg(long = "comment", help = "Optional comment")]
        comment: Option<String>,
    },

    /// Fuel loaded from the company tank
    Tank {
        #[arg(long = "vehicle", help = "Vehicle number (must belong to the fleet)")]
        vehicle: u32,

        #[arg(long = "old-seal", default_value_t = 0, help = "Old seal number")]
        old_seal: u64,

        #[arg(long = "meter-start", default_value_t = 0, help = "Tank meter reading before loading")]
        meter_start: u64,

        #[arg(long = "liters", default_value_t = 0, help = "Liters loaded")]
        liters: u64,

        #[arg(long = "meter-end", default_value_t = 0, help = "Tank meter reading after loading")]
        meter_end: u64,

        #[arg(long = "new-seal", default_value_t = 0, help = "New seal number")]
        new_seal: u64,

        #[arg(long = "comment", help = "Optional comment")]
        comment: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DatasetChoice {
    /// Fuel fill-ups
    Fills,
    /// Fuel stock deductions
    Deductions,
}
