use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for vacaplan
/// CLI application to plan vacations and track working-day balances with SQLite
#[derive(Parser)]
#[command(
    name = "vacaplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "A vacation planning CLI: employees, overlap conflicts, and working-day balances using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage vacations (conflict detection runs before saving)
    Vacation {
        #[command(subcommand)]
        action: VacationAction,
    },

    /// Manage corporate events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Count working days in an inclusive date range
    Workdays {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },

    /// Show used/remaining vacation days for a year
    Balance {
        /// Employee id (all employees when omitted)
        #[arg(long)]
        employee: Option<String>,

        /// Year to aggregate (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Annual allowance override (default from config)
        #[arg(long)]
        allowance: Option<i32>,
    },

    /// Show holiday status, events, and vacations for one day
    Day {
        /// Day to inspect (YYYY-MM-DD)
        date: String,

        /// Only show entries relevant to this employee
        #[arg(long)]
        employee: Option<String>,
    },

    /// List the holiday table
    Holidays {
        /// Restrict to one year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Export the per-employee balance summary
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Year to summarize (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Annual allowance override (default from config)
        #[arg(long)]
        allowance: Option<i32>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee
    Add {
        name: String,

        #[arg(
            long,
            help = "Role: workshop, administration, management, or design"
        )]
        role: Option<String>,

        #[arg(long, help = "4-digit self-service access code")]
        pin: Option<String>,

        #[arg(long, help = "Explicit id (generated when omitted)")]
        id: Option<String>,
    },

    /// List employees
    List,

    /// Delete an employee (cascades to their vacations)
    Del { id: String },

    /// Toggle the incompatibility relation between two employees
    SetIncompat {
        /// Employee whose list is edited
        #[arg(long = "of")]
        of: String,

        /// The other employee
        #[arg(long = "with")]
        with: String,

        /// Remove the relation instead of adding it
        #[arg(long = "off")]
        off: bool,
    },
}

#[derive(Subcommand)]
pub enum VacationAction {
    /// Add a vacation, or update one when --id matches an existing record
    Add {
        /// Owning employee id
        #[arg(long)]
        employee: String,

        /// First day (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: String,

        /// Last day (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: String,

        #[arg(long, help = "Explicit id (generated when omitted)")]
        id: Option<String>,

        #[arg(
            long,
            short = 'f',
            help = "Save even when a conflict is detected (warn policy only)"
        )]
        force: bool,
    },

    /// List vacations with their working-day cost
    List {
        /// Filter by employee id
        #[arg(long)]
        employee: Option<String>,
    },

    /// Delete a vacation by id
    Del { id: String },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Add a corporate event
    Add {
        name: String,

        /// First day (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: String,

        /// Last day (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: String,

        #[arg(long = "global", help = "Event is visible to every employee")]
        global: bool,

        #[arg(
            long = "assign",
            value_delimiter = ',',
            help = "Assigned employee ids (ignored with --global)"
        )]
        assigned: Vec<String>,

        #[arg(long, help = "Explicit id (generated when omitted)")]
        id: Option<String>,
    },

    /// List events
    List,

    /// Delete an event by id
    Del { id: String },
}
