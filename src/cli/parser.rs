use clap::{Parser, Subcommand};

use crate::models::service::{BathType, PetSize};

/// Command-line interface definition for groombook
#[derive(Parser)]
#[command(
    name = "groombook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pet-grooming shop calendar: bookings, admin blocks and recurring club visits on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// E-mail of the operator, checked against `admin_emails` for admin commands
    #[arg(global = true, long = "as", value_name = "EMAIL")]
    pub as_user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage recurring (club) visits
    Rule {
        #[command(subcommand)]
        action: RuleAction,
    },

    /// Book a grooming appointment for a customer
    Book {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Slot time (HH:MM)
        time: String,

        #[arg(long)]
        client: String,

        #[arg(long)]
        pet: String,

        #[arg(long, default_value = "")]
        breed: String,

        #[arg(long, value_enum)]
        size: PetSize,

        #[arg(long)]
        contact: String,

        #[arg(long, value_enum)]
        bath: BathType,

        #[arg(long)]
        hydration: bool,

        #[arg(long)]
        nails: bool,

        #[arg(long)]
        ears: bool,

        #[arg(long = "notes", default_value = "")]
        notes: String,

        /// The pet's vaccination is NOT up to date (booking will be refused)
        #[arg(long = "not-vaccinated")]
        not_vaccinated: bool,
    },

    /// Block one or more admin-grid slots of a day
    Block {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Times to block (HH:MM ...)
        #[arg(required = true)]
        times: Vec<String>,
    },

    /// List stored bookings and blocks with their ids
    Appointments {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Only this day (default: from today on)")]
        date: Option<String>,

        #[arg(long, help = "Only blocked slots")]
        blocked: bool,
    },

    /// Cancel a booking or lift a block by id (see `appointments`)
    Cancel {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show the free customer slots of a day
    Slots {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },

    /// Show the projected schedule of a day
    Agenda {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,

        #[arg(long, value_name = "YYYY-MM", help = "List the days of a month having appointments")]
        month: Option<String>,

        #[arg(long, help = "Print entries as JSON")]
        json: bool,

        #[arg(long, help = "Merge recurring visits sharing a time into one row")]
        group: bool,
    },
}

#[derive(Subcommand)]
pub enum RuleAction {
    /// Create a recurrence rule
    Add {
        /// Day of week: 0-6 (Sunday = 0) or a Portuguese name ("terça")
        #[arg(long)]
        day: String,

        /// Time (HH:MM), must be a slot of the admin grid
        #[arg(long)]
        time: String,

        #[arg(long)]
        pet: String,

        /// weekly | bi-weekly | monthly (or semanal | quinzenal | mensal)
        #[arg(long, default_value = "weekly")]
        frequency: String,

        #[arg(long)]
        label: Option<String>,

        /// Cycle start date (YYYY-MM-DD); without it the cycle starts "today"
        #[arg(long)]
        start: Option<String>,

        /// Visit number (1-4) on the cycle start date
        #[arg(long, default_value_t = 1)]
        bath: u32,
    },

    /// Delete rules by id
    Del {
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Delete every rule
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List rules
    List,

    /// Bulk import rules from CSV (headers: dayOfWeek,time,petName,frequency)
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl Commands {
    /// Commands reserved to shop administrators.
    pub fn requires_admin(&self) -> bool {
        !matches!(
            self,
            Commands::Init | Commands::Book { .. } | Commands::Slots { .. }
        )
    }
}
