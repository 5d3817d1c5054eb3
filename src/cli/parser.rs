use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rVolunteer
/// CLI application to log volunteer hours with SQLite
#[derive(Parser)]
#[command(
    name = "rvolunteer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log volunteer hours, get them verified by supervisors and track PVSA recognition",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log volunteer hours
    Add {
        /// Date of the service (YYYY-MM-DD or `today`)
        date: String,

        #[arg(long = "org", help = "Organization you volunteered with")]
        organization: String,

        #[arg(long = "desc", help = "What you did")]
        description: String,

        #[arg(long, help = "Number of hours (e.g. 2.5)")]
        hours: f64,

        #[arg(long)]
        location: Option<String>,

        #[arg(long = "supervisor", help = "Supervisor name")]
        supervisor_name: Option<String>,

        #[arg(long = "supervisor-email", help = "Supervisor e-mail address")]
        supervisor_email: Option<String>,
    },

    /// List your hour entries
    List {
        #[arg(long, conflicts_with = "pending", help = "Only verified entries")]
        verified: bool,

        #[arg(long, help = "Only entries waiting for verification")]
        pending: bool,

        #[arg(long, help = "From date (YYYY-MM-DD, inclusive)")]
        from: Option<String>,

        #[arg(long, help = "To date (YYYY-MM-DD, inclusive)")]
        to: Option<String>,
    },

    /// Show one hour entry, including its verification code
    Show { id: i64 },

    /// Edit one of your hour entries
    Edit {
        id: i64,

        #[arg(long = "org")]
        organization: Option<String>,

        #[arg(long = "desc")]
        description: Option<String>,

        #[arg(long)]
        hours: Option<f64>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long, help = "Location (empty string clears it)")]
        location: Option<String>,

        #[arg(long = "supervisor", help = "Supervisor name (empty string clears it)")]
        supervisor_name: Option<String>,

        #[arg(long = "supervisor-email")]
        supervisor_email: Option<String>,

        #[arg(long, help = "Mark as verified (true) or unverified (false)")]
        verified: Option<bool>,
    },

    /// Delete one of your hour entries
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Verify an entry with the code shared by its owner (no login needed)
    Verify { code: String },

    /// Print your total approved hours
    Total,

    /// Show your PVSA tier, progress and hours to the next tier
    Status,

    /// Show or update your profile (age selects the PVSA age band)
    Profile {
        #[arg(long, conflicts_with = "clear_age")]
        age: Option<u32>,

        #[arg(long = "clear-age")]
        clear_age: bool,

        #[arg(long)]
        name: Option<String>,
    },

    /// Read and manage your notifications
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationAction>,
    },

    /// Export your hour entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Only verified entries")]
        verified: bool,

        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand, Clone)]
pub enum NotificationAction {
    /// List notifications, newest first
    List {
        #[arg(long)]
        unread: bool,

        #[arg(long)]
        limit: Option<i64>,

        #[arg(long)]
        offset: Option<i64>,
    },

    /// Print the number of unread notifications
    Unread,

    /// Mark one notification as read
    Read { id: i64 },

    /// Mark every notification as read
    ReadAll,

    /// Delete one notification
    Delete { id: i64 },
}
