use clap::Subcommand;
use ua_core::SortDirection;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List users, optionally filtered by name and creation date
    List {
        /// Name fragment to search for
        #[arg(long, default_value = "")]
        search: String,

        /// Created on (or from) this day, dd-MM-yyyy or yyyy-MM-dd
        #[arg(long)]
        from: Option<String>,

        /// Created up to this day; requires --from
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Order by creation date (asc or desc)
        #[arg(long)]
        sort: Option<SortDirection>,
    },

    /// Register a new user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },

    /// Change an existing user's data
    Update {
        /// User ID
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Remove a user
    Delete {
        /// User ID
        id: i64,
    },
}
