//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod completions;
pub mod context;
pub mod friends;
pub mod home;
pub mod images;
pub mod profile;
pub mod status;
pub mod users;

pub use args::{AnswerArg, FriendStatusArg, GlobalOptions, OutputFormat, PaginationArgs};
pub use context::CommandContext;

/// PickMe CLI - your PickMe account from the terminal
#[derive(Parser, Debug)]
#[command(name = "pickme")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "PICKME_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "PICKME_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "PICKME_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PICKME_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email (prompted when omitted)
        #[arg(long, short)]
        email: Option<String>,
    },

    /// Create a new account
    Register {
        /// Account email (prompted when omitted)
        #[arg(long, short)]
        email: Option<String>,

        /// Public alias (prompted when omitted)
        #[arg(long, short)]
        alias: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show configuration and session status
    Status,

    /// Display version information
    Version,

    /// View and edit profiles
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// List and post images
    #[command(subcommand)]
    Images(ImageCommands),

    /// Manage friends and friend requests
    #[command(subcommand)]
    Friends(FriendCommands),

    /// Find users
    #[command(subcommand)]
    Users(UserCommands),

    /// Load your profile, friends and images at once
    Home {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show your profile, or another user's
    Show {
        /// User ID (defaults to yourself)
        user_id: Option<String>,
    },

    /// Update fields of your profile
    Update(ProfileUpdateArgs),
}

/// Profile fields to change; omitted fields are left untouched
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub alias: Option<String>,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birthdate: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub pronouns: Option<String>,

    /// Avatar image URL
    #[arg(long)]
    pub avatar: Option<String>,

    /// Make the profile visible to everyone
    #[arg(long, conflicts_with = "private")]
    pub public: bool,

    /// Hide the profile from non-friends
    #[arg(long)]
    pub private: bool,
}

/// Image subcommands
#[derive(Subcommand, Debug)]
pub enum ImageCommands {
    /// List your images, or another user's
    List {
        /// User ID (defaults to yourself)
        #[arg(long)]
        user: Option<String>,

        /// Only pinned images
        #[arg(long)]
        pinned: bool,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Post an image by link
    Add {
        /// Public URL of the image
        link: String,

        /// Pin the image to your profile
        #[arg(long)]
        pin: bool,
    },
}

/// Friend subcommands
#[derive(Subcommand, Debug)]
pub enum FriendCommands {
    /// List friendships
    List {
        /// Friendship state to list
        #[arg(long, value_enum, default_value = "accepted")]
        status: FriendStatusArg,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// List incoming friend requests
    Requests,

    /// Send a friend request
    Add {
        /// User ID to befriend
        user_id: String,
    },

    /// Accept or decline a friend request
    Respond {
        /// User ID of the requester
        user_id: String,

        #[arg(value_enum)]
        answer: AnswerArg,
    },

    /// Remove a friend
    Remove {
        /// User ID of the friend
        user_id: String,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Search users by alias
    Search {
        query: String,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show activity counters of a user
    Stats {
        /// User ID (defaults to yourself)
        user_id: Option<String>,
    },
}
