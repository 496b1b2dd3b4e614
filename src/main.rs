//! PickMe CLI - your PickMe account from the terminal

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;

use cli::{
    Cli, Commands, FriendCommands, GlobalOptions, ImageCommands, ProfileCommands, UserCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// Log to stderr. `--debug` turns on debug output for this crate, otherwise
/// `RUST_LOG` applies with warnings as the default.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("pickme", LevelFilter::Debug);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email } => cli::auth::login(&opts, email).await,
        Commands::Register { email, alias } => cli::auth::register(&opts, email, alias).await,
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Status => cli::status::run(&opts).await,
        Commands::Version => {
            println!("pickme version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::Show { user_id } => cli::profile::show(&opts, user_id.as_deref()).await,
            ProfileCommands::Update(args) => cli::profile::update(&opts, args).await,
        },
        Commands::Images(cmd) => match cmd {
            ImageCommands::List {
                user,
                pinned,
                pagination,
            } => cli::images::list(&opts, user.as_deref(), pinned, &pagination).await,
            ImageCommands::Add { link, pin } => cli::images::add(&opts, &link, pin).await,
        },
        Commands::Friends(cmd) => match cmd {
            FriendCommands::List { status, pagination } => {
                cli::friends::list(&opts, status, &pagination).await
            }
            FriendCommands::Requests => cli::friends::requests(&opts).await,
            FriendCommands::Add { user_id } => cli::friends::add(&opts, &user_id).await,
            FriendCommands::Respond { user_id, answer } => {
                cli::friends::respond(&opts, &user_id, answer).await
            }
            FriendCommands::Remove { user_id } => cli::friends::remove(&opts, &user_id).await,
        },
        Commands::Users(cmd) => match cmd {
            UserCommands::Search { query, pagination } => {
                cli::users::search(&opts, &query, &pagination).await
            }
            UserCommands::Stats { user_id } => cli::users::stats(&opts, user_id).await,
        },
        Commands::Home { pagination } => cli::home::run(&opts, &pagination).await,
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
