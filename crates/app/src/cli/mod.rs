use clap::{Parser, Subcommand};

mod item;
mod migrate;

#[derive(Debug, Parser)]
#[command(name = "emporium-app", about = "Emporium admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate(migrate::MigrateArgs),

    /// Manage the item catalog
    Item(item::ItemCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Migrate(args) => migrate::run(args).await,
            Commands::Item(command) => item::run(command).await,
        }
    }
}
