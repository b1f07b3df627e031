use clap::Args;
use emporium_app::{
    database::{self, Db},
    domain::items::{ItemsService, PgItemsService},
};

#[derive(Debug, Args)]
pub(crate) struct ListItemsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListItemsArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let items = PgItemsService::new(Db::new(pool))
        .list_items()
        .await
        .map_err(|error| format!("failed to list items: {error}"))?;

    for item in items {
        println!("{}\t{}\t{}", item.uuid, item.price, item.name);
    }

    Ok(())
}
