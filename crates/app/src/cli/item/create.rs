use clap::Args;
use emporium_app::{
    database::{self, Db},
    domain::items::{ItemsService, PgItemsService, data::NewItem, records::ItemUuid},
};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateItemArgs {
    /// Item display name
    #[arg(long)]
    name: String,

    /// Unit price, e.g. `2.99`
    #[arg(long)]
    price: Decimal,

    /// Optional description
    #[arg(long)]
    description: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional item UUID; generated when omitted
    #[arg(long)]
    item_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateItemArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgItemsService::new(Db::new(pool));

    let item = service
        .create_item(NewItem {
            uuid: args.item_uuid.map_or_else(ItemUuid::new, ItemUuid::from_uuid),
            name: args.name,
            price: args.price,
            description: args.description,
        })
        .await
        .map_err(|error| format!("failed to create item: {error}"))?;

    println!("item_uuid: {}", item.uuid);
    println!("item_name: {}", item.name);
    println!("item_price: {}", item.price);

    Ok(())
}
