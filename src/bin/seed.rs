use product_catalog::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::products::Category,
    models::Product,
    services::product_service,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    if !product_service::all(&orm).await?.is_empty() {
        println!("Products already present, nothing to seed");
        return Ok(());
    }

    let samples = [
        ("Fedora", "A classic felt hat", Decimal::new(5995, 2), true, Category::Cloths),
        ("Apple", "Crisp red apple", Decimal::new(75, 2), true, Category::Food),
        ("Skillet", "Cast iron frying pan", Decimal::new(3450, 2), false, Category::Housewares),
        ("Wiper Blades", "Pair of 22 inch blades", Decimal::new(1899, 2), true, Category::Automotive),
        ("Hammer", "16 oz claw hammer", Decimal::new(1250, 2), true, Category::Tools),
    ];

    for (name, description, price, available, category) in samples {
        let mut product = Product {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        };
        product_service::create(&orm, &mut product).await?;
    }

    println!("Seed completed. {} products created", samples.len());
    Ok(())
}
