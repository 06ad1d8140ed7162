//! Integration tests for the first-run seed.

use inventory_db::models::category::CreateCategory;
use inventory_db::repositories::{AssetRepo, CategoryRepo};
use inventory_db::seed_demo_data;
use rust_decimal::Decimal;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeds_empty_database_once(pool: PgPool) {
    assert!(seed_demo_data(&pool).await.unwrap());

    let categories = CategoryRepo::list(&pool).await.unwrap();
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Electronics", "Furniture", "Vehicles"]);

    let assets = AssetRepo::list(&pool).await.unwrap();
    assert_eq!(assets.len(), 3);
    assert_eq!(assets[0].name, "Laptop");
    assert_eq!(assets[0].value, Decimal::new(120_000, 2));
    assert_eq!(assets[0].category.name, "Electronics");
    assert_eq!(assets[2].name, "Car");
    assert_eq!(assets[2].category.name, "Vehicles");

    // A second run is a no-op.
    assert!(!seed_demo_data(&pool).await.unwrap());
    assert_eq!(CategoryRepo::list(&pool).await.unwrap().len(), 3);
    assert_eq!(AssetRepo::list(&pool).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn populated_database_is_left_untouched(pool: PgPool) {
    CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Existing".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(!seed_demo_data(&pool).await.unwrap());

    let categories = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Existing");
    assert!(AssetRepo::list(&pool).await.unwrap().is_empty());
}
