//! Demo catalog seed
//!
//! 启动时可选写入演示目录：四个规范分类加十个示例商品。
//! 幂等：商品表非空时直接跳过。

use super::repository::RepoResult;
use sqlx::SqlitePool;

/// Canonical category names, matching the allocator's buckets
const CATEGORIES: [&str; 4] = ["essentials", "cleaners", "produce", "other"];

/// (name, category, price, compare_at_price)
const SAMPLE_PRODUCTS: [(&str, &str, f64, f64); 10] = [
    ("أرز 5 كجم", "essentials", 25.0, 32.0),
    ("زيت 1.5 لتر", "essentials", 18.0, 22.0),
    ("سكر 5 كجم", "essentials", 24.0, 30.0),
    ("مكرونة 500 جم", "essentials", 5.0, 7.0),
    ("ملح 1 كجم", "essentials", 3.0, 4.0),
    ("مناديل 10 رول", "cleaners", 12.0, 16.0),
    ("مسحوق غسيل 3 كجم", "cleaners", 30.0, 38.0),
    ("مناديل مطبخ 6 رول", "cleaners", 11.0, 14.0),
    ("تمر سكري 1 كجم", "produce", 20.0, 25.0),
    ("شاي 100 كيس", "other", 10.0, 14.0),
];

/// Seed the canonical categories and the demo products
pub async fn seed_demo(pool: &SqlitePool) -> RepoResult<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::info!("Catalog already populated, skipping demo seed");
        return Ok(());
    }

    let now = shared::util::now_millis();

    for name in CATEGORIES {
        sqlx::query(
            "INSERT INTO category (id, name, created_at) VALUES (?1, ?2, ?3) ON CONFLICT(name) DO NOTHING",
        )
        .bind(shared::util::snowflake_id())
        .bind(name)
        .bind(now)
        .execute(pool)
        .await?;
    }

    for (name, category, price, compare_at_price) in SAMPLE_PRODUCTS {
        let category_id: i64 = sqlx::query_scalar("SELECT id FROM category WHERE name = ?")
            .bind(category)
            .fetch_one(pool)
            .await?;

        sqlx::query(
            "INSERT INTO product (id, name, category_id, price, compare_at_price, is_active, created_at) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
        )
        .bind(shared::util::snowflake_id())
        .bind(name)
        .bind(category_id)
        .bind(price)
        .bind(compare_at_price)
        .bind(now)
        .execute(pool)
        .await?;
    }

    tracing::info!("Demo catalog seeded ({} products)", SAMPLE_PRODUCTS.len());
    Ok(())
}
