//! Cart ledger integration tests over a real SQLite database
//!
//! Exercises the repository layer directly: lazy cart creation, line
//! upserts with qty clamping and refresh-on-touch repricing, removal,
//! and the derived-totals invariants after mutation sequences.

use basket_server::db::DbService;
use basket_server::db::repository::{RepoError, cart, user};
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn setup() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("basket.db");
    let db = DbService::new(db_path.to_str().expect("utf-8 path"))
        .await
        .expect("open database");
    (dir, db.pool)
}

async fn create_user(pool: &SqlitePool, phone: &str) -> i64 {
    user::create_with_profile(pool, phone, "Buraidah")
        .await
        .expect("create user")
        .id
}

async fn insert_category(pool: &SqlitePool, name: &str) -> i64 {
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO category (id, name, created_at) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(name)
        .bind(shared::util::now_millis())
        .execute(pool)
        .await
        .expect("insert category");
    id
}

async fn insert_product(
    pool: &SqlitePool,
    category_id: i64,
    name: &str,
    price: f64,
    compare_at_price: Option<f64>,
) -> i64 {
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO product (id, name, category_id, price, compare_at_price, is_active, created_at) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
    )
    .bind(id)
    .bind(name)
    .bind(category_id)
    .bind(price)
    .bind(compare_at_price)
    .bind(shared::util::now_millis())
    .execute(pool)
    .await
    .expect("insert product");
    id
}

async fn set_product_price(pool: &SqlitePool, product_id: i64, price: f64) {
    sqlx::query("UPDATE product SET price = ? WHERE id = ?")
        .bind(price)
        .bind(product_id)
        .execute(pool)
        .await
        .expect("update price");
}

#[tokio::test]
async fn get_or_create_is_idempotent() {
    let (_dir, pool) = setup().await;
    let user_id = create_user(&pool, "0500000001").await;

    let first = cart::get_or_create(&pool, user_id).await.expect("first");
    let second = cart::get_or_create(&pool, user_id).await.expect("second");

    assert_eq!(first.id, second.id);
    assert_eq!(second.total, 0.0);
    assert_eq!(second.savings, 0.0);
}

#[tokio::test]
async fn add_item_snapshots_price_and_recomputes_totals() {
    let (_dir, pool) = setup().await;
    let user_id = create_user(&pool, "0500000002").await;
    let cat = insert_category(&pool, "essentials").await;
    let oil = insert_product(&pool, cat, "oil", 18.0, Some(22.0)).await;

    let detail = cart::add_item(&pool, user_id, oil, Some(2))
        .await
        .expect("add");

    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.items[0].qty, 2);
    assert_eq!(detail.items[0].unit_price, 18.0);
    assert_eq!(detail.cart.total, 36.0);
    assert_eq!(detail.cart.savings, 8.0);
}

#[tokio::test]
async fn qty_below_one_is_clamped() {
    let (_dir, pool) = setup().await;
    let user_id = create_user(&pool, "0500000003").await;
    let cat = insert_category(&pool, "essentials").await;
    let rice = insert_product(&pool, cat, "rice", 25.0, Some(32.0)).await;

    let detail = cart::add_item(&pool, user_id, rice, Some(0))
        .await
        .expect("add qty 0");
    assert_eq!(detail.items[0].qty, 1);

    let detail = cart::add_item(&pool, user_id, rice, Some(-5))
        .await
        .expect("add qty -5");
    assert_eq!(detail.items[0].qty, 1);

    let detail = cart::add_item(&pool, user_id, rice, None)
        .await
        .expect("add qty default");
    assert_eq!(detail.items[0].qty, 1);
    assert_eq!(detail.cart.total, 25.0);
}

#[tokio::test]
async fn re_add_overwrites_qty_and_reprices_the_line() {
    let (_dir, pool) = setup().await;
    let user_id = create_user(&pool, "0500000004").await;
    let cat = insert_category(&pool, "essentials").await;
    let sugar = insert_product(&pool, cat, "sugar", 18.0, Some(22.0)).await;

    cart::add_item(&pool, user_id, sugar, Some(2))
        .await
        .expect("first add");

    // Price changes between touches: the line re-snapshots on re-add
    set_product_price(&pool, sugar, 20.0).await;
    let detail = cart::add_item(&pool, user_id, sugar, Some(3))
        .await
        .expect("second add");

    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.items[0].qty, 3);
    assert_eq!(detail.items[0].unit_price, 20.0);
    assert_eq!(detail.cart.total, 60.0);
    assert_eq!(detail.cart.savings, 6.0); // (22 - 20) * 3
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let (_dir, pool) = setup().await;
    let user_id = create_user(&pool, "0500000005").await;

    let err = cart::add_item(&pool, user_id, 999_999, Some(1))
        .await
        .expect_err("missing product");
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn inactive_product_is_not_found() {
    let (_dir, pool) = setup().await;
    let user_id = create_user(&pool, "0500000006").await;
    let cat = insert_category(&pool, "essentials").await;
    let salt = insert_product(&pool, cat, "salt", 3.0, Some(4.0)).await;
    sqlx::query("UPDATE product SET is_active = 0 WHERE id = ?")
        .bind(salt)
        .execute(&pool)
        .await
        .expect("deactivate");

    let err = cart::add_item(&pool, user_id, salt, Some(1))
        .await
        .expect_err("inactive product");
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn remove_line_recomputes_and_absent_line_is_noop() {
    let (_dir, pool) = setup().await;
    let user_id = create_user(&pool, "0500000007").await;
    let cat = insert_category(&pool, "cleaners").await;
    let tissue = insert_product(&pool, cat, "tissue", 12.0, Some(16.0)).await;
    let soap = insert_product(&pool, cat, "soap", 30.0, Some(38.0)).await;

    cart::add_item(&pool, user_id, tissue, Some(1))
        .await
        .expect("add tissue");
    let detail = cart::add_item(&pool, user_id, soap, Some(1))
        .await
        .expect("add soap");
    assert_eq!(detail.cart.total, 42.0);

    let line_id = detail
        .items
        .iter()
        .find(|l| l.product_id == tissue)
        .expect("tissue line")
        .id;
    let detail = cart::remove_item(&pool, user_id, line_id)
        .await
        .expect("remove");
    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.cart.total, 30.0);
    assert_eq!(detail.cart.savings, 8.0);

    // Removing the same line again changes nothing
    let detail = cart::remove_item(&pool, user_id, line_id)
        .await
        .expect("remove again");
    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.cart.total, 30.0);
    assert_eq!(detail.cart.savings, 8.0);
}

#[tokio::test]
async fn totals_hold_after_a_mutation_sequence() {
    let (_dir, pool) = setup().await;
    let user_id = create_user(&pool, "0500000008").await;
    let cat = insert_category(&pool, "essentials").await;
    let a = insert_product(&pool, cat, "a", 5.0, Some(7.0)).await;
    let b = insert_product(&pool, cat, "b", 10.0, None).await;
    let c = insert_product(&pool, cat, "c", 3.5, Some(4.0)).await;

    cart::add_item(&pool, user_id, a, Some(2)).await.expect("a");
    cart::add_item(&pool, user_id, b, Some(1)).await.expect("b");
    let detail = cart::add_item(&pool, user_id, c, Some(4)).await.expect("c");
    // 5*2 + 10 + 3.5*4 = 34, savings 2*2 + 0 + 0.5*4 = 6
    assert_eq!(detail.cart.total, 34.0);
    assert_eq!(detail.cart.savings, 6.0);

    // Overwrite a, drop b
    cart::add_item(&pool, user_id, a, Some(1)).await.expect("a again");
    let b_line = detail
        .items
        .iter()
        .find(|l| l.product_id == b)
        .expect("b line")
        .id;
    let detail = cart::remove_item(&pool, user_id, b_line)
        .await
        .expect("remove b");

    // 5 + 3.5*4 = 19, savings 2 + 0.5*4 = 4
    assert_eq!(detail.cart.total, 19.0);
    assert_eq!(detail.cart.savings, 4.0);

    // The derived fields always match a from-scratch recompute
    let expected_total: f64 = detail
        .items
        .iter()
        .map(|l| l.unit_price * l.qty as f64)
        .sum();
    assert_eq!(detail.cart.total, expected_total);
}

#[tokio::test]
async fn product_without_compare_at_price_contributes_zero_savings() {
    let (_dir, pool) = setup().await;
    let user_id = create_user(&pool, "0500000009").await;
    let cat = insert_category(&pool, "other").await;
    let tea = insert_product(&pool, cat, "tea", 10.0, None).await;

    let detail = cart::add_item(&pool, user_id, tea, Some(3))
        .await
        .expect("add");
    assert_eq!(detail.cart.total, 30.0);
    assert_eq!(detail.cart.savings, 0.0);
}

#[tokio::test]
async fn carts_are_isolated_per_user() {
    let (_dir, pool) = setup().await;
    let alice = create_user(&pool, "0500000010").await;
    let bob = create_user(&pool, "0500000011").await;
    let cat = insert_category(&pool, "produce").await;
    let dates = insert_product(&pool, cat, "dates", 20.0, Some(25.0)).await;

    cart::add_item(&pool, alice, dates, Some(1))
        .await
        .expect("alice add");

    let bob_detail = cart::get_detail(&pool, bob).await.expect("bob cart");
    assert!(bob_detail.items.is_empty());
    assert_eq!(bob_detail.cart.total, 0.0);
}
