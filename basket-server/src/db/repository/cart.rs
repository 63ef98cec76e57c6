//! Cart Repository, the mutable half of the monetary ledger
//!
//! Every mutation runs in one transaction: read the full line set,
//! recompute the derived totals, write them back. The recompute has no
//! memory of prior derived values, so it is idempotent over the current
//! lines.

use super::RepoResult;
use crate::cart_money;
use shared::models::{Cart, CartDetail, CartLineDetail, Product};
use sqlx::{SqliteConnection, SqlitePool};

const CART_SELECT: &str =
    "SELECT id, user_id, total, savings, created_at, updated_at FROM cart";

const LINE_DETAIL_SELECT: &str = "SELECT ci.id, ci.cart_id, ci.product_id, p.name AS product_name, ci.qty, ci.unit_price, p.compare_at_price FROM cart_item ci JOIN product p ON ci.product_id = p.id WHERE ci.cart_id = ? ORDER BY ci.id";

/// Get the user's cart, creating an empty one on first access
pub async fn get_or_create(pool: &SqlitePool, user_id: i64) -> RepoResult<Cart> {
    let mut tx = pool.begin().await?;
    let cart = get_or_create_tx(&mut tx, user_id).await?;
    tx.commit().await?;
    Ok(cart)
}

/// Transaction-scoped get-or-create, shared with the order finalizer
pub(crate) async fn get_or_create_tx(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> RepoResult<Cart> {
    if let Some(cart) = sqlx::query_as::<_, Cart>(&format!("{CART_SELECT} WHERE user_id = ?"))
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await?
    {
        return Ok(cart);
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO cart (id, user_id, total, savings, created_at, updated_at) VALUES (?1, ?2, 0, 0, ?3, ?3)",
    )
    .bind(id)
    .bind(user_id)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    let cart = sqlx::query_as::<_, Cart>(&format!("{CART_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(cart)
}

/// Lines of a cart with product info, in insertion order
pub(crate) async fn lines_tx(
    conn: &mut SqliteConnection,
    cart_id: i64,
) -> RepoResult<Vec<CartLineDetail>> {
    let rows = sqlx::query_as::<_, CartLineDetail>(LINE_DETAIL_SELECT)
        .bind(cart_id)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

/// Full cart view (cart + lines with product info)
pub async fn get_detail(pool: &SqlitePool, user_id: i64) -> RepoResult<CartDetail> {
    let mut tx = pool.begin().await?;
    let cart = get_or_create_tx(&mut tx, user_id).await?;
    let items = lines_tx(&mut tx, cart.id).await?;
    tx.commit().await?;
    Ok(CartDetail { cart, items })
}

/// Add a product to the cart, or overwrite its existing line.
///
/// `qty` below 1 is clamped to 1. An existing line has both qty and
/// unit_price overwritten; unit_price re-snapshots the product's
/// *current* price (refresh-on-touch, not a price lock). The product
/// must exist and be active.
pub async fn add_item(
    pool: &SqlitePool,
    user_id: i64,
    product_id: i64,
    qty: Option<i64>,
) -> RepoResult<CartDetail> {
    let qty = qty.unwrap_or(1).max(1);

    let mut tx = pool.begin().await?;

    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, category_id, price, compare_at_price, is_active, created_at FROM product WHERE id = ?",
    )
    .bind(product_id)
    .fetch_optional(&mut *tx)
    .await?;
    let product = match product {
        Some(p) if p.is_active => p,
        _ => {
            return Err(super::RepoError::NotFound(format!(
                "Product {product_id} not found"
            )));
        }
    };

    let cart = get_or_create_tx(&mut tx, user_id).await?;

    sqlx::query(
        "INSERT INTO cart_item (id, cart_id, product_id, qty, unit_price) VALUES (?1, ?2, ?3, ?4, ?5) ON CONFLICT(cart_id, product_id) DO UPDATE SET qty = excluded.qty, unit_price = excluded.unit_price",
    )
    .bind(shared::util::snowflake_id())
    .bind(cart.id)
    .bind(product_id)
    .bind(qty)
    .bind(product.price)
    .execute(&mut *tx)
    .await?;

    let detail = recompute_tx(&mut tx, cart.id).await?;
    tx.commit().await?;
    Ok(detail)
}

/// Remove a line from the cart; removing an absent line is a no-op
pub async fn remove_item(
    pool: &SqlitePool,
    user_id: i64,
    line_id: i64,
) -> RepoResult<CartDetail> {
    let mut tx = pool.begin().await?;
    let cart = get_or_create_tx(&mut tx, user_id).await?;

    sqlx::query("DELETE FROM cart_item WHERE id = ? AND cart_id = ?")
        .bind(line_id)
        .bind(cart.id)
        .execute(&mut *tx)
        .await?;

    let detail = recompute_tx(&mut tx, cart.id).await?;
    tx.commit().await?;
    Ok(detail)
}

/// Recompute the cart's derived totals from the current line set and
/// persist them. Runs inside the caller's transaction.
async fn recompute_tx(conn: &mut SqliteConnection, cart_id: i64) -> RepoResult<CartDetail> {
    let items = lines_tx(&mut *conn, cart_id).await?;
    let totals = cart_money::recompute(&items);

    let now = shared::util::now_millis();
    sqlx::query("UPDATE cart SET total = ?1, savings = ?2, updated_at = ?3 WHERE id = ?4")
        .bind(totals.total)
        .bind(totals.savings)
        .bind(now)
        .bind(cart_id)
        .execute(&mut *conn)
        .await?;

    let cart = sqlx::query_as::<_, Cart>(&format!("{CART_SELECT} WHERE id = ?"))
        .bind(cart_id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(CartDetail { cart, items })
}
