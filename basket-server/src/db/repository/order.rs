//! Order Repository, the cart-to-order finalizer
//!
//! `place_from_cart` freezes a non-empty cart into an immutable order.
//! Order creation, line copy, cart line deletion and totals reset all
//! execute inside one transaction; any rejection or failure rolls the
//! whole unit back, leaving the cart in its pre-finalize state.

use super::{RepoError, RepoResult, cart};
use shared::models::{Address, Order, OrderDetail, OrderLine};
use sqlx::SqlitePool;

const ORDER_SELECT: &str =
    "SELECT id, user_id, address_id, total, savings, created_at FROM customer_order";

const ORDER_LINE_SELECT: &str =
    "SELECT id, order_id, product_id, qty, unit_price FROM order_item WHERE order_id = ? ORDER BY id";

/// Finalize the user's cart into an order delivered to `address_id`.
///
/// Rejections, in order: unresolvable address (`NotFound`), address city
/// outside the service area (`PolicyViolation`), empty cart
/// (`InvalidState`). On success the cart is left with zero lines and
/// zero totals.
pub async fn place_from_cart(
    pool: &SqlitePool,
    user_id: i64,
    address_id: i64,
    allowed_city: &str,
) -> RepoResult<OrderDetail> {
    let mut tx = pool.begin().await?;

    let address = sqlx::query_as::<_, Address>(
        "SELECT id, user_id, city, district, street, notes, created_at FROM address WHERE id = ?",
    )
    .bind(address_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Address {address_id} not found")))?;

    if address.city != allowed_city {
        return Err(RepoError::PolicyViolation(format!(
            "Service limited to {allowed_city}"
        )));
    }

    let cart_row = cart::get_or_create_tx(&mut tx, user_id).await?;
    let lines = cart::lines_tx(&mut tx, cart_row.id).await?;
    if lines.is_empty() {
        return Err(RepoError::InvalidState("Cart is empty".into()));
    }

    let now = shared::util::now_millis();
    let order_id = shared::util::snowflake_id();

    // Totals are copied from the cart's derived fields, not recomputed
    sqlx::query(
        "INSERT INTO customer_order (id, user_id, address_id, total, savings, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(order_id)
    .bind(user_id)
    .bind(address_id)
    .bind(cart_row.total)
    .bind(cart_row.savings)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for line in &lines {
        sqlx::query(
            "INSERT INTO order_item (id, order_id, product_id, qty, unit_price) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(shared::util::snowflake_id())
        .bind(order_id)
        .bind(line.product_id)
        .bind(line.qty)
        .bind(line.unit_price)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query("DELETE FROM cart_item WHERE cart_id = ?")
        .bind(cart_row.id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE cart SET total = 0, savings = 0, updated_at = ? WHERE id = ?")
        .bind(now)
        .bind(cart_row.id)
        .execute(&mut *tx)
        .await?;

    let order = sqlx::query_as::<_, Order>(&format!("{ORDER_SELECT} WHERE id = ?"))
        .bind(order_id)
        .fetch_one(&mut *tx)
        .await?;
    let items = sqlx::query_as::<_, OrderLine>(ORDER_LINE_SELECT)
        .bind(order_id)
        .fetch_all(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(OrderDetail { order, items })
}

/// Current user's orders, newest first
pub async fn find_all_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Order>> {
    let rows = sqlx::query_as::<_, Order>(&format!(
        "{ORDER_SELECT} WHERE user_id = ? ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Order with its lines, scoped to the owner
pub async fn find_detail(
    pool: &SqlitePool,
    user_id: i64,
    order_id: i64,
) -> RepoResult<Option<OrderDetail>> {
    let order = sqlx::query_as::<_, Order>(&format!("{ORDER_SELECT} WHERE id = ? AND user_id = ?"))
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    let Some(order) = order else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, OrderLine>(ORDER_LINE_SELECT)
        .bind(order_id)
        .fetch_all(pool)
        .await?;
    Ok(Some(OrderDetail { order, items }))
}
