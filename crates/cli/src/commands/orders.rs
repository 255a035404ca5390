//! The orders and new-order pages.

use std::time::Instant;

use samovar_client::ApiClient;
use samovar_client::models::{NewOrder, NewOrderItem};
use samovar_client::resources::OrderBook;
use samovar_core::alert::AlertFeed;
use samovar_core::format::to_persian_digits;
use samovar_core::{OrderId, OrderStatus, ProductId, Toman};

use super::CommandResult;
use crate::render;

/// List orders, optionally narrowed to one status.
///
/// # Errors
///
/// Propagates the underlying client error.
pub async fn list(api: &ApiClient, status: Option<&str>) -> CommandResult {
    let book = OrderBook::new(api.clone());
    let filter = status.map(OrderStatus::from);
    let orders = {
        let _spinner = render::Spinner::show();
        book.load(filter.as_ref()).await?
    };
    render::orders(&orders);
    Ok(())
}

/// Place a new order from `product-id=quantity` pairs.
///
/// # Errors
///
/// Returns a parse error for malformed items; otherwise propagates the
/// underlying client error.
pub async fn create(
    api: &ApiClient,
    table: Option<u32>,
    discount: i64,
    raw_items: &[String],
    alerts: &mut AlertFeed,
) -> CommandResult {
    let mut items = Vec::with_capacity(raw_items.len());
    for raw in raw_items {
        items.push(parse_item(raw)?);
    }

    let order = OrderBook::new(api.clone())
        .create(&NewOrder {
            table_number: table,
            items,
            discount: Toman::new(discount),
        })
        .await?;

    alerts.success(
        format!(
            "سفارش {} با موفقیت ثبت شد",
            to_persian_digits(&order.id.to_string())
        ),
        Instant::now(),
    );
    Ok(())
}

/// Move an order to a new status.
///
/// # Errors
///
/// Propagates the underlying client error.
pub async fn set_status(
    api: &ApiClient,
    id: i32,
    status: &str,
    alerts: &mut AlertFeed,
) -> CommandResult {
    OrderBook::new(api.clone())
        .update_status(OrderId::new(id), OrderStatus::from(status))
        .await?;
    alerts.success("وضعیت سفارش به‌روزرسانی شد", Instant::now());
    Ok(())
}

fn parse_item(raw: &str) -> Result<NewOrderItem, String> {
    let (id, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid item '{raw}', expected product-id=quantity"))?;
    let product_id: i32 = id
        .trim()
        .parse()
        .map_err(|e| format!("invalid product id '{id}': {e}"))?;
    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|e| format!("invalid quantity '{quantity}': {e}"))?;
    Ok(NewOrderItem {
        product_id: ProductId::new(product_id),
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_quantity_pairs() {
        let item = parse_item("3=2").expect("valid item");
        assert_eq!(item.product_id, ProductId::new(3));
        assert_eq!(item.quantity, 2);

        let item = parse_item(" 12 = 1 ").expect("whitespace is fine");
        assert_eq!(item.product_id, ProductId::new(12));
    }

    #[test]
    fn rejects_malformed_items() {
        assert!(parse_item("3").is_err());
        assert!(parse_item("x=2").is_err());
        assert!(parse_item("3=many").is_err());
    }
}
