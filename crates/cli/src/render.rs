//! Terminal rendering adapter.
//!
//! All formatting (currency, dates, status text) comes from samovar-core;
//! this module only lays the results out. Keeping it this thin is what
//! lets everything above it run in tests without a terminal.

#![allow(clippy::print_stdout)]

use std::io::Write;

use samovar_client::models::{DashboardStats, Order, Product, ServerInfo, UserAccount, UserProfile};
use samovar_core::alert::{Alert, AlertLevel};
use samovar_core::format::{format_toman, to_persian_digits};
use samovar_core::jalali;

/// Transient in-flight indicator, cleared when dropped.
///
/// The terminal analog of the loading spinner: shown while a request is
/// outstanding, gone as soon as the page content (or an error) replaces
/// it.
pub struct Spinner;

impl Spinner {
    #[must_use]
    pub fn show() -> Self {
        print!("… ");
        let _ = std::io::stdout().flush();
        Self
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        print!("\r");
        let _ = std::io::stdout().flush();
    }
}

/// One line per active alert, newest first.
pub fn alerts(alerts: &[Alert]) {
    for alert in alerts {
        let marker = match alert.level {
            AlertLevel::Info => "·",
            AlertLevel::Success => "✔",
            AlertLevel::Danger => "✘",
        };
        println!("{marker} {}", alert.message);
    }
}

/// Who is signed in, shown at the top of every protected page.
pub fn user_banner(user: &UserProfile) {
    println!("☕ {} ({})\n", user.full_name, user.role);
}

/// Full profile, for `whoami`.
pub fn profile(user: &UserProfile) {
    println!("{} — {}", user.username, user.full_name);
    println!("نقش: {}", user.role);
}

/// The menu, one line per product.
pub fn products(products: &[Product]) {
    for product in products {
        println!(
            "{:>4}  {}  [{}]  {}",
            to_persian_digits(&product.id.to_string()),
            product.name,
            product.category,
            format_toman(product.price),
        );
    }
    println!();
    println!("{} قلم", to_persian_digits(&products.len().to_string()));
}

/// The distinct categories of the current catalog.
pub fn categories(categories: &[String]) {
    if !categories.is_empty() {
        println!("دسته‌ها: {}", categories.join("، "));
    }
}

/// Order listing, one line per order plus its lines indented.
pub fn orders(orders: &[Order]) {
    for order in orders {
        let table = order.table_number.map_or_else(
            || "—".to_owned(),
            |n| to_persian_digits(&format!("میز {n}")),
        );
        println!(
            "#{}  {}  {}  {}  {}",
            to_persian_digits(&order.id.to_string()),
            table,
            order.status.display_text(),
            format_toman(order.total),
            jalali::format_datetime(order.created_at.and_utc()),
        );
        for item in &order.items {
            println!(
                "      {}× {}  {}",
                to_persian_digits(&item.quantity.to_string()),
                item.product_name,
                format_toman(item.total),
            );
        }
    }
}

/// The stat cards of the dashboard page.
pub fn stats(stats: &DashboardStats) {
    println!(
        "📋 {}  سفارشات امروز",
        to_persian_digits(&stats.total_orders_today.to_string())
    );
    println!("💰 {}  فروش امروز", format_toman(stats.total_revenue_today));
    println!(
        "⏳ {}  سفارشات در انتظار",
        to_persian_digits(&stats.pending_orders.to_string())
    );
    println!(
        "☕ {}  محصولات",
        to_persian_digits(&stats.total_products.to_string())
    );
    if stats.total_users > 0 {
        println!(
            "👥 {}  کاربران",
            to_persian_digits(&stats.total_users.to_string())
        );
    }
}

/// Account listing for the admin page.
pub fn users(users: &[UserAccount]) {
    for user in users {
        let state = if user.is_active { "فعال" } else { "غیرفعال" };
        println!(
            "{:>4}  {}  {}  ({})  {}",
            to_persian_digits(&user.id.to_string()),
            user.username,
            user.full_name,
            user.role,
            state,
        );
    }
}

/// Server info for `ping`.
pub fn server_info(info: &ServerInfo) {
    println!("{} v{} — {}", info.name, info.version, info.status);
}
