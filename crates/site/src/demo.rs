//! Demo content and form predicates for the storefront page.

use chrono::{DateTime, Duration, FixedOffset};

#[derive(Debug, Clone, PartialEq)]
/// Message row shown in the demo inbox.
pub struct DemoMessage {
    /// Display name of the sender.
    pub author: &'static str,
    /// Message text.
    pub body: &'static str,
    /// Send instant.
    pub sent_at: DateTime<FixedOffset>,
    /// Order total in tomans.
    pub amount: i64,
}

/// Inbox rows spread across every relative-time bucket, anchored at `now`.
pub fn sample_messages(now: DateTime<FixedOffset>) -> Vec<DemoMessage> {
    vec![
        DemoMessage {
            author: "پشتیبانی",
            body: "سفارش شما ثبت شد.",
            sent_at: now - Duration::seconds(20),
            amount: 1_250_000,
        },
        DemoMessage {
            author: "انبار",
            body: "بسته آماده ارسال است.",
            sent_at: now - Duration::minutes(4),
            amount: 980,
        },
        DemoMessage {
            author: "مالی",
            body: "پرداخت تایید شد.",
            sent_at: now - Duration::minutes(95),
            amount: 45_000,
        },
        DemoMessage {
            author: "پست",
            body: "مرسوله تحویل داده شد.",
            sent_at: now - Duration::days(3),
            amount: 12_345_678,
        },
    ]
}

/// Loose email shape check: one `@` with text on both sides and a dotted domain.
pub(crate) fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty())
}

pub(crate) fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|ch| ch.is_ascii_digit())
        && value.chars().any(char::is_alphabetic)
}

/// Whole part of a normalized numeric field value; empty or malformed input is zero.
pub(crate) fn parse_amount(raw: &str) -> i64 {
    raw.split('.')
        .next()
        .and_then(|whole| whole.parse().ok())
        .unwrap_or(0)
}
