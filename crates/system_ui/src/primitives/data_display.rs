use chrono::{DateTime, FixedOffset, Local};
use locale_format::{format_relative_time_in, group_thousands_with, DisplayLocale};

use super::*;
use crate::use_theme;

#[component]
/// Relative timestamp ("5 minutes ago") with the full instant in `datetime`.
///
/// Re-renders whenever `now` changes; without a `now` signal the text is computed once
/// against the local clock.
pub fn TimeAgo(
    timestamp: DateTime<FixedOffset>,
    #[prop(optional, into)] now: Option<Signal<DateTime<Local>>>,
    #[prop(optional)] locale: Option<DisplayLocale>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let locale = locale.unwrap_or_else(|| use_theme().locale);
    let machine_time = timestamp.to_rfc3339();
    let fallback = machine_time.clone();
    let local_time = timestamp.with_timezone(&Local);

    let text = move || {
        let now = now.map(|now| now.get()).unwrap_or_else(Local::now);
        format_relative_time_in(locale, &local_time, &now).unwrap_or_else(|err| {
            logging::warn!("relative time render failed for {fallback}: {err}");
            locale.render_digits(&fallback)
        })
    };

    view! {
        <time
            class=merge_layout_class("ui-time-ago", layout_class)
            datetime=machine_time
            data-ui-primitive="true"
            data-ui-kind="time-ago"
        >
            {text}
        </time>
    }
}

#[component]
/// Integer amount with thousands separators in the theme's digit script.
pub fn Amount(
    #[prop(into)] value: MaybeSignal<i64>,
    #[prop(optional, into)] unit: Option<String>,
    #[prop(optional)] locale: Option<DisplayLocale>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let locale = locale.unwrap_or_else(|| use_theme().locale);

    view! {
        <span
            class=merge_layout_class("ui-amount", layout_class)
            data-ui-primitive="true"
            data-ui-kind="amount"
        >
            <bdi data-ui-slot="value">{move || group_thousands_with(value.get(), locale)}</bdi>
            {unit.map(|unit| view! { <span data-ui-slot="unit">{unit}</span> })}
        </span>
    }
}
