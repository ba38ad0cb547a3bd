use chrono::{Duration, FixedOffset, TimeZone};
use locale_format::{
    format_relative_time_at, format_relative_time_in, group_thousands, to_latin_digits,
    to_persian_digits, DisplayLocale, PERSIAN_DIGITS,
};
use pretty_assertions::assert_eq;

#[test]
fn latin_strings_survive_a_persian_round_trip() {
    let samples = ["0", "7", "1403", "09123456789", "3.14159", "2026-10-19"];
    for sample in samples {
        assert_eq!(to_latin_digits(to_persian_digits(sample)), sample);
    }
}

#[test]
fn digit_glyphs_map_by_ordinal_position() {
    for (value, glyph) in PERSIAN_DIGITS.iter().enumerate() {
        assert_eq!(to_persian_digits(value), glyph.to_string());
        assert_eq!(to_latin_digits(glyph), value.to_string());
    }
}

#[test]
fn non_digit_characters_pass_through_both_directions() {
    let text = "Order #A-17: سلام, total=$";
    let persian = to_persian_digits(text);
    assert_eq!(persian, "Order #A-۱۷: سلام, total=$");
    assert_eq!(to_latin_digits(&persian), text);
}

#[test]
fn grouping_matches_reference_examples() {
    assert_eq!(group_thousands(1234), to_persian_digits("1,234"));
    assert_eq!(group_thousands(12), to_persian_digits("12"));
    assert_eq!(group_thousands(1_000_000), to_persian_digits("1,000,000"));
}

#[test]
fn relative_time_reference_examples() {
    let zone = FixedOffset::east_opt(0).expect("utc offset");
    let now = zone
        .with_ymd_and_hms(2026, 10, 19, 18, 45, 0)
        .single()
        .expect("valid instant");

    let thirty_seconds = now - Duration::seconds(30);
    assert_eq!(
        format_relative_time_in(DisplayLocale::English, &thirty_seconds, &now).as_deref(),
        Ok("moments ago")
    );

    let five_minutes = now - Duration::minutes(5);
    assert_eq!(
        format_relative_time_in(DisplayLocale::English, &five_minutes, &now).as_deref(),
        Ok("5 minutes ago")
    );
    assert_eq!(
        format_relative_time_at(&five_minutes, &now).as_deref(),
        Ok("۵ دقیقه پیش")
    );

    let two_days = now - Duration::days(2);
    let rendered = format_relative_time_at(&two_days, &now).expect("short date");
    let parts: Vec<&str> = rendered.split(' ').collect();
    assert_eq!(parts, vec!["۲۵", "مهر", "۱۸:۴۵"]);
}
