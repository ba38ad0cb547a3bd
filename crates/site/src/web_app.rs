use std::time::Duration;

use chrono::{DateTime, Local};
use leptos::*;
use leptos_meta::*;
use locale_format::{to_persian_digits, JalaliDate};
use system_ui::prelude::*;

use crate::demo::{is_plausible_email, is_strong_password, parse_amount, sample_messages};
use crate::DemoMessage;

const THEME_JSON: &str = include_str!("../theme.json");
const CLOCK_TICK: Duration = Duration::from_secs(30);

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeConfig::from_json_or_default(THEME_JSON);
    let (now, set_now) = create_signal(Local::now());
    match set_interval_with_handle(move || set_now.set(Local::now()), CLOCK_TICK) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("relative time clock failed to start: {err:?}"),
    }
    let messages = sample_messages(now.get_untracked().fixed_offset());

    view! {
        <Title text="فروشگاه" />
        <Meta name="description" content="Persian storefront demo with validated sign-in fields." />

        <PageLayout
            theme
            header=|| view! { <PageHeader title="فروشگاه" /> }
            footer=move || view! { <SiteFooter now=now.get_untracked() /> }
        >
            <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md>
                <SignInForm />
                <MessageList messages now />
            </Stack>
        </PageLayout>
    }
}

#[component]
pub fn SignInForm() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let amount = create_rw_signal(String::new());
    let amount_value = Signal::derive(move || amount.with(|raw| parse_amount(raw)));

    view! {
        <form class="sign-in-form" on:submit=|ev: ev::SubmitEvent| ev.prevent_default()>
            <Stack gap=LayoutGap::Md>
                <ValidatedField
                    label="ایمیل"
                    kind=InputKind::Email
                    placeholder="name@example.com"
                    required=true
                    value=email
                    on_value_change=Callback::new(move |value| email.set(value))
                    validator=Validator::new(is_plausible_email)
                    invalid_message="ایمیل معتبر نیست"
                />
                <ValidatedField
                    label="رمز عبور"
                    kind=InputKind::Password
                    required=true
                    value=password
                    on_value_change=Callback::new(move |value| password.set(value))
                    validator=Validator::new(is_strong_password)
                    invalid_message="حداقل ۸ کاراکتر شامل حرف و عدد"
                />
                <ValidatedField
                    label="مبلغ"
                    kind=InputKind::Number
                    placeholder="۰"
                    value=amount
                    on_value_change=Callback::new(move |value| amount.set(value))
                />
                <Amount value=amount_value unit="تومان" />
            </Stack>
        </form>
    }
}

#[component]
fn MessageList(messages: Vec<DemoMessage>, #[prop(into)] now: Signal<DateTime<Local>>) -> impl IntoView {
    view! {
        <ul class="message-list">
            {messages
                .into_iter()
                .map(|message| {
                    view! {
                        <li class="message">
                            <Cluster gap=LayoutGap::Sm>
                                <strong>{message.author}</strong>
                                <TimeAgo timestamp=message.sent_at now />
                            </Cluster>
                            <p>{message.body}</p>
                            <Amount value=message.amount unit="تومان" />
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn SiteFooter(now: DateTime<Local>) -> impl IntoView {
    let year = match JalaliDate::from_gregorian(now.date_naive()) {
        Ok(date) => to_persian_digits(date.year),
        Err(err) => {
            logging::warn!("footer year conversion failed: {err}");
            String::new()
        }
    };

    view! {
        <PageFooter>
            <small>{format!("© {year} فروشگاه")}</small>
        </PageFooter>
    }
}
