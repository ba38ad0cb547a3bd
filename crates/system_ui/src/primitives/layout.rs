use leptos_meta::Html;

use super::*;
use crate::{provide_theme, use_theme, ThemeConfig};

#[component]
/// Page wrapper: applies the theme, then renders header, content, and footer.
///
/// Sets `dir`/`lang` on the document element as well as on the wrapper so portals and
/// the browser scrollbar follow the configured direction. The theme is provided to all
/// descendants; without an explicit `theme` the nearest provided one (or the default
/// RTL Persian theme) is used.
pub fn PageLayout(
    #[prop(optional)] theme: Option<ThemeConfig>,
    #[prop(optional, into)] header: Option<ViewFn>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = theme.unwrap_or_else(use_theme);
    let direction = theme.direction.token();
    let lang = theme.locale.lang_tag();
    let style = theme.root_style();
    provide_theme(theme);

    view! {
        <Html dir=direction lang=lang />
        <div
            class=merge_layout_class("ui-page-layout", layout_class)
            dir=direction
            lang=lang
            style=style
            data-ui-primitive="true"
            data-ui-kind="page-layout"
            data-ui-direction=direction
        >
            {header.map(|header| {
                view! {
                    <header data-ui-slot="header">{header.run()}</header>
                }
            })}
            <main data-ui-slot="content">{children()}</main>
            {footer.map(|footer| {
                view! {
                    <footer data-ui-slot="footer">{footer.run()}</footer>
                }
            })}
        </div>
    }
}

#[component]
/// Page header bar with a title and optional trailing content.
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-page-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-header"
        >
            <h1 data-ui-slot="title">{title}</h1>
            {children.map(|children| view! { <nav data-ui-slot="actions">{children()}</nav> })}
        </div>
    }
}

#[component]
/// Page footer strip.
pub fn PageFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-page-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-footer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal wrapping cluster.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-cluster", layout_class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}
