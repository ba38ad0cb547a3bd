//! Shared UI primitive library for the Persian storefront pages.
//!
//! The crate owns reusable Leptos primitives (validated inputs, page chrome, formatted
//! display text), the theme configuration consumed by the page layout, and the stable
//! `data-ui-*` DOM contract the stylesheet targets. Pages should compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod theme;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Amount, ButtonSize, ButtonVariant, Cluster, IconButton, LayoutAlign, LayoutGap,
    LayoutPadding, PageFooter, PageHeader, PageLayout, Stack, TimeAgo, ValidatedField,
};
pub use theme::{provide_theme, use_theme, TextDirection, ThemeConfig, ThemeConfigError};

/// Convenience imports for page crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        provide_theme, use_theme, Amount, ButtonSize, ButtonVariant, Cluster, Icon, IconButton,
        IconName, IconSize, LayoutAlign, LayoutGap, LayoutPadding, PageFooter, PageHeader,
        PageLayout, Stack, TextDirection, ThemeConfig, TimeAgo, ValidatedField,
    };
    pub use input_contract::{InputKind, Validator};
    pub use locale_format::DisplayLocale;
}
