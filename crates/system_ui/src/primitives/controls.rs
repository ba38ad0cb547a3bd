use input_contract::{FieldConfig, FieldState, InputKind, Validator};

use super::*;

#[component]
/// Shared circular icon button used for inline field actions.
pub fn IconButton(
    icon: IconName,
    #[prop(default = ButtonVariant::Icon)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(pressed.get())
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape="circle"
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Md />
        </button>
    }
}

#[component]
/// Labeled text input that normalizes keystrokes and reports validity through styling.
///
/// Every input event is canonicalized (Persian digits to ASCII, then the kind's
/// character filter) and the result is emitted through `on_value_change`, valid or not.
/// The border status stays neutral until the first blur; afterwards it follows the
/// `validator`. Password fields get a visibility toggle.
pub fn ValidatedField(
    #[prop(into)] label: String,
    #[prop(default = InputKind::Text)] kind: InputKind,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] restrict_to_ascii: bool,
    #[prop(optional, into)] validator: Option<Validator>,
    #[prop(optional, into)] invalid_message: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let mut config = FieldConfig::new(label, kind)
        .required(required)
        .disabled(disabled)
        .restrict_to_ascii(restrict_to_ascii);
    if let Some(placeholder) = placeholder {
        config = config.with_placeholder(placeholder);
    }
    if let Some(validator) = validator {
        config = config.with_validator(validator);
    }
    if let Some(message) = invalid_message {
        config = config.with_invalid_message(message);
    }

    let field_id = id.unwrap_or_else(|| config.label.clone());
    let label_text = config.display_label();
    let placeholder_text = config.placeholder.clone();
    let config = store_value(config);
    let state = create_rw_signal(config.with_value(FieldState::new));
    let input_ref = create_node_ref::<html::Input>();

    let synced_value = value.clone();
    create_effect(move |_| {
        let current = synced_value.get();
        state.update(|field| field.set_value(current));
    });

    let on_input = move |ev: Event| {
        let raw = event_target_value(&ev);
        let Some(normalized) =
            state.try_update(|field| config.with_value(|config| field.on_change(config, &raw)))
        else {
            return;
        };
        if normalized != raw {
            // Keep the DOM in step when filtering leaves the owner's signal unchanged.
            if let Some(input) = input_ref.get_untracked() {
                input.set_value(&normalized);
            }
        }
        if let Some(on_value_change) = on_value_change.as_ref() {
            on_value_change.call(normalized);
        }
    };

    let on_blur = move |_: FocusEvent| {
        state.update(|field| config.with_value(|config| field.on_blur(config)));
    };

    let toggle_visibility = Callback::new(move |_: MouseEvent| {
        state.update(FieldState::toggle_visibility);
    });

    view! {
        <div
            class=merge_layout_class("ui-validated-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="validated-field"
            data-ui-input-kind=kind.token()
            data-ui-status=move || state.with(|field| field.status().token())
            data-ui-disabled=bool_token(disabled)
        >
            <label for=field_id.clone() data-ui-slot="label">
                {label_text}
            </label>
            <div data-ui-slot="control">
                <input
                    class="ui-field"
                    id=field_id
                    node_ref=input_ref
                    type=move || state.with(|field| kind.html_type(field.is_masked))
                    placeholder=placeholder_text
                    required=required
                    disabled=disabled
                    aria-invalid=move || bool_token(!state.with(|field| field.is_valid))
                    prop:value=move || value.get()
                    on:input=on_input
                    on:blur=on_blur
                />
                {(kind == InputKind::Password)
                    .then(|| {
                        move || {
                            let masked = state.with(|field| field.is_masked);
                            let icon = if masked {
                                IconName::Visibility
                            } else {
                                IconName::VisibilityOff
                            };
                            view! {
                                <IconButton
                                    icon
                                    ui_slot="visibility-toggle"
                                    aria_label="toggle password visibility"
                                    pressed=!masked
                                    disabled=disabled
                                    on_click=toggle_visibility
                                />
                            }
                        }
                    })}
            </div>
            {move || {
                config
                    .with_value(|config| {
                        state.with(|field| field.error_message(config).map(str::to_owned))
                    })
                    .map(|message| {
                        view! {
                            <span data-ui-slot="helper" role="alert">
                                {message}
                            </span>
                        }
                    })
            }}
        </div>
    }
}
