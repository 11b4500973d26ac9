//! Text input with a floating label and supporting text.
//!
//! # Design
//! - Focus and value ownership are reduced through [`InputFieldState`]; the
//!   component never decides controlled vs uncontrolled on its own.
//! - Error text replaces helper text and is announced with `role="alert"`.
//! - The trailing icon is keyboard operable when it has a click handler.

use crate::core::field::{FieldIds, InputFieldState, SupportText, ValueSource, activates_control};
use crate::core::ui::{FieldTone, InputVariant};
use std::rc::Rc;
use yew::prelude::*;

pub(crate) enum FieldEvent {
    Focus,
    Blur,
    Input(String),
    Sync(String),
}

impl Reducible for InputFieldState {
    type Action = FieldEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        match action {
            FieldEvent::Focus => next.focus(),
            FieldEvent::Blur => next.blur(),
            FieldEvent::Input(value) => next.input(value),
            FieldEvent::Sync(value) => next.sync_controlled(&value),
        }
        Rc::new(next)
    }
}

/// Read the current value of the input that fired `event`.
pub(crate) fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}

#[derive(Properties, PartialEq)]
pub(crate) struct InputFieldProps {
    pub(crate) label: AttrValue,
    #[prop_or_default]
    pub(crate) variant: InputVariant,
    #[prop_or_default]
    pub(crate) source: ValueSource,
    #[prop_or(AttrValue::from("text"))]
    pub(crate) input_type: AttrValue,
    #[prop_or_default]
    pub(crate) autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) error_message: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) helper_text: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) disabled: bool,
    #[prop_or_default]
    pub(crate) leading_icon: Option<Html>,
    #[prop_or_default]
    pub(crate) trailing_icon: Option<Html>,
    /// Makes the trailing icon an operable control.
    #[prop_or_default]
    pub(crate) on_trailing_icon_click: Option<Callback<()>>,
    #[prop_or_default]
    pub(crate) trailing_icon_label: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub(crate) onfocus: Callback<FocusEvent>,
    #[prop_or_default]
    pub(crate) onblur: Callback<FocusEvent>,
}

#[function_component(InputField)]
pub(crate) fn input_field(props: &InputFieldProps) -> Html {
    let state = {
        let source = props.source.clone();
        use_reducer(move || InputFieldState::new(source))
    };
    let ids = use_memo(|_| FieldIds::allocate(), ());

    {
        let dispatcher = state.dispatcher();
        let controlled = match &props.source {
            ValueSource::Controlled(value) => Some(value.clone()),
            ValueSource::Uncontrolled(_) => None,
        };
        use_effect_with_deps(
            move |controlled| {
                if let Some(value) = controlled {
                    dispatcher.dispatch(FieldEvent::Sync(value.clone()));
                }
                || ()
            },
            controlled,
        );
    }

    let onfocus = {
        let dispatcher = state.dispatcher();
        let onfocus = props.onfocus.clone();
        Callback::from(move |event: FocusEvent| {
            dispatcher.dispatch(FieldEvent::Focus);
            onfocus.emit(event);
        })
    };
    let onblur = {
        let dispatcher = state.dispatcher();
        let onblur = props.onblur.clone();
        Callback::from(move |event: FocusEvent| {
            dispatcher.dispatch(FieldEvent::Blur);
            onblur.emit(event);
        })
    };
    let oninput = {
        let dispatcher = state.dispatcher();
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                dispatcher.dispatch(FieldEvent::Input(value));
            }
            oninput.emit(event);
        })
    };

    let support = SupportText::resolve(
        props.error_message.as_deref(),
        props.helper_text.as_deref(),
    );
    let described_by = ids.described_by(support).map(ToOwned::to_owned);
    let tone = FieldTone::from_flags(props.disabled, support.is_invalid(), state.is_focused());
    let floating = state.label_floating();

    let trailing = props.trailing_icon.clone().map(|icon| {
        match props.on_trailing_icon_click.clone() {
            Some(on_click) => {
                let onclick = {
                    let on_click = on_click.clone();
                    Callback::from(move |_: MouseEvent| on_click.emit(()))
                };
                let onkeydown = Callback::from(move |event: KeyboardEvent| {
                    if activates_control(&event.key()) {
                        event.prevent_default();
                        on_click.emit(());
                    }
                });
                html! {
                    <span
                        class="field-icon field-icon-trailing field-icon-action"
                        role="button"
                        tabindex="0"
                        aria-label={props.trailing_icon_label.clone()}
                        {onclick}
                        {onkeydown}
                    >
                        {icon}
                    </span>
                }
            }
            None => html! {
                <span class="field-icon field-icon-trailing" aria-hidden="true">{icon}</span>
            },
        }
    });

    let support_node = support.text().map(|text| {
        let id = if support.is_invalid() {
            ids.error.clone()
        } else {
            ids.helper.clone()
        };
        let class = classes!(
            "field-support",
            support.is_invalid().then_some("field-support-error")
        );
        html! {
            <p id={id} class={class} role={support.role()}>{text.to_string()}</p>
        }
    });

    html! {
        <div class={classes!("field", props.variant.as_class(), tone.as_class(), props.class.clone())}>
            <div class="field-control">
                {props.leading_icon.clone().map(|icon| html! {
                    <span class="field-icon field-icon-leading" aria-hidden="true">{icon}</span>
                }).unwrap_or_default()}
                <input
                    id={ids.input.clone()}
                    class="field-input"
                    type={props.input_type.clone()}
                    value={state.value().to_string()}
                    autocomplete={props.autocomplete.clone()}
                    disabled={props.disabled}
                    aria-invalid={support.is_invalid().to_string()}
                    aria-describedby={described_by}
                    {oninput}
                    {onfocus}
                    {onblur}
                />
                <label for={ids.input.clone()} class={props.variant.label_class(floating)}>
                    {props.label.clone()}
                </label>
                {trailing.unwrap_or_default()}
            </div>
            {support_node.unwrap_or_default()}
        </div>
    }
}
