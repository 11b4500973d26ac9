//! Button with a ripple on pointer activation.
//!
//! # Design
//! - Ripple bookkeeping lives in [`RippleQueue`]; this component only measures
//!   bounds, schedules expiry, and renders.
//! - Expiry timers are owned by the component, so unmounting cancels them.

use crate::core::ripple::{Activation, Bounds, RIPPLE_LIFETIME_MS, RippleQueue};
use crate::core::ui::ButtonVariant;
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) variant: ButtonVariant,
    #[prop_or_default]
    pub(crate) disabled: bool,
    /// Leading icon.
    #[prop_or_default]
    pub(crate) icon: Option<Html>,
    #[prop_or_default]
    pub(crate) aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) r#type: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let node = use_node_ref();
    let ripples = use_mut_ref(RippleQueue::new);
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    let redraw = use_force_update();

    let onclick = {
        let node = node.clone();
        let ripples = ripples.clone();
        let timers = timers.clone();
        let redraw = redraw.clone();
        let disabled = props.disabled;
        let onclick = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            let bounds = node.cast::<web_sys::Element>().map(|element| {
                let rect = element.get_bounding_client_rect();
                Bounds {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                }
            });
            let activation = ripples.borrow_mut().activate(
                disabled,
                bounds,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );
            let Activation::Forward { ripple } = activation else {
                return;
            };
            if let Some(ripple) = ripple {
                let mut timers = timers.borrow_mut();
                {
                    let live = ripples.borrow();
                    timers.retain(|id, _| live.contains(*id));
                }
                let id = ripple.id;
                let ripples = ripples.clone();
                let redraw = redraw.clone();
                timers.insert(
                    id,
                    Timeout::new(RIPPLE_LIFETIME_MS, move || {
                        ripples.borrow_mut().expire(id);
                        redraw.force_update();
                    }),
                );
                redraw.force_update();
            }
            onclick.emit(event);
        })
    };

    let tint = props.variant.ripple_color();
    let ripple_nodes: Html = ripples
        .borrow()
        .iter()
        .map(|ripple| {
            let style = format!(
                "left: {}px; top: {}px; width: {}px; height: {}px; background-color: {tint};",
                ripple.x, ripple.y, ripple.size, ripple.size
            );
            html! { <span key={ripple.id.to_string()} class="ripple" style={style}></span> }
        })
        .collect();
    let classes = classes!(
        "btn",
        props.variant.as_class(props.disabled),
        props.class.clone()
    );

    html! {
        <button
            ref={node}
            class={classes}
            disabled={props.disabled}
            r#type={props.r#type.clone()}
            aria-label={props.aria_label.clone()}
            {onclick}
        >
            {props.icon.clone().map(|icon| html! {
                <span class="btn-icon">{icon}</span>
            }).unwrap_or_default()}
            <span class="btn-label">{ for props.children.iter() }</span>
            <span class="btn-ripples" aria-hidden="true">{ripple_nodes}</span>
        </button>
    }
}
