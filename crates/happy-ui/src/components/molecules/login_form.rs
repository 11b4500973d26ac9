//! Email/password sign-in form.
//!
//! # Design
//! - Every transition goes through [`LoginFormState`]; this component wires DOM
//!   events to actions and runs the in-flight submission.
//! - A submission is started by the effect keyed on the in-flight ticket, so a
//!   double submit can never spawn two calls.
//! - Completion after unmount is dropped via [`MountGuard`].
//! - `on_submit` fires from the accepted submission the state records, once
//!   per ticket; the spawned call only reports back.

use crate::components::atoms::button::Button;
use crate::components::atoms::icons::{IconEye, IconEyeOff, IconLock, IconMail, IconSpinner};
use crate::components::atoms::input_field::{InputField, input_value};
use crate::core::field::ValueSource;
use crate::core::login::{LoginAction, LoginField, LoginFormState};
use crate::core::submit::{LoginPayload, MountGuard, SIMULATED_LATENCY_MS, run_submission};
use crate::core::ui::ButtonVariant;
use crate::services::SimulatedGateway;
use gloo::console;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

impl Reducible for LoginFormState {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LoginFormProps {
    /// Receives the credentials once the sign-in call succeeds.
    #[prop_or_default]
    pub(crate) on_submit: Callback<LoginPayload>,
    #[prop_or(SIMULATED_LATENCY_MS)]
    pub(crate) latency_ms: u32,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(LoginForm)]
pub(crate) fn login_form(props: &LoginFormProps) -> Html {
    let state = use_reducer(LoginFormState::new);
    let guard = use_memo(|_| MountGuard::mounted(), ());

    {
        let guard = guard.clone();
        use_effect_with_deps(move |_| move || guard.retire(), ());
    }

    {
        let on_submit = props.on_submit.clone();
        let signed_in = state.signed_in().cloned();
        use_effect_with_deps(
            move |signed_in| {
                if let Some(done) = signed_in {
                    console::log!("login succeeded", done.payload.email.clone());
                    on_submit.emit(done.payload.clone());
                }
                || ()
            },
            signed_in,
        );
    }

    {
        let dispatcher = state.dispatcher();
        let guard = (*guard).clone();
        let latency_ms = props.latency_ms;
        let in_flight = state
            .in_flight()
            .map(|(ticket, payload)| (ticket, payload.clone()));
        use_effect_with_deps(
            move |in_flight| {
                if let Some((ticket, payload)) = in_flight.clone() {
                    console::log!(
                        "login submitted",
                        payload.email.clone(),
                        payload.masked_password()
                    );
                    spawn_local(async move {
                        let gateway = SimulatedGateway::new(latency_ms);
                        run_submission(&gateway, &guard, ticket, &payload, |report| {
                            if let Err(err) = &report.outcome {
                                console::error!("login failed", err.to_string());
                            }
                            dispatcher.dispatch(LoginAction::Completed(report));
                        })
                        .await;
                    });
                }
                || ()
            },
            in_flight,
        );
    }

    let on_input = |field: LoginField| {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                dispatcher.dispatch(LoginAction::Input(field, value));
            }
        })
    };
    let on_blur = |field: LoginField| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: FocusEvent| dispatcher.dispatch(LoginAction::Blur(field)))
    };
    let onsubmit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(LoginAction::Submit);
        })
    };
    let on_toggle_reveal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(LoginAction::ToggleReveal))
    };
    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(LoginAction::DismissFailure))
    };

    let submitting = state.is_submitting();
    let email = state.field(LoginField::Email);
    let password = state.field(LoginField::Password);
    let (reveal_icon, reveal_label) = if state.reveal_password() {
        (html! { <IconEyeOff /> }, "Hide password")
    } else {
        (html! { <IconEye /> }, "Show password")
    };
    let failure = state.last_failure().map(|err| {
        html! {
            <div class="form-alert" role="alert">
                <span>{err.to_string()}</span>
                <Button variant={ButtonVariant::Text} r#type="button" onclick={on_dismiss}>
                    {"Dismiss"}
                </Button>
            </div>
        }
    });
    let submit_content = if submitting {
        html! { <><IconSpinner class="spin" />{" "}{state.submit_label()}</> }
    } else {
        html! { {state.submit_label()} }
    };

    html! {
        <form class={classes!("login-form", props.class.clone())} novalidate={true} {onsubmit}>
            <h2 class="login-title">{"Welcome Back"}</h2>
            <p class="login-subtitle">{"Sign in to your account to continue"}</p>
            {failure.unwrap_or_default()}
            <InputField
                label="Email"
                input_type="email"
                autocomplete="email"
                source={ValueSource::Controlled(email.value().to_string())}
                error_message={email.displayed_error().map(AttrValue::from)}
                helper_text={state.helper_text(LoginField::Email).map(AttrValue::from)}
                disabled={submitting}
                leading_icon={html! { <IconMail /> }}
                oninput={on_input(LoginField::Email)}
                onblur={on_blur(LoginField::Email)}
            />
            <InputField
                label="Password"
                input_type={state.password_input_type()}
                autocomplete="current-password"
                source={ValueSource::Controlled(password.value().to_string())}
                error_message={password.displayed_error().map(AttrValue::from)}
                helper_text={state.helper_text(LoginField::Password).map(AttrValue::from)}
                disabled={submitting}
                leading_icon={html! { <IconLock /> }}
                trailing_icon={reveal_icon}
                trailing_icon_label={AttrValue::from(reveal_label)}
                on_trailing_icon_click={on_toggle_reveal}
                oninput={on_input(LoginField::Password)}
                onblur={on_blur(LoginField::Password)}
            />
            <div class="login-row">
                <label class="login-remember">
                    <input type="checkbox" disabled={submitting} />
                    <span>{"Remember me"}</span>
                </label>
                <Button variant={ButtonVariant::Text} r#type="button" disabled={submitting}>
                    {"Forgot password?"}
                </Button>
            </div>
            <Button variant={ButtonVariant::Filled} r#type="submit" disabled={submitting} class="login-submit">
                {submit_content}
            </Button>
            <p class="login-footer">
                <span>{"Don't have an account? "}</span>
                <Button variant={ButtonVariant::Text} r#type="button" disabled={submitting}>
                    {"Sign up"}
                </Button>
            </p>
        </form>
    }
}
