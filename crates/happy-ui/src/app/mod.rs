//! Showcase shell: theme handling plus one of every atom.

use crate::components::atoms::button::Button;
use crate::components::atoms::icons::{IconMail, IconMoon, IconSun};
use crate::components::atoms::input_field::InputField;
use crate::components::molecules::login_form::LoginForm;
use crate::components::molecules::user_card::UserCard;
use crate::core::field::ValueSource;
use crate::core::submit::LoginPayload;
use crate::core::tokens::{ThemeMode, css_custom_properties};
use crate::core::ui::{ButtonVariant, InputVariant};
use gloo::console;
use gloo::utils::window;
use preferences::{load_theme, persist_theme};
use yew::prelude::*;

mod preferences;

struct DemoUser {
    name: &'static str,
    role: &'static str,
    avatar_url: &'static str,
}

const DEMO_USERS: [DemoUser; 2] = [
    DemoUser {
        name: "Sarah Johnson",
        role: "Product Designer",
        avatar_url: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face",
    },
    DemoUser {
        name: "Michael Chen",
        role: "Frontend Developer",
        avatar_url: "https://images.unsplash.com/photo-1507003211169-0e1e7c5ba0e5?w=150&h=150&fit=crop&crop=face",
    },
];

const fn variant_label(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Filled => "Filled",
        ButtonVariant::Outlined => "Outlined",
        ButtonVariant::Text => "Text",
    }
}

#[function_component(ShowcaseApp)]
fn showcase_app() -> Html {
    let theme = use_state(load_theme);
    let last_login = use_state(|| None as Option<String>);
    let tokens_css = use_memo(|_| css_custom_properties(), ());

    {
        use_effect_with_deps(
            move |theme| {
                apply_theme(*theme);
                || ()
            },
            *theme,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            persist_theme(next);
            theme.set(next);
        })
    };
    let on_login = {
        let last_login = last_login.clone();
        Callback::from(move |payload: LoginPayload| {
            console::log!("showcase received login", payload.email.clone());
            last_login.set(Some(payload.email));
        })
    };
    let theme_icon = match *theme {
        ThemeMode::Light => html! { <IconMoon /> },
        ThemeMode::Dark => html! { <IconSun /> },
    };
    let variant_buttons: Html = ButtonVariant::all()
        .into_iter()
        .map(|variant| {
            html! {
                <>
                    <Button {variant}>{variant_label(variant)}</Button>
                    <Button {variant} disabled={true}>{variant_label(variant)}</Button>
                </>
            }
        })
        .collect();
    let cards: Html = DEMO_USERS
        .iter()
        .map(|user| {
            let name = user.name;
            let on_profile_click = Callback::from(move |()| {
                console::log!("profile opened", name);
            });
            html! {
                <UserCard
                    name={user.name}
                    role={user.role}
                    avatar_url={user.avatar_url}
                    {on_profile_click}
                />
            }
        })
        .collect();

    html! {
        <main class="showcase">
            <style>{(*tokens_css).clone()}</style>
            <header class="showcase-header">
                <h1>{"Happy Creations UI"}</h1>
                <Button
                    variant={ButtonVariant::Text}
                    icon={theme_icon}
                    aria_label={AttrValue::from("Toggle theme")}
                    onclick={on_toggle_theme}
                >
                    {theme.toggled().as_str()}
                </Button>
            </header>
            <section class="showcase-section">
                <h2>{"Buttons"}</h2>
                <div class="showcase-row">
                    {variant_buttons}
                    <Button icon={html! { <IconMail /> }}>{"With icon"}</Button>
                </div>
            </section>
            <section class="showcase-section">
                <h2>{"Input fields"}</h2>
                <div class="showcase-row">
                    <InputField label="Outlined" helper_text={AttrValue::from("Helper text")} />
                    <InputField
                        label="Filled"
                        variant={InputVariant::Filled}
                        source={ValueSource::Uncontrolled("Prefilled".to_string())}
                    />
                    <InputField label="With error" error_message={AttrValue::from("Something is wrong")} />
                    <InputField label="Disabled" disabled={true} />
                </div>
            </section>
            <section class="showcase-section">
                <h2>{"Login form"}</h2>
                <LoginForm on_submit={on_login} />
                {last_login.as_ref().map(|email| html! {
                    <p class="showcase-note" role="status">{format!("Signed in as {email}")}</p>
                }).unwrap_or_default()}
            </section>
            <section class="showcase-section">
                <h2>{"User cards"}</h2>
                <div class="showcase-row">{cards}</div>
            </section>
        </main>
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(body) = window().document().and_then(|document| document.body())
        && let Err(err) = body.set_attribute("data-theme", theme.as_str())
    {
        console::error!("theme attribute update failed", err);
    }
}

/// Mount the showcase on `#root`, or on `<body>` when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ShowcaseApp>::with_root(root).render();
    } else {
        yew::Renderer::<ShowcaseApp>::new().render();
    }
}
