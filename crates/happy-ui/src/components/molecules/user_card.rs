//! Avatar, name, role, and a profile action.

use crate::components::atoms::button::Button;
use crate::core::profile::UserProfile;
use crate::core::ui::ButtonVariant;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct UserCardProps {
    pub(crate) name: AttrValue,
    pub(crate) role: AttrValue,
    pub(crate) avatar_url: AttrValue,
    #[prop_or_default]
    pub(crate) on_profile_click: Callback<()>,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(UserCard)]
pub(crate) fn user_card(props: &UserCardProps) -> Html {
    let profile = UserProfile {
        name: props.name.to_string(),
        role: props.role.to_string(),
        avatar_url: props.avatar_url.to_string(),
    };
    let onclick = {
        let on_profile_click = props.on_profile_click.clone();
        Callback::from(move |_: MouseEvent| on_profile_click.emit(()))
    };

    html! {
        <article class={classes!("user-card", props.class.clone())}>
            <img class="user-card-avatar" src={profile.avatar_url.clone()} alt={profile.avatar_alt()} />
            <div class="user-card-body">
                <h3 class="user-card-name">{profile.name.clone()}</h3>
                <p class="user-card-role">{profile.role.clone()}</p>
            </div>
            <Button
                variant={ButtonVariant::Outlined}
                aria_label={AttrValue::from(profile.profile_action_label())}
                {onclick}
            >
                {"View Profile"}
            </Button>
        </article>
    }
}
