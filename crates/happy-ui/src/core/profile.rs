//! User card identity data.

/// Identity shown on a user card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Role or title.
    pub role: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

impl UserProfile {
    /// Alt text for the avatar image.
    #[must_use]
    pub fn avatar_alt(&self) -> String {
        format!("{}'s avatar", self.name)
    }

    /// Accessible label for the profile action.
    #[must_use]
    pub fn profile_action_label(&self) -> String {
        format!("View {}'s profile", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::UserProfile;

    #[test]
    fn labels_name_the_user() {
        let profile = UserProfile {
            name: "Ada Lovelace".to_string(),
            role: "Engineer".to_string(),
            avatar_url: "/avatars/ada.png".to_string(),
        };
        assert_eq!(profile.avatar_alt(), "Ada Lovelace's avatar");
        assert_eq!(profile.profile_action_label(), "View Ada Lovelace's profile");
    }
}
