//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{Friend, FriendStatus, Image, Profile, SearchUser};

/// Builder for test [`Profile`] instances.
///
/// # Example
/// ```ignore
/// let profile = ProfileBuilder::new("u1").alias("jdoe").country("France").build();
/// ```
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    profile: Profile,
}

impl ProfileBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            profile: Profile {
                alias: format!("user-{}", id),
                email: Some(format!("{}@example.com", id)),
                id,
                birthdate: None,
                country: None,
                language: None,
                description: None,
                pronouns: None,
                avatar: None,
                is_public: true,
            },
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.profile.alias = alias.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.profile.country = Some(country.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.profile.description = Some(description.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.profile.is_public = false;
        self
    }

    pub fn build(self) -> Profile {
        self.profile
    }
}

/// Builder for test [`Friend`] instances.
#[derive(Debug, Clone)]
pub struct FriendBuilder {
    friend: Friend,
}

impl FriendBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            friend: Friend {
                friendship_id: format!("f-{}", id),
                alias: format!("friend-{}", id),
                id,
                avatar: None,
                country: None,
                status: FriendStatus::Accepted,
                requested_by_me: false,
                created_at: "2025-01-15T09:30:00Z".to_string(),
            },
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.friend.alias = alias.into();
        self
    }

    pub fn status(mut self, status: FriendStatus) -> Self {
        self.friend.status = status;
        self
    }

    pub fn requested_by_me(mut self) -> Self {
        self.friend.requested_by_me = true;
        self
    }

    pub fn build(self) -> Friend {
        self.friend
    }
}

/// Builder for test [`Image`] instances.
#[derive(Debug, Clone)]
pub struct ImageBuilder {
    image: Image,
}

impl ImageBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            image: Image {
                image_link: format!("https://img.example.com/{}.jpg", id),
                id,
                is_pinned: false,
                created_at: "2025-02-01T18:00:00Z".to_string(),
                user_id: "u1".to_string(),
            },
        }
    }

    pub fn pinned(mut self) -> Self {
        self.image.is_pinned = true;
        self
    }

    pub fn owner(mut self, user_id: impl Into<String>) -> Self {
        self.image.user_id = user_id.into();
        self
    }

    pub fn build(self) -> Image {
        self.image
    }
}

/// Builder for test [`SearchUser`] instances.
#[derive(Debug, Clone)]
pub struct SearchUserBuilder {
    user: SearchUser,
}

impl SearchUserBuilder {
    pub fn new(id: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            user: SearchUser {
                id: id.into(),
                alias: alias.into(),
                avatar: None,
                is_public: true,
                description: None,
                country: None,
                language: None,
                created_at: None,
            },
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.user.country = Some(country.into());
        self
    }

    pub fn build(self) -> SearchUser {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_defaults() {
        let profile = ProfileBuilder::new("u1").build();
        assert_eq!(profile.alias, "user-u1");
        assert!(profile.is_public);

        let friend = FriendBuilder::new("u2").status(FriendStatus::Pending).build();
        assert_eq!(friend.friendship_id, "f-u2");
        assert_eq!(friend.status, FriendStatus::Pending);

        let image = ImageBuilder::new("i1").pinned().build();
        assert!(image.is_pinned);
        assert!(image.image_link.ends_with("i1.jpg"));
    }
}
