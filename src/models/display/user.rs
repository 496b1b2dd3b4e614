//! User search and stats display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{or_dash, yes_no};
use crate::client::models::{SearchUser, UserStats};
use crate::output::DetailRow;

/// Search result display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SearchUserDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "ALIAS")]
    pub alias: String,

    #[tabled(rename = "COUNTRY")]
    pub country: String,

    #[tabled(rename = "LANGUAGE")]
    pub language: String,

    #[tabled(rename = "PUBLIC")]
    pub public: String,
}

impl From<SearchUser> for SearchUserDisplay {
    fn from(user: SearchUser) -> Self {
        Self {
            country: or_dash(user.country.as_deref()),
            language: or_dash(user.language.as_deref()),
            public: yes_no(user.is_public),
            id: user.id,
            alias: user.alias,
        }
    }
}

/// Field/value rows of a user's counters
pub fn stats_rows(stats: &UserStats) -> Vec<DetailRow> {
    let optional = |count: Option<u64>| count.map_or_else(|| "--".to_string(), |c| c.to_string());

    vec![
        DetailRow::new("User ID", &stats.id),
        DetailRow::new("Friends", stats.friends_count.to_string()),
        DetailRow::new("Images", stats.images_count.to_string()),
        DetailRow::new("Posts", optional(stats.posts_count)),
        DetailRow::new("Events", optional(stats.events_count)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::SearchUserBuilder;

    #[test]
    fn test_search_user_display() {
        let user = SearchUserBuilder::new("u3", "lea").country("Belgique").build();
        let display = SearchUserDisplay::from(user);

        assert_eq!(display.alias, "lea");
        assert_eq!(display.country, "Belgique");
        assert_eq!(display.language, "--");
        assert_eq!(display.public, "yes");
    }

    #[test]
    fn test_stats_rows() {
        let stats = UserStats {
            id: "u1".to_string(),
            friends_count: 4,
            images_count: 12,
            posts_count: None,
            events_count: Some(1),
        };

        let rows = stats_rows(&stats);

        assert_eq!(rows[1].value, "4");
        assert_eq!(rows[3].value, "--");
        assert_eq!(rows[4].value, "1");
    }
}
