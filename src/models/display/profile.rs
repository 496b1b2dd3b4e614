//! Profile detail rows

use super::common::{or_dash, yes_no};
use crate::client::models::Profile;
use crate::output::DetailRow;

/// Field/value rows of a profile
pub fn profile_rows(profile: &Profile) -> Vec<DetailRow> {
    vec![
        DetailRow::new("User ID", &profile.id),
        DetailRow::new("Alias", &profile.alias),
        DetailRow::new("Email", or_dash(profile.email.as_deref())),
        DetailRow::new("Birthdate", or_dash(profile.birthdate.as_deref())),
        DetailRow::new("Country", or_dash(profile.country.as_deref())),
        DetailRow::new("Language", or_dash(profile.language.as_deref())),
        DetailRow::new("Pronouns", or_dash(profile.pronouns.as_deref())),
        DetailRow::new("Description", or_dash(profile.description.as_deref())),
        DetailRow::new("Avatar", or_dash(profile.avatar.as_deref())),
        DetailRow::new("Public", yes_no(profile.is_public)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::ProfileBuilder;

    #[test]
    fn test_profile_rows() {
        let profile = ProfileBuilder::new("u1")
            .alias("jdoe")
            .country("France")
            .private()
            .build();

        let rows = profile_rows(&profile);
        let value = |field: &str| {
            rows.iter()
                .find(|row| row.field == field)
                .map(|row| row.value.clone())
                .unwrap()
        };

        assert_eq!(value("Alias"), "jdoe");
        assert_eq!(value("Country"), "France");
        assert_eq!(value("Language"), "--");
        assert_eq!(value("Public"), "no");
    }
}
