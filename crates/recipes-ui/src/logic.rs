//! Pure UI helpers extracted from components for non-wasm testing.

use crate::models::{Catalog, RecipeSummary};
use std::collections::BTreeSet;
use thiserror::Error;

/// Minimum password length accepted by the account service.
pub const MIN_PASSWORD_LEN: usize = 5;

/// Recipe listing filters carried in the `/recipes` query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    /// Tag ids; a recipe matches when it carries any of them.
    ///
    /// Ids are signed so that `tags=-1` stays a filter (one that matches nothing)
    /// instead of failing the whole query.
    pub tags: Vec<i64>,
    /// Ingredient ids; a recipe matches when it uses any of them.
    pub ingredients: Vec<i64>,
}

/// Query-string parse failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A parameter was not valid percent-encoded UTF-8.
    #[error("query parameter `{0}` is not valid UTF-8")]
    Encoding(String),
    /// An id list entry was not an integer.
    #[error("`{value}` in `{param}` is not a valid id")]
    InvalidId {
        /// Parameter holding the bad entry.
        param: &'static str,
        /// Offending entry.
        value: String,
    },
}

impl RecipeQuery {
    /// Parse a location query string (with or without the leading `?`).
    ///
    /// Unknown parameters are ignored. Empty entries in id lists are skipped.
    ///
    /// # Errors
    /// Returns [`QueryError`] when a value cannot be decoded or an id is not an integer.
    pub fn parse(search: &str) -> Result<Self, QueryError> {
        let mut query = Self::default();
        let search = search.strip_prefix('?').unwrap_or(search);
        for pair in search.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let decoded = urlencoding::decode(value)
                .map_err(|_| QueryError::Encoding(key.to_string()))?;
            match key {
                "tags" => query.tags = parse_ids("tags", &decoded)?,
                "ingredients" => query.ingredients = parse_ids("ingredients", &decoded)?,
                _ => {}
            }
        }
        Ok(query)
    }

    /// Whether no filter is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.ingredients.is_empty()
    }

    /// Query pairs for navigation; empty filters are omitted.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.tags.is_empty() {
            pairs.push(("tags", join_ids(&self.tags)));
        }
        if !self.ingredients.is_empty() {
            pairs.push(("ingredients", join_ids(&self.ingredients)));
        }
        pairs
    }
}

fn parse_ids(param: &'static str, raw: &str) -> Result<Vec<i64>, QueryError> {
    let mut ids = Vec::new();
    for piece in raw.split(',').map(str::trim).filter(|piece| !piece.is_empty()) {
        let id = piece.parse::<i64>().map_err(|_| QueryError::InvalidId {
            param,
            value: piece.to_string(),
        })?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Apply listing filters: any-of within a list, all-of across lists,
/// distinct, newest (highest id) first.
#[must_use]
pub fn filter_recipes<'a>(catalog: &'a Catalog, query: &RecipeQuery) -> Vec<&'a RecipeSummary> {
    let mut seen = BTreeSet::new();
    let mut rows: Vec<&RecipeSummary> = catalog
        .recipes
        .iter()
        .filter(|recipe| {
            query.tags.is_empty() || query.tags.iter().any(|id| as_id(*id).is_some_and(|id| recipe.has_tag(id)))
        })
        .filter(|recipe| {
            query.ingredients.is_empty()
                || query
                    .ingredients
                    .iter()
                    .any(|id| as_id(*id).is_some_and(|id| recipe.has_ingredient(id)))
        })
        .filter(|recipe| seen.insert(recipe.id))
        .collect();
    rows.sort_by(|a, b| b.id.cmp(&a.id));
    rows
}

// Ids outside the catalog's range never match.
fn as_id(id: i64) -> Option<u32> {
    u32::try_from(id).ok()
}

/// Toggle the presence of an id, preserving the order of the rest.
#[must_use]
pub fn toggle_id(ids: &[i64], id: i64) -> Vec<i64> {
    if ids.contains(&id) {
        ids.iter().copied().filter(|existing| *existing != id).collect()
    } else {
        let mut next = ids.to_vec();
        next.push(id);
        next
    }
}

/// Local form validation failures.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// Email left blank.
    #[error("email is required")]
    EmailMissing,
    /// Email is not shaped like `local@domain.tld`.
    #[error("email address is not valid")]
    EmailInvalid,
    /// Name left blank.
    #[error("name is required")]
    NameMissing,
    /// Password shorter than [`MIN_PASSWORD_LEN`].
    #[error("password must be at least 5 characters")]
    PasswordTooShort,
}

impl FormError {
    /// Translation key for the inline message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::EmailMissing => "form.email_missing",
            Self::EmailInvalid => "form.email_invalid",
            Self::NameMissing => "form.name_missing",
            Self::PasswordTooShort => "form.password_short",
        }
    }
}

/// Validated registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterInput {
    /// Normalised email.
    pub email: String,
    /// Trimmed display name.
    pub name: String,
}

/// Validated login fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginInput {
    /// Normalised email.
    pub email: String,
}

/// Validate the registration form.
///
/// # Errors
/// Returns the first [`FormError`] found, checking email, name, then password.
pub fn validate_register(email: &str, name: &str, password: &str) -> Result<RegisterInput, FormError> {
    let email = validate_email(email)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(FormError::NameMissing);
    }
    validate_password(password)?;
    Ok(RegisterInput {
        email,
        name: name.to_string(),
    })
}

/// Validate the login form.
///
/// # Errors
/// Returns the first [`FormError`] found, checking email then password.
pub fn validate_login(email: &str, password: &str) -> Result<LoginInput, FormError> {
    let email = validate_email(email)?;
    validate_password(password)?;
    Ok(LoginInput { email })
}

fn validate_email(raw: &str) -> Result<String, FormError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FormError::EmailMissing);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(FormError::EmailInvalid);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(FormError::EmailInvalid);
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    if local.is_empty() || domain.contains('@') || !domain_ok {
        return Err(FormError::EmailInvalid);
    }
    // Domain part is case-insensitive; keep the local part as typed.
    Ok(format!("{local}@{}", domain.to_ascii_lowercase()))
}

fn validate_password(password: &str) -> Result<(), FormError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo_catalog;

    fn ids(rows: &[&RecipeSummary]) -> Vec<u32> {
        rows.iter().map(|row| row.id).collect()
    }

    #[test]
    fn query_parses_comma_separated_ids() {
        let query = RecipeQuery::parse("?tags=1,2&ingredients=5").unwrap();
        assert_eq!(query.tags, vec![1, 2]);
        assert_eq!(query.ingredients, vec![5]);
    }

    #[test]
    fn query_accepts_encoded_commas_and_skips_blanks() {
        let query = RecipeQuery::parse("tags=3%2C%204,,&page=2").unwrap();
        assert_eq!(query.tags, vec![3, 4]);
        assert!(query.ingredients.is_empty());
        assert!(RecipeQuery::parse("").unwrap().is_empty());
        assert!(RecipeQuery::parse("?tags=").unwrap().is_empty());
    }

    #[test]
    fn query_rejects_non_integer_ids() {
        assert_eq!(
            RecipeQuery::parse("?ingredients=salt").unwrap_err(),
            QueryError::InvalidId {
                param: "ingredients",
                value: "salt".to_string()
            }
        );
    }

    #[test]
    fn navigation_pairs_omit_empty_filters() {
        let query = RecipeQuery {
            tags: vec![2, 7],
            ingredients: Vec::new(),
        };
        assert_eq!(query.to_pairs(), vec![("tags", "2,7".to_string())]);
        assert!(RecipeQuery::default().to_pairs().is_empty());
        let both = RecipeQuery::parse("ingredients=4&tags=1").unwrap();
        assert_eq!(
            both.to_pairs(),
            vec![("tags", "1".to_string()), ("ingredients", "4".to_string())]
        );
    }

    #[test]
    fn unfiltered_listing_is_newest_first() {
        let catalog = demo_catalog().unwrap();
        let rows = filter_recipes(&catalog, &RecipeQuery::default());
        assert_eq!(ids(&rows), vec![8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn tag_filter_matches_any_listed_tag() {
        let catalog = demo_catalog().unwrap();
        let query = RecipeQuery::parse("tags=1,2").unwrap();
        assert_eq!(ids(&filter_recipes(&catalog, &query)), vec![8, 5, 3, 2, 1]);
    }

    #[test]
    fn tag_and_ingredient_filters_combine() {
        let catalog = demo_catalog().unwrap();
        let query = RecipeQuery::parse("tags=3&ingredients=5").unwrap();
        assert_eq!(ids(&filter_recipes(&catalog, &query)), vec![7, 4]);
    }

    #[test]
    fn unknown_filter_ids_match_nothing() {
        let catalog = demo_catalog().unwrap();
        let query = RecipeQuery::parse("tags=99").unwrap();
        assert!(filter_recipes(&catalog, &query).is_empty());
    }

    #[test]
    fn negative_ids_filter_to_an_empty_listing() {
        let catalog = demo_catalog().unwrap();
        let query = RecipeQuery::parse("tags=-1").unwrap();
        assert_eq!(query.tags, vec![-1]);
        assert!(filter_recipes(&catalog, &query).is_empty());

        let mixed = RecipeQuery::parse("tags=-1,+2").unwrap();
        assert_eq!(mixed.tags, vec![-1, 2]);
        assert_eq!(ids(&filter_recipes(&catalog, &mixed)), vec![5, 3, 2, 1]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        assert_eq!(toggle_id(&[1, 3], 2), vec![1, 3, 2]);
        assert_eq!(toggle_id(&[1, 3, 2], 3), vec![1, 2]);
        assert!(toggle_id(&[4], 4).is_empty());
    }

    #[test]
    fn register_requires_every_field() {
        assert_eq!(
            validate_register("  ", "Ana", "secret"),
            Err(FormError::EmailMissing)
        );
        assert_eq!(
            validate_register("ana@example.com", " ", "secret"),
            Err(FormError::NameMissing)
        );
        assert_eq!(
            validate_register("ana@example.com", "Ana", "abcd"),
            Err(FormError::PasswordTooShort)
        );
    }

    #[test]
    fn register_normalises_valid_input() {
        let input = validate_register(" Ana@Example.COM ", " Ana ", "abcde").unwrap();
        assert_eq!(input.email, "Ana@example.com");
        assert_eq!(input.name, "Ana");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "ana",
            "@example.com",
            "ana@",
            "ana@example",
            "ana@@example.com",
            "a@b@c.d",
            "a b@c.d",
            "ana@exa mple.com",
        ] {
            assert_eq!(
                validate_login(email, "secret"),
                Err(FormError::EmailInvalid),
                "{email}"
            );
        }
    }

    #[test]
    fn login_accepts_valid_credentials_shape() {
        let input = validate_login("chef@kitchen.io", "hunter2").unwrap();
        assert_eq!(input.email, "chef@kitchen.io");
        assert_eq!(FormError::PasswordTooShort.to_string(), "password must be at least 5 characters");
        assert_eq!(FormError::EmailInvalid.message_key(), "form.email_invalid");
    }
}
