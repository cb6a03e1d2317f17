//! Recipe listing models and the embedded demo catalog.
//!
//! The catalog is bundled as JSON so the recipes page has something to list
//! without a backend. Recipes reference tags and ingredients by id; ids are
//! resolved into full records when the catalog loads.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

const DEMO_CATALOG: &str = include_str!("../assets/catalog.json");

/// A recipe tag (e.g. "Vegan").
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Tag {
    /// Stable identifier used in `tags=` filters.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// An ingredient used by one or more recipes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ingredient {
    /// Stable identifier used in `ingredients=` filters.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// Listing row for a recipe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeSummary {
    /// Recipe identifier; listings sort newest (highest) first.
    pub id: u32,
    /// Title.
    pub title: String,
    /// Preparation time in minutes.
    pub time_minutes: u32,
    /// Price as a two-decimal string.
    pub price: String,
    /// External link to the full recipe.
    pub link: String,
    /// Tags attached to the recipe.
    pub tags: Vec<Tag>,
    /// Ingredients used by the recipe.
    pub ingredients: Vec<Ingredient>,
}

impl RecipeSummary {
    /// Whether the recipe carries the tag with `id`.
    #[must_use]
    pub fn has_tag(&self, id: u32) -> bool {
        self.tags.iter().any(|tag| tag.id == id)
    }

    /// Whether the recipe uses the ingredient with `id`.
    #[must_use]
    pub fn has_ingredient(&self, id: u32) -> bool {
        self.ingredients.iter().any(|ingredient| ingredient.id == id)
    }
}

/// Failures while loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid catalog JSON.
    #[error("catalog is not valid JSON")]
    Parse(#[from] serde_json::Error),
    /// A recipe references a tag id that is not declared.
    #[error("recipe {recipe} references unknown tag {tag}")]
    UnknownTag {
        /// Recipe holding the reference.
        recipe: u32,
        /// Missing tag id.
        tag: u32,
    },
    /// A recipe references an ingredient id that is not declared.
    #[error("recipe {recipe} references unknown ingredient {ingredient}")]
    UnknownIngredient {
        /// Recipe holding the reference.
        recipe: u32,
        /// Missing ingredient id.
        ingredient: u32,
    },
}

/// Recipes plus the tag and ingredient vocabularies they draw from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Declared tags, in id order.
    pub tags: Vec<Tag>,
    /// Declared ingredients, in id order.
    pub ingredients: Vec<Ingredient>,
    /// Recipes in document order.
    pub recipes: Vec<RecipeSummary>,
}

#[derive(Deserialize)]
struct RawCatalog {
    tags: Vec<Tag>,
    ingredients: Vec<Ingredient>,
    recipes: Vec<RawRecipe>,
}

#[derive(Deserialize)]
struct RawRecipe {
    id: u32,
    title: String,
    time_minutes: u32,
    price: String,
    link: String,
    #[serde(default)]
    tags: Vec<u32>,
    #[serde(default)]
    ingredients: Vec<u32>,
}

impl Catalog {
    /// Parse a catalog document, resolving tag and ingredient references.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the JSON is malformed or a reference dangles.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let doc: RawCatalog = serde_json::from_str(raw)?;
        let tags_by_id: BTreeMap<u32, &Tag> = doc.tags.iter().map(|t| (t.id, t)).collect();
        let ingredients_by_id: BTreeMap<u32, &Ingredient> =
            doc.ingredients.iter().map(|i| (i.id, i)).collect();

        let mut recipes = Vec::with_capacity(doc.recipes.len());
        for entry in doc.recipes {
            let tags = entry
                .tags
                .iter()
                .map(|id| {
                    tags_by_id
                        .get(id)
                        .map(|tag| (*tag).clone())
                        .ok_or(CatalogError::UnknownTag {
                            recipe: entry.id,
                            tag: *id,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let ingredients = entry
                .ingredients
                .iter()
                .map(|id| {
                    ingredients_by_id
                        .get(id)
                        .map(|ingredient| (*ingredient).clone())
                        .ok_or(CatalogError::UnknownIngredient {
                            recipe: entry.id,
                            ingredient: *id,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            recipes.push(RecipeSummary {
                id: entry.id,
                title: entry.title,
                time_minutes: entry.time_minutes,
                price: entry.price,
                link: entry.link,
                tags,
                ingredients,
            });
        }

        let mut tags = doc.tags;
        tags.sort_by_key(|tag| tag.id);
        let mut ingredients = doc.ingredients;
        ingredients.sort_by_key(|ingredient| ingredient.id);
        Ok(Self {
            tags,
            ingredients,
            recipes,
        })
    }
}

/// Parse the bundled demo catalog.
///
/// # Errors
/// Returns [`CatalogError`] if the bundled document is malformed.
pub fn demo_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(DEMO_CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_loads_seed_vocabulary() {
        let catalog = demo_catalog().unwrap();
        let tag_names: Vec<&str> = catalog.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            tag_names,
            [
                "Breakfast",
                "Lunch",
                "Dinner",
                "Dessert",
                "Vegetarian",
                "Vegan",
                "Gluten-Free"
            ]
        );
        assert_eq!(catalog.ingredients.len(), 9);
        assert_eq!(catalog.ingredients[8].name, "Tomatoes");
        assert_eq!(catalog.recipes.len(), 8);
    }

    #[test]
    fn demo_recipes_follow_seed_shape() {
        let catalog = demo_catalog().unwrap();
        for recipe in &catalog.recipes {
            assert!((1..=3).contains(&recipe.tags.len()), "{}", recipe.title);
            assert!((3..=6).contains(&recipe.ingredients.len()), "{}", recipe.title);
            assert!((10..=60).contains(&recipe.time_minutes));
        }
    }

    #[test]
    fn references_resolve_to_full_records() {
        let catalog = demo_catalog().unwrap();
        let first = &catalog.recipes[0];
        assert!(first.has_tag(4));
        assert!(!first.has_tag(1));
        assert!(first.has_ingredient(9));
        assert_eq!(first.tags[1].name, "Dessert");
    }

    #[test]
    fn dangling_tag_reference_is_reported() {
        let raw = r#"{
            "tags": [{"id": 1, "name": "Lunch"}],
            "ingredients": [],
            "recipes": [{"id": 3, "title": "Soup", "time_minutes": 20,
                         "price": "5.00", "link": "https://example.com", "tags": [2]}]
        }"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTag { recipe: 3, tag: 2 }));
        assert_eq!(err.to_string(), "recipe 3 references unknown tag 2");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
