//! Recipe listing page.
//!
//! # Design
//! - Filters live in the location query (`?tags=1,2&ingredients=3`) so they survive reloads
//!   and history navigation; chips push a new query through the navigator.
//! - Rows come from the bundled demo catalog; nothing is fetched.

use crate::components::use_bundle;
use crate::i18n::TranslationBundle;
use crate::logic::{RecipeQuery, filter_recipes, toggle_id};
use crate::models::{Catalog, RecipeSummary, demo_catalog};
use crate::routes::Route;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(RecipesPage)]
pub(crate) fn recipes_page() -> Html {
    let bundle = use_bundle();
    let catalog = use_memo(|_| load_catalog(), ());
    let navigator = use_navigator();
    let search = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();

    let parsed = use_memo(|search: &String| RecipeQuery::parse(search), search.clone());
    {
        let parsed = parsed.clone();
        use_effect_with_deps(
            move |_| {
                if let Err(err) = parsed.as_ref() {
                    console::error!("recipe filters ignored", err.to_string());
                }
                || ()
            },
            search,
        );
    }
    let (query, bad_query) = match parsed.as_ref() {
        Ok(query) => (query.clone(), false),
        Err(_) => (RecipeQuery::default(), true),
    };

    let on_filter = Callback::from(move |next: RecipeQuery| {
        let Some(navigator) = navigator.as_ref() else {
            return;
        };
        if next.is_empty() {
            navigator.push(&Route::Recipes);
            return;
        }
        if let Err(err) = navigator.push_with_query(&Route::Recipes, &next.to_pairs()) {
            console::error!("recipe filter navigation failed", err.to_string());
        }
    });

    let Some(catalog) = catalog.as_ref() else {
        return html! {
            <section class="recipes-page">
                <h2>{bundle.text("recipes.title", "Recipes")}</h2>
                <p class="notice error">{bundle.text("recipes.catalog_unavailable", "")}</p>
            </section>
        };
    };
    let rows = filter_recipes(catalog, &query);

    html! {
        <section class="recipes-page">
            <div class="panel-head">
                <h2>{bundle.text("recipes.title", "Recipes")}</h2>
                <p class="muted">{bundle.text("recipes.body", "")}</p>
            </div>
            {if bad_query {
                html! { <p class="notice warning">{bundle.text("recipes.bad_query", "")}</p> }
            } else { html! {} }}
            {filter_bar(&bundle, catalog, &query, &on_filter)}
            {if rows.is_empty() {
                html! { <p class="muted empty">{bundle.text("recipes.empty", "")}</p> }
            } else {
                html! {
                    <ul class="recipe-grid">
                        {for rows.into_iter().map(|recipe| recipe_card(&bundle, recipe))}
                    </ul>
                }
            }}
        </section>
    }
}

fn load_catalog() -> Option<Catalog> {
    match demo_catalog() {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            console::error!("recipe catalog failed to load", err.to_string());
            None
        }
    }
}

fn filter_bar(
    bundle: &TranslationBundle,
    catalog: &Catalog,
    query: &RecipeQuery,
    on_filter: &Callback<RecipeQuery>,
) -> Html {
    let tag_chips = catalog.tags.iter().map(|tag| {
        let next = RecipeQuery {
            tags: toggle_id(&query.tags, i64::from(tag.id)),
            ingredients: query.ingredients.clone(),
        };
        chip(&tag.name, query.tags.contains(&i64::from(tag.id)), next, on_filter)
    });
    let ingredient_chips = catalog.ingredients.iter().map(|ingredient| {
        let next = RecipeQuery {
            tags: query.tags.clone(),
            ingredients: toggle_id(&query.ingredients, i64::from(ingredient.id)),
        };
        chip(
            &ingredient.name,
            query.ingredients.contains(&i64::from(ingredient.id)),
            next,
            on_filter,
        )
    });
    let clear = {
        let on_filter = on_filter.clone();
        Callback::from(move |_| on_filter.emit(RecipeQuery::default()))
    };

    html! {
        <div class="filter-bar">
            <div class="chip-row">
                <small>{bundle.text("recipes.tags", "Tags")}</small>
                {for tag_chips}
            </div>
            <div class="chip-row">
                <small>{bundle.text("recipes.ingredients", "Ingredients")}</small>
                {for ingredient_chips}
            </div>
            {if query.is_empty() {
                html! {}
            } else {
                html! {
                    <button class="ghost" onclick={clear}>{bundle.text("recipes.clear", "Clear filters")}</button>
                }
            }}
        </div>
    }
}

fn chip(label: &str, active: bool, next: RecipeQuery, on_filter: &Callback<RecipeQuery>) -> Html {
    let on_filter = on_filter.clone();
    html! {
        <button
            class={classes!("chip", active.then_some("active"))}
            aria-pressed={active.to_string()}
            onclick={Callback::from(move |_| on_filter.emit(next.clone()))}
        >
            {label}
        </button>
    }
}

fn recipe_card(bundle: &TranslationBundle, recipe: &RecipeSummary) -> Html {
    html! {
        <li class="recipe-card" key={recipe.id}>
            <h3>{&recipe.title}</h3>
            <p class="meta">
                <span>{format!("{} {}", recipe.time_minutes, bundle.text("recipes.minutes", "min"))}</span>
                <span>{format!("${}", recipe.price)}</span>
            </p>
            <div class="pill-row">
                {for recipe.tags.iter().map(|tag| html! { <span class="pill">{&tag.name}</span> })}
            </div>
            <p class="muted ingredients">
                {recipe.ingredients.iter().map(|i| i.name.as_str()).collect::<Vec<_>>().join(", ")}
            </p>
            <a href={recipe.link.clone()} target="_blank" rel="noopener noreferrer">
                {bundle.text("recipes.open", "Open")}
            </a>
        </li>
    }
}
