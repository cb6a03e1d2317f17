#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Browser entry for the recipes UI. Native builds only describe how to serve it.

#[cfg(target_arch = "wasm32")]
fn main() {
    recipes_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    writeln!(std::io::stderr().lock(), "{}", native_hint())
}

#[cfg(not(target_arch = "wasm32"))]
fn native_hint() -> String {
    let paths: Vec<&str> = recipes_ui::routes::ROUTE_TABLE
        .iter()
        .map(|descriptor| descriptor.path)
        .collect();
    format!(
        "recipes-ui renders in the browser; run `trunk serve` in crates/recipes-ui and open one of: {}",
        paths.join(", ")
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn hint_lists_every_route() {
        let hint = native_hint();
        for path in ["/", "/register", "/login", "/recipes"] {
            assert!(hint.contains(path), "{path}");
        }
        assert!(hint.contains("trunk serve"));
    }

    #[test]
    fn native_main_succeeds() -> std::io::Result<()> {
        main()
    }
}
