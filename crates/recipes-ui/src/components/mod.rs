//! Yew components for the shell and the routed pages.

pub(crate) mod form;
pub(crate) mod home;
pub(crate) mod login;
pub(crate) mod recipes;
pub(crate) mod register;
pub(crate) mod shell;

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

/// Translation bundle from context, English when no provider is mounted.
#[hook]
pub(crate) fn use_bundle() -> TranslationBundle {
    use_context::<TranslationBundle>().unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE))
}
