//! Localized UI strings.
//!
//! Two Fluent catalogs (`en`, `es`) are embedded at compile time. The locale
//! is picked once at startup from the browser's language preference; anything
//! that is not Spanish falls back to English.


use std::sync::Arc;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use unic_langid::LanguageIdentifier;

const EN_CATALOG: &str = include_str!("../../locales/en.ftl");
const ES_CATALOG: &str = include_str!("../../locales/es.ftl");

/// Supported UI locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// BCP 47 code, also used for the `<html lang>` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Map a language tag such as `es-MX` onto a supported locale by its
    /// primary language subtag.
    pub fn from_language_tag(tag: &str) -> Self {
        match tag.trim().parse::<LanguageIdentifier>() {
            Ok(id) if id.language.as_str() == "es" => Self::Es,
            _ => Self::En,
        }
    }

    /// Pick a locale from an ordered preference list; only the first entry
    /// is considered.
    pub fn detect<S: AsRef<str>>(preferences: &[S]) -> Self {
        preferences
            .first()
            .map_or_else(Self::default, |tag| Self::from_language_tag(tag.as_ref()))
    }

    /// Read the preference from `navigator.languages`, falling back to
    /// `navigator.language`. English outside the browser.
    pub fn from_browser() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
                return Self::default();
            };
            let languages: Vec<String> = navigator
                .languages()
                .iter()
                .filter_map(|value| value.as_string())
                .collect();
            if !languages.is_empty() {
                return Self::detect(&languages);
            }
            navigator
                .language()
                .map_or_else(Self::default, |tag| Self::from_language_tag(&tag))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    fn catalog(self) -> &'static str {
        match self {
            Self::En => EN_CATALOG,
            Self::Es => ES_CATALOG,
        }
    }
}

struct Catalog {
    locale: Locale,
    bundle: FluentBundle<FluentResource>,
}

/// Translator for one locale. Cheap to clone.
#[derive(Clone)]
pub struct I18n {
    inner: Arc<Catalog>,
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        let langid = locale.code().parse::<LanguageIdentifier>().unwrap_or_default();
        let mut bundle = FluentBundle::new_concurrent(vec![langid]);
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(locale.catalog().to_owned()).unwrap_or_else(|(partial, errors)| {
            log::error!("{} catalog has syntax errors: {errors:?}", locale.code());
            partial
        });
        if let Err(errors) = bundle.add_resource(resource) {
            log::error!("{} catalog has duplicate messages: {errors:?}", locale.code());
        }

        Self { inner: Arc::new(Catalog { locale, bundle }) }
    }

    pub fn locale(&self) -> Locale {
        self.inner.locale
    }

    /// Translate a message without arguments.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translate a message with placeables.
    pub fn tr_args(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let bundle = &self.inner.bundle;
        if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.into_owned();
            }
            log::warn!("message {key} formatted with errors: {errors:?}");
        }
        format!("MISSING: {key}")
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
