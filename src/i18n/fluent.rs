// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                        add_bundle(&mut bundles, &mut available_locales, locale, source);
                    }
                }
            }
        }

        // Custom builds can override or extend the embedded locales with a
        // directory of .ftl files (one per locale).
        if let Some(dir) = i18n_dir {
            load_directory(&dir, &mut bundles, &mut available_locales);
        }

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn add_bundle(
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
    locale: LanguageIdentifier,
    source: String,
) {
    let Ok(resource) = FluentResource::try_new(source) else {
        eprintln!("Skipping malformed FTL resource for {}", locale);
        return;
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    if bundle.add_resource(resource).is_err() {
        eprintln!("Skipping conflicting FTL resource for {}", locale);
        return;
    }
    if bundles.insert(locale.clone(), bundle).is_none() {
        available_locales.push(locale);
    }
}

fn load_directory(
    dir: &str,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        eprintln!("Could not read i18n directory: {}", dir);
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(stem) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(".ftl"))
        else {
            continue;
        };
        let Ok(locale) = stem.parse::<LanguageIdentifier>() else {
            continue;
        };
        if let Ok(source) = std::fs::read_to_string(&path) {
            add_bundle(bundles, available_locales, locale, source);
        }
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
