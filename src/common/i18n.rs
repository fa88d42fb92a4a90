// src/common/i18n.rs

use std::collections::HashMap;

use anyhow::Context;

pub const DEFAULT_LANGUAGE: &str = "en";

// Catálogos embutidos no binário: (idioma, conteúdo JSON)
const CATALOGS: [(&str, &str); 3] = [
    ("en", include_str!("../../locales/en.json")),
    ("ru", include_str!("../../locales/ru.json")),
    ("kk", include_str!("../../locales/kk.json")),
];

/// Mensagens traduzidas, indexadas por idioma e chave.
#[derive(Debug, Clone)]
pub struct I18nStore {
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl I18nStore {
    pub fn load() -> anyhow::Result<Self> {
        let mut catalogs = HashMap::new();
        for (lang, raw) in CATALOGS {
            let messages: HashMap<String, String> = serde_json::from_str(raw)
                .with_context(|| format!("Catálogo de idioma inválido: {lang}"))?;
            catalogs.insert(lang.to_string(), messages);
        }
        Ok(Self { catalogs })
    }

    pub fn is_supported(&self, lang: &str) -> bool {
        self.catalogs.contains_key(lang)
    }

    /// Procura no idioma pedido, depois em inglês e, por fim, devolve a própria chave.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        [lang, DEFAULT_LANGUAGE]
            .iter()
            .filter_map(|l| self.catalogs.get(*l))
            .find_map(|messages| messages.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_has_the_english_keys() {
        let store = I18nStore::load().unwrap();
        let english = &store.catalogs[DEFAULT_LANGUAGE];

        for (lang, messages) in &store.catalogs {
            for key in english.keys() {
                assert!(messages.contains_key(key), "{lang} sem a chave {key}");
            }
        }
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let store = I18nStore::load().unwrap();

        assert_eq!(store.translate("de", "unauthorized"), store.translate("en", "unauthorized"));
        assert_ne!(store.translate("ru", "unauthorized"), store.translate("en", "unauthorized"));
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let store = I18nStore::load().unwrap();
        assert_eq!(store.translate("kk", "no_such_key"), "no_such_key");
    }
}
