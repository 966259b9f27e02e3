use crate::utils::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    pub(crate) const fn toggled(self) -> Self {
        use Theme::*;
        match self {
            Light => Dark,
            Dark => Light,
        }
    }

    /// Label for the button that switches away from this theme.
    pub(crate) const fn switch_label(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "Dark mode",
            Dark => "Light mode",
        }
    }

    fn update_html(self) {
        use gloo::utils::document;
        let Some(html) = document().document_element() else {
            log::error!("document has no root element");
            return;
        };
        let scheme = self.scheme();
        log::debug!("theme-scheme: {}", scheme);
        if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
            log::error!("failed to set theme: {:?}", err);
        }
    }

    pub(crate) fn init() -> Self {
        let theme = Self::local_or_default();
        theme.update_html();
        theme
    }

    pub(crate) fn apply(self) {
        self.local_save();
        self.update_html();
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "vanish:theme";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_theme() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn storage_key_is_namespaced() {
        assert_eq!(<Theme as StorageKey>::KEY, "vanish:theme");
    }
}
