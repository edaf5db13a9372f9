//! Internationalization (i18n) module
//!
//! Picks the emulator's UI language from the system locale.
//! Supports English and Chinese Simplified.
//! Note: Log messages remain in English for consistency.

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    ChineseSimplified,
}

impl Language {
    /// Locale key used by the translation files
    pub fn locale(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::ChineseSimplified => "zh-CN",
        }
    }

    /// Map a BCP 47 / POSIX locale tag to a supported language
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        if tag.starts_with("zh") || tag.contains("hans") {
            Language::ChineseSimplified
        } else {
            Language::English
        }
    }
}

/// Detect system language, falling back to the usual environment variables
pub fn detect_language() -> Language {
    let tag = sys_locale::get_locale()
        .or_else(|| std::env::var("LC_ALL").ok())
        .or_else(|| std::env::var("LANG").ok())
        .unwrap_or_default();
    Language::from_tag(&tag)
}

/// Initialize the translation locale based on system settings
pub fn init_locale() -> Language {
    let language = detect_language();
    rust_i18n::set_locale(language.locale());
    language
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_detection() {
        // This test just ensures the function doesn't panic
        let _lang = detect_language();
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("zh-CN"), Language::ChineseSimplified);
        assert_eq!(Language::from_tag("zh_CN.UTF-8"), Language::ChineseSimplified);
        assert_eq!(Language::from_tag("zh-Hans-SG"), Language::ChineseSimplified);
        assert_eq!(Language::from_tag("en-US"), Language::English);
        assert_eq!(Language::from_tag(""), Language::English);
    }

    #[test]
    fn test_translations_exist() {
        for language in [Language::English, Language::ChineseSimplified] {
            let hint = rust_i18n::t!("lcd_hint", locale = language.locale());
            assert!(!hint.is_empty());
            assert_ne!(hint, "lcd_hint");
        }
    }
}
