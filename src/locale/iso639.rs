// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language codes.
//!
//! Validation covers the full two-letter register so that any well-formed
//! locale parses, even one with no catalog behind it (it simply falls back to
//! English). Display names are kept for the languages people actually ask
//! for.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// All ISO 639-1 codes, sorted for binary search.
const CODES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", //
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", //
    "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", //
    "da", "de", "dv", "dz", //
    "ee", "el", "en", "eo", "es", "et", "eu", //
    "fa", "ff", "fi", "fj", "fo", "fr", "fy", //
    "ga", "gd", "gl", "gn", "gu", "gv", //
    "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz", //
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", //
    "ja", "jv", //
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", //
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", //
    "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", //
    "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", //
    "oc", "oj", "om", "or", "os", //
    "pa", "pi", "pl", "ps", "pt", //
    "qu", //
    "rm", "rn", "ro", "ru", "rw", //
    "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss", "st",
    "su", "sv", "sw", //
    "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", //
    "ug", "uk", "ur", "uz", //
    "ve", "vi", "vo", //
    "wa", "wo", //
    "xh", //
    "yi", "yo", //
    "za", "zh", "zu",
];

/// (code, English name, native name)
const NAMES: &[(&str, &str, &str)] = &[
    ("ar", "Arabic", "العربية"),
    ("cs", "Czech", "Čeština"),
    ("da", "Danish", "Dansk"),
    ("de", "German", "Deutsch"),
    ("el", "Greek", "Ελληνικά"),
    ("en", "English", "English"),
    ("es", "Spanish", "Español"),
    ("fi", "Finnish", "Suomi"),
    ("fr", "French", "Français"),
    ("he", "Hebrew", "עברית"),
    ("hi", "Hindi", "हिन्दी"),
    ("hu", "Hungarian", "Magyar"),
    ("id", "Indonesian", "Bahasa Indonesia"),
    ("it", "Italian", "Italiano"),
    ("ja", "Japanese", "日本語"),
    ("ko", "Korean", "한국어"),
    ("ms", "Malay", "Bahasa Melayu"),
    ("nb", "Norwegian", "Norsk bokmål"),
    ("nl", "Dutch", "Nederlands"),
    ("no", "Norwegian", "Norsk"),
    ("pl", "Polish", "Polski"),
    ("pt", "Portuguese", "Português"),
    ("ro", "Romanian", "Română"),
    ("ru", "Russian", "Русский"),
    ("sv", "Swedish", "Svenska"),
    ("th", "Thai", "ไทย"),
    ("tr", "Turkish", "Türkçe"),
    ("uk", "Ukrainian", "Українська"),
    ("vi", "Vietnamese", "Tiếng Việt"),
    ("zh", "Chinese", "中文"),
];

/// Whether `code` is a registered ISO 639-1 code. Lowercase only.
pub fn is_valid_iso639_1(code: &str) -> bool {
    CODES.binary_search(&code).is_ok()
}

/// English name of the language, if we carry one.
pub fn language_name(code: &str) -> Option<&'static str> {
    names_for(code).map(|(_, english, _)| english)
}

/// The language's name for itself, for pickers and listings.
pub fn native_name(code: &str) -> Option<&'static str> {
    names_for(code).map(|(_, _, native)| native)
}

fn names_for(code: &str) -> Option<(&'static str, &'static str, &'static str)> {
    NAMES
        .binary_search_by(|(c, _, _)| (*c).cmp(code))
        .ok()
        .map(|index| NAMES[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(CODES.windows(2).all(|w| w[0] < w[1]), "CODES must stay sorted");
        assert!(
            NAMES.windows(2).all(|w| w[0].0 < w[1].0),
            "NAMES must stay sorted by code"
        );
    }

    #[test]
    fn named_languages_are_valid_codes() {
        for (code, _, _) in NAMES {
            assert!(is_valid_iso639_1(code), "{code} is not in CODES");
        }
    }

    #[test]
    fn validation() {
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("de"));
        assert!(is_valid_iso639_1("zu"));
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("deu"));
        assert!(!is_valid_iso639_1("DE"));
    }

    #[test]
    fn display_names() {
        assert_eq!(language_name("de"), Some("German"));
        assert_eq!(native_name("de"), Some("Deutsch"));
        assert_eq!(native_name("ja"), Some("日本語"));
        assert_eq!(language_name("xx"), None);
    }
}
