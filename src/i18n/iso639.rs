// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 code checks for language tags handed to the service.
//!
//! The service itself accepts any tag. These helpers let the CLI tell a
//! plausible-but-untranslated tag (`fr`, `ja-JP`) apart from a typo (`eng`).

/// All ISO 639-1 two-letter codes, sorted for binary search.
const CODES: &[&str] = &[
    "aa", "ab", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy",
    "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj",
    "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht",
    "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv",
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky",
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn",
    "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny",
    "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru",
    "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss",
    "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts",
    "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi", "yo",
    "za", "zh", "zu",
];

/// (code, English name, native name) for languages a dashboard user is
/// likely to type in.
const NAMES: &[(&str, &str, &str)] = &[
    ("de", "German", "Deutsch"),
    ("en", "English", "English"),
    ("es", "Spanish", "Español"),
    ("fr", "French", "Français"),
    ("it", "Italian", "Italiano"),
    ("ja", "Japanese", "日本語"),
    ("ko", "Korean", "한국어"),
    ("pt", "Portuguese", "Português"),
    ("ru", "Russian", "Русский"),
    ("zh", "Chinese", "中文"),
];

/// Primary language subtag of a tag: `"zh-CN"` and `"zh_CN"` both yield `"zh"`.
pub fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// Whether the tag's primary subtag is a known ISO 639-1 code.
///
/// Case-sensitive: ISO 639-1 codes are lowercase.
///
/// # Examples
/// ```
/// use dashboard_locale::i18n::is_known_tag;
/// assert!(is_known_tag("fr"));
/// assert!(is_known_tag("en-US"));
/// assert!(!is_known_tag("eng"));
/// ```
pub fn is_known_tag(tag: &str) -> bool {
    CODES.binary_search(&primary_subtag(tag)).is_ok()
}

/// English name of the tag's language, if listed.
pub fn language_name(tag: &str) -> Option<&'static str> {
    find(tag).map(|&(_, english, _)| english)
}

/// Name of the tag's language written in that language, if listed.
pub fn native_name(tag: &str) -> Option<&'static str> {
    find(tag).map(|&(_, _, native)| native)
}

fn find(tag: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let code = primary_subtag(tag);
    NAMES.iter().find(|(c, _, _)| *c == code)
}
