/*!
 * Tests for language code utilities
 */

use prevod::language_utils::{
    get_language_name, is_serbian_latin, language_codes_match, normalize_for_provider,
    split_script_subtag, validate_language_code,
};

#[test]
fn test_splitScriptSubtag_bothSeparators_shouldSplitTheSameWay() {
    assert_eq!(split_script_subtag("sr-Latn"), ("sr".to_string(), Some("latn".to_string())));
    assert_eq!(split_script_subtag("sr_Latn"), ("sr".to_string(), Some("latn".to_string())));
    assert_eq!(split_script_subtag("fr"), ("fr".to_string(), None));
}

#[test]
fn test_validateLanguageCode_mixedForms_shouldValidate() {
    // Two and three letter forms
    assert!(validate_language_code("de").is_ok());
    assert!(validate_language_code("deu").is_ok());

    // Surrounding whitespace and case are tolerated
    assert!(validate_language_code(" SR-LATN ").is_ok());

    // Garbage is not
    assert!(validate_language_code("x").is_err());
    assert!(validate_language_code("french").is_err());
}

#[test]
fn test_normalizeForProvider_shouldProduceProviderReadyCodes() {
    assert_eq!(normalize_for_provider("FR").unwrap(), "fr");
    assert_eq!(normalize_for_provider("deu").unwrap(), "de");
    assert_eq!(normalize_for_provider("srp-latn").unwrap(), "sr-Latn");
    assert!(normalize_for_provider("zz").is_err());
}

#[test]
fn test_isSerbianLatin_onlySerbianWithLatnSubtag_shouldMatch() {
    assert!(is_serbian_latin("sr-Latn"));
    assert!(is_serbian_latin("srp_latn"));

    // Plain Serbian keeps the provider's Cyrillic output
    assert!(!is_serbian_latin("sr"));
    // The subtag alone is not enough
    assert!(!is_serbian_latin("ru-Latn"));
    assert!(!is_serbian_latin("sr-Cyrl"));
}

#[test]
fn test_languageCodesMatch_equivalentCodes_shouldMatch() {
    assert!(language_codes_match("fr", "fra"));
    assert!(language_codes_match("sr-Latn", "srp"));
    assert!(!language_codes_match("sr", "hr"));
    assert!(!language_codes_match("fr", "not-a-code"));
}

#[test]
fn test_getLanguageName_shouldIgnoreScriptSubtag() {
    assert_eq!(get_language_name("fr").unwrap(), "French");
    assert_eq!(get_language_name("srp_Latn").unwrap(), "Serbian");
    assert!(get_language_name("qq").is_err());
}
