/*!
 * Language utilities for target-language code handling.
 *
 * Validates ISO 639-1 (2-letter) and ISO 639-2 (3-letter) language codes,
 * optionally carrying a script subtag (e.g. "sr-Latn"). The script subtag
 * is stripped before ISO validation; the only subtag that changes pipeline
 * behavior is the Latin-script Serbian variant.
 */

use anyhow::{Result, anyhow};
use isolang::Language;

/// Split a language code into its base code and optional script subtag.
///
/// Accepts both "-" and "_" as separators ("sr-Latn" and "sr_Latn" are
/// equivalent).
pub fn split_script_subtag(code: &str) -> (String, Option<String>) {
    let trimmed = code.trim();
    match trimmed.split_once(['-', '_']) {
        Some((base, script)) if !script.is_empty() => {
            (base.to_lowercase(), Some(script.to_lowercase()))
        }
        _ => (trimmed.to_lowercase(), None),
    }
}

/// Validate that a language code names a known language.
///
/// The script subtag, when present, is ignored for validation purposes.
pub fn validate_language_code(code: &str) -> Result<()> {
    let (base, _script) = split_script_subtag(code);

    if base.len() == 2 && Language::from_639_1(&base).is_some() {
        return Ok(());
    }
    if base.len() == 3 && Language::from_639_3(&base).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code to the ISO 639-1 (2-letter) form used by the
/// provider APIs, preserving the script subtag when present.
pub fn normalize_for_provider(code: &str) -> Result<String> {
    let (base, script) = split_script_subtag(code);

    let part1 = if base.len() == 2 {
        Language::from_639_1(&base)
            .map(|_| base.clone())
            .ok_or_else(|| anyhow!("Invalid language code: {}", code))?
    } else if base.len() == 3 {
        let lang = Language::from_639_3(&base)
            .ok_or_else(|| anyhow!("Invalid language code: {}", code))?;
        lang.to_639_1()
            .map(|c| c.to_string())
            .unwrap_or_else(|| base.clone())
    } else {
        return Err(anyhow!("Invalid language code: {}", code));
    };

    match script {
        Some(script) => Ok(format!("{}-{}", part1, capitalize_script(&script))),
        None => Ok(part1),
    }
}

fn capitalize_script(script: &str) -> String {
    let mut chars = script.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// True when the code names the Latin-script Serbian variant, which gates
/// the Cyrillic-to-Latin transliteration step.
pub fn is_serbian_latin(code: &str) -> bool {
    let (base, script) = split_script_subtag(code);
    (base == "sr" || base == "srp") && script.as_deref() == Some("latn")
}

/// Check if two language codes name the same language, ignoring script
/// subtags.
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    let base1 = match normalize_for_provider(code1) {
        Ok(n) => split_script_subtag(&n).0,
        Err(_) => return false,
    };
    let base2 = match normalize_for_provider(code2) {
        Ok(n) => split_script_subtag(&n).0,
        Err(_) => return false,
    };
    base1 == base2
}

/// Get the English language name from a code.
pub fn get_language_name(code: &str) -> Result<String> {
    let (base, _script) = split_script_subtag(code);

    let lang = if base.len() == 2 {
        Language::from_639_1(&base)
    } else {
        Language::from_639_3(&base)
    };

    lang.map(|l| l.to_name().to_string())
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))
}
