/*!
 * Serbian Cyrillic to Latin transliteration.
 *
 * Applied as a post-processing step when the translation target is the
 * Latin-script Serbian variant. The mapping is total: every Serbian
 * Cyrillic letter maps to its Latin equivalent (including the digraph
 * letters Lj, Nj, Dž) and any other character passes through unchanged,
 * so this step can never fail a unit.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

static CYRILLIC_TO_LATIN: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('А', "A"), ('Б', "B"), ('В', "V"), ('Г', "G"), ('Д', "D"),
        ('Ђ', "Đ"), ('Е', "E"), ('Ж', "Ž"), ('З', "Z"), ('И', "I"),
        ('Ј', "J"), ('К', "K"), ('Л', "L"), ('Љ', "Lj"), ('М', "M"),
        ('Н', "N"), ('Њ', "Nj"), ('О', "O"), ('П', "P"), ('Р', "R"),
        ('С', "S"), ('Т', "T"), ('Ћ', "Ć"), ('У', "U"), ('Ф', "F"),
        ('Х', "H"), ('Ц', "C"), ('Ч', "Č"), ('Џ', "Dž"), ('Ш', "Š"),
        ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"),
        ('ђ', "đ"), ('е', "e"), ('ж', "ž"), ('з', "z"), ('и', "i"),
        ('ј', "j"), ('к', "k"), ('л', "l"), ('љ', "lj"), ('м', "m"),
        ('н', "n"), ('њ', "nj"), ('о', "o"), ('п', "p"), ('р', "r"),
        ('с', "s"), ('т', "t"), ('ћ', "ć"), ('у', "u"), ('ф', "f"),
        ('х', "h"), ('ц', "c"), ('ч', "č"), ('џ', "dž"), ('ш', "š"),
    ])
});

/// Transliterate Serbian Cyrillic text to the Latin script.
///
/// Characters outside the Serbian Cyrillic alphabet (punctuation, digits,
/// text already in Latin script) are copied through unchanged.
pub fn to_latin(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match CYRILLIC_TO_LATIN.get(&ch) {
            Some(latin) => result.push_str(latin),
            None => result.push(ch),
        }
    }
    result
}
