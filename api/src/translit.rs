//! Romanized Arabic input and Latin phonetic rendering

/// Romanized-Arabic clusters and their Arabic letters, in application order.
///
/// Each entry is one literal replacement pass over the whole string, so keys
/// that can share letters compete: `thah` reads as `ث` + `h` only because `tha`
/// runs before `ah`, and `tah` keeps its `t` because `ah` runs before `ta`. Latin keys are case-sensitive:
/// `S` and `D` are the emphatic consonants, `s` and `d` are left alone.
pub const ROMANIZED_TABLE: &[(&str, &str)] = &[
    ("tha", "ث"),
    ("gh", "غ"),
    ("dh", "ذ"),
    ("ee", "ي"),
    ("ah", "ة"),
    ("ta", "ة"),
    ("S", "ص"),
    ("D", "ض"),
    ("3", "ع"),
    ("7", "ح"),
    ("2", "ء"),
];

/// Arabic letters and the Latin approximation used for pronunciation hints.
pub const PHONETIC_TABLE: &[(char, &str)] = &[
    ('ا', "a"),
    ('ب', "b"),
    ('ت', "t"),
    ('ث', "th"),
    ('ج', "j"),
    ('ح', "h"),
    ('خ', "kh"),
    ('د', "d"),
    ('ذ', "dh"),
    ('ر', "r"),
    ('ز', "z"),
    ('س', "s"),
    ('ش', "sh"),
    ('ص', "s"),
    ('ض', "d"),
    ('ط', "t"),
    ('ظ', "z"),
    ('ع', "\u{2018}"),
    ('غ', "gh"),
    ('ف', "f"),
    ('ق', "q"),
    ('ك', "k"),
    ('ل', "l"),
    ('م', "m"),
    ('ن', "n"),
    ('ه', "h"),
    ('و', "w"),
    ('ي', "y"),
    ('ء', "\u{2018}"),
    ('ة', "h"),
    ('ى', "a"),
    ('ئ', "y"),
    ('ؤ', "w"),
];

/// Rewrite Romanized Arabic (`3ilm`, `ghaib`) into Arabic script.
///
/// Replacements are literal substring passes in [`ROMANIZED_TABLE`] order.
/// Text with none of the keys comes back unchanged.
pub fn romanized_to_arabic(input: &str) -> String {
    let mut word = input.to_string();
    for &(key, arabic) in ROMANIZED_TABLE {
        if word.contains(key) {
            word = word.replace(key, arabic);
        }
    }
    word
}

fn phonetic_of(c: char) -> Option<&'static str> {
    PHONETIC_TABLE
        .iter()
        .find(|(arabic, _)| *arabic == c)
        .map(|(_, latin)| *latin)
}

/// Render Arabic script as a Latin pronunciation guide, one character at a time.
///
/// Characters outside [`PHONETIC_TABLE`] (spaces, punctuation, diacritics,
/// Latin text) pass through untouched.
pub fn arabic_to_phonetic(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match phonetic_of(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}
