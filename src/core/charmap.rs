// src/core/charmap.rs

/// Latin grapheme for a base Urdu letter.
///
/// Covers the Urdu alphabet plus the Arabic code points that Arabic keyboard
/// layouts emit for the same letters. Anything else is unmapped.
pub fn latin_for(c: char) -> Option<&'static str> {
    match c {
        'ا' => Some("a"), 'آ' => Some("aa"), 'ب' => Some("b"), 'پ' => Some("p"),
        'ت' => Some("t"), 'ٹ' => Some("t"), 'ث' => Some("s"), 'ج' => Some("j"),
        'چ' => Some("ch"), 'ح' => Some("h"), 'خ' => Some("kh"), 'د' => Some("d"),
        'ڈ' => Some("d"), 'ذ' => Some("z"), 'ر' => Some("r"), 'ڑ' => Some("r"),
        'ز' => Some("z"), 'س' => Some("s"), 'ش' => Some("sh"), 'ص' => Some("s"),
        'ض' => Some("z"), 'ط' => Some("t"), 'ظ' => Some("z"), 'ع' => Some("a"),
        'غ' => Some("gh"), 'ف' => Some("f"), 'ق' => Some("q"), 'ک' => Some("k"),
        'گ' => Some("g"), 'ل' => Some("l"), 'م' => Some("m"), 'ن' => Some("n"),
        'ں' => Some("n"), 'و' => Some("w"), 'ہ' => Some("h"), 'ۃ' => Some("h"),
        'ی' => Some("y"), 'ے' => Some("e"),

        'ھ' => Some("h"), // do-chashmi he
        'ئ' => Some("y"), // hamza on ya
        'ؤ' => Some("w"), // hamza on wao
        'ۓ' => Some("e"), // bari ye with hamza
        'ي' => Some("y"), // arabic ya
        'ى' => Some("y"), // alef maqsura
        'ك' => Some("k"), // arabic kaf
        'ه' => Some("h"), // arabic ha
        'ة' => Some("h"), // ta marbuta
        'أ' => Some("a"), // alef with hamza above
        'إ' => Some("a"), // alef with hamza below
        '\u{06C2}' => Some("h"), // gol he with hamza, NFC of ہ + hamza
        '\u{06C0}' => Some("h"), // he with yeh above, NFC of ه + hamza
        _ => None,
    }
}

pub fn is_mapped(c: char) -> bool {
    latin_for(c).is_some()
}
