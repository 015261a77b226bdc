//! Phonetic name encoding.
//!
//! A soundex variant tuned so that common transliterations of Slavic names
//! collapse to the same code: Nimzovich matches Nimzowitsch, Tal matches
//! Talj. The price is the occasional wildly false match.

/// Maximum number of symbols in an encoded name.
pub const MAX_SOUNDEX_LEN: usize = 50;

//                            ABCDEFGHIJKLMNOPQRSTUVWXYZ
const MAPPING: &[u8; 26] = b"01230120002455012622011202";

/// Encode `name` into its phonetic code.
///
/// Names starting with `J` or `Y` get a leading `7` so that Janosevic does
/// not collide with Nimzovich, and Yusupov still matches Jusupov.
pub fn soundex(name: &str) -> String {
    let mut code = String::new();
    let mut chars = name.chars().peekable();

    if matches!(chars.peek(), Some('J' | 'j' | 'Y' | 'y')) {
        code.push('7');
        chars.next();
    }

    let mut last_letter: Option<char> = None;
    let mut last_digit: Option<char> = None;

    for ch in chars {
        if code.len() >= MAX_SOUNDEX_LEN {
            break;
        }
        if !ch.is_ascii_alphabetic() {
            continue;
        }
        let letter = ch.to_ascii_uppercase();
        if last_letter == Some(letter) {
            continue;
        }
        last_letter = Some(letter);

        let digit = MAPPING[(letter as u8 - b'A') as usize] as char;
        if digit != '0' && last_digit != Some(digit) {
            code.push(digit);
            last_digit = Some(digit);
        }
    }

    code
}
