//! Vowel-structure predicates and the weight measure that gate the rules.
//!
//! A vowel is one of `a e i o u`, lowercase only; `y` is always a consonant
//! here. Every function counts characters, not bytes, and is total: short or
//! empty input simply answers `false` / `0`.

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Number of vowel runs in `stem`: each vowel whose predecessor is absent or
/// not a vowel starts a new run.
///
/// ```
/// use arivu_stem::weight;
///
/// assert_eq!(weight("tree"), 1);
/// assert_eq!(weight("troubles"), 2);
/// assert_eq!(weight("bcd"), 0);
/// ```
pub fn weight(stem: &str) -> usize {
    let mut count = 0;
    let mut prev_vowel = false;
    for c in stem.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    count
}

/// True when any character of `s` is a vowel.
pub fn has_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}

/// True when `s` ends in two identical non-vowel characters.
pub fn is_double_consonant(s: &str) -> bool {
    let mut tail = s.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(last), Some(prev)) => last == prev && !is_vowel(last),
        _ => false,
    }
}

/// True when the last three characters of `s` are vowel, non-vowel, vowel.
pub fn has_tail_pattern(s: &str) -> bool {
    let mut tail = s.chars().rev();
    match (tail.next(), tail.next(), tail.next()) {
        (Some(last), Some(middle), Some(first)) => {
            is_vowel(first) && !is_vowel(middle) && is_vowel(last)
        }
        _ => false,
    }
}
