//! Case, character, stopword and accent normalizers.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English stopwords, all lowercase.
pub static STOPWORDS: [&str; 127] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
    "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

pub fn lowercase<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| t.as_ref().to_lowercase()).collect()
}

/// Keep alphanumerics, plus apostrophes that sit between two letters.
///
/// Tokens made only of punctuation come back empty; the caller decides whether
/// to keep them.
pub fn strip_special<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| strip_special_token(t.as_ref())).collect()
}

fn strip_special_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            c.is_alphanumeric()
                || (c == '\''
                    && i > 0
                    && i + 1 < chars.len()
                    && chars[i - 1].is_alphabetic()
                    && chars[i + 1].is_alphabetic())
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Case-insensitive stopword test.
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token.to_lowercase().as_str())
}

pub fn remove_stopwords<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|t| {
            let t: &str = t.as_ref();
            (!is_stopword(t)).then(|| t.to_string())
        })
        .collect()
}

/// Replace accented characters with their plain forms.
pub fn strip_accents<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| strip_accents_token(t.as_ref())).collect()
}

fn strip_accents_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for c in token.chars() {
        match fold_accent(c) {
            Some(plain) => out.push_str(plain),
            None => out.push(c),
        }
    }
    out
}

/// Plain replacement for an accented character, if the table has one.
///
/// Covers lowercase Latin-1 and Latin Extended-A letters plus both cases of
/// the Vietnamese vowel block; uppercase Latin-1 letters pass through.
pub fn fold_accent(c: char) -> Option<&'static str> {
    let plain = match c {
        'Ạ' | 'Ả' | 'Ấ' | 'Ầ' | 'Ẩ' | 'Ẫ' | 'Ậ' | 'Ắ' | 'Ằ' | 'Ẳ' | 'Ẵ' | 'Ặ' => "A",
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'ā' | 'ă' | 'ą' | 'ạ' | 'ả' | 'ấ' | 'ầ' | 'ẩ' | 'ẫ'
        | 'ậ' | 'ắ' | 'ằ' | 'ẳ' | 'ẵ' | 'ặ' => "a",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ď' | 'đ' => "d",
        'Ẹ' | 'Ẻ' | 'Ẽ' | 'Ế' | 'Ề' | 'Ể' | 'Ễ' | 'Ệ' => "E",
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ę' | 'ě' | 'ẹ' | 'ẻ' | 'ẽ' | 'ế' | 'ề' | 'ể'
        | 'ễ' | 'ệ' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'Ỉ' | 'Ị' => "I",
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'ĭ' | 'į' | 'ĩ' | 'ỉ' | 'ị' => "i",
        'ĵ' => "j",
        'ķ' | 'ĸ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' | 'ŋ' => "n",
        'Ọ' | 'Ỏ' | 'Ố' | 'Ồ' | 'Ổ' | 'Ỗ' | 'Ộ' | 'Ớ' | 'Ờ' | 'Ở' | 'Ỡ' | 'Ợ' => "O",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' | 'ŏ' | 'ǫ' | 'ő' | 'ơ' | 'ọ' | 'ỏ' | 'ố' | 'ồ'
        | 'ổ' | 'ỗ' | 'ộ' | 'ớ' | 'ờ' | 'ở' | 'ỡ' | 'ợ' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ţ' | 'ť' | 'ŧ' => "t",
        'Ụ' | 'Ủ' | 'Ứ' | 'Ừ' | 'Ử' | 'Ữ' | 'Ự' => "U",
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ŭ' | 'ų' | 'ũ' | 'ů' | 'ű' | 'ụ' | 'ủ' | 'ứ' | 'ừ'
        | 'ử' | 'ữ' | 'ự' => "u",
        'ŵ' | 'ẁ' | 'ẃ' | 'ẅ' | 'ẇ' | 'ẉ' => "w",
        'ẋ' | 'ẍ' => "x",
        'Ỳ' | 'Ỵ' | 'Ỷ' | 'Ỹ' => "Y",
        'ŷ' | 'ÿ' | 'ý' | 'ẏ' | 'ỳ' | 'ỵ' | 'ỷ' | 'ỹ' => "y",
        'ź' | 'ż' | 'ž' | 'ẑ' => "z",
        _ => return None,
    };
    Some(plain)
}
