/// Split a sentence into word and punctuation tokens.
///
/// Alphanumeric characters and apostrophes accumulate into a word, so
/// contractions like `don't` stay whole. Any other character ends the current
/// word; it becomes a token of its own unless it is a plain space.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in sentence.chars() {
        if c.is_alphanumeric() || c == '\'' {
            current.push(c);
            continue;
        }
        if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        if c != ' ' {
            tokens.push(c.to_string());
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
