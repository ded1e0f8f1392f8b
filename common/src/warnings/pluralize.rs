/// `word` as is when `count` is 1, otherwise its plural form.
pub fn maybe_pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        return word.to_string();
    }
    match word {
        "was" => "were".to_string(),
        "is" => "are".to_string(),
        "has" => "have".to_string(),
        _ => format!("{word}s"),
    }
}
