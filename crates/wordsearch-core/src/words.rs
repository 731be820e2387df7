//! Turning raw user input into placeable words

/// Lowercase `input` and drop everything outside a-z.
///
/// May return an empty string, which must not be handed to the builder.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Sanitize a list of raw entries, dropping empties and repeats.
///
/// The first occurrence of each word keeps its position.
pub fn prepare_word_list<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = Vec::new();
    for entry in raw {
        let word = sanitize(entry.as_ref());
        if word.is_empty() {
            log::debug!("dropping {:?}: nothing left after sanitizing", entry.as_ref());
            continue;
        }
        if words.contains(&word) {
            continue;
        }
        words.push(word);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Word Search 2024!"), "wordsearch");
        assert_eq!(sanitize("JAVA"), "java");
        assert_eq!(sanitize("  "), "");
        assert_eq!(sanitize("café"), "caf");
        assert_eq!(sanitize("o'neil-smith"), "oneilsmith");
    }

    #[test]
    fn test_prepare_word_list() {
        let words = prepare_word_list(["Tiger", "123", "cat", "tiger", "C.A.T", "ox"]);
        assert_eq!(words, vec!["tiger", "cat", "ox"]);
        assert!(prepare_word_list(Vec::<String>::new()).is_empty());
    }
}
