//! Built-in word lists, selectable by number from the command line

const WORD_LISTS: &[&[&str]] = &[
    &["java", "is", "fun"],
    &["smoke"],
    &[
        "smoke", "hatch", "tiger", "chair", "pound", "stoic", "canoe", "under", "oasis", "album",
    ],
    &[
        "import", "public", "static", "final", "int", "class", "if", "else", "return", "char",
        "double", "boolean", "java",
    ],
];

/// Number of built-in lists
pub fn count() -> usize {
    WORD_LISTS.len()
}

/// List `number`, counting from 1
pub fn get(number: usize) -> Option<&'static [&'static str]> {
    number
        .checked_sub(1)
        .and_then(|i| WORD_LISTS.get(i))
        .copied()
}
