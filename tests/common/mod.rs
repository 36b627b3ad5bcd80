use wrap_text_filter::{Renderer, LINE_BREAK};

/// Split wrapped output back into its line groups, each as a list of words
#[allow(dead_code)]
pub fn groups_of(wrapped: &str) -> Vec<Vec<String>> {
    if wrapped.is_empty() {
        return Vec::new();
    }

    wrapped
        .split(LINE_BREAK)
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

/// All words recovered from wrapped output, in order
#[allow(dead_code)]
pub fn words_of(wrapped: &str) -> Vec<String> {
    groups_of(wrapped).into_iter().flatten().collect()
}

/// Text made of `count` distinct words: "w1 w2 w3 ..."
#[allow(dead_code)]
pub fn numbered_words(count: usize) -> String {
    (1..=count)
        .map(|i| format!("w{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renderer with the helper registered under its default name and width
#[allow(dead_code)]
pub fn default_renderer() -> Renderer {
    Renderer::default()
}
