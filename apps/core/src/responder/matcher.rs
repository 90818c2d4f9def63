/// Predicate over normalized input.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// The whole input equals one of the phrases.
    Exact(&'static [&'static str]),
    /// The input contains one of the fragments anywhere.
    Contains(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Exact(phrases) => phrases.iter().any(|p| *p == text),
            Matcher::Contains(fragments) => fragments.iter().any(|f| text.contains(f)),
        }
    }
}
