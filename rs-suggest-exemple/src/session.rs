use rs_suggest_core::{Suggestion, SuggestionEngine};

use crate::settings::SuggestionSettings;

/// State of one typing box: the current text and what is proposed for it.
///
/// This is presentation logic on top of the engine: it decides when the last
/// word needs completing, which continuation sizes to ask for, and hides
/// incomplete or duplicate suggestions.
pub struct Session<'a> {
    engine: &'a SuggestionEngine,
    settings: SuggestionSettings,
    input: String,
    suggestions: Vec<String>,
}

impl<'a> Session<'a> {
    pub fn new(engine: &'a SuggestionEngine, settings: SuggestionSettings) -> Self {
        Self { engine, settings, input: String::new(), suggestions: Vec::new() }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Replaces the text and recomputes the suggestions.
    ///
    /// # Behavior
    /// - A text without words has no suggestions.
    /// - A text not ending with whitespace has an unfinished last word: its
    ///   completions are listed first and continuations correct it.
    /// - Only the last `window_size` words are used as context.
    /// - One-word continuations come next, then two-word ones.
    pub fn update(&mut self, text: &str) {
        self.input = text.to_owned();
        self.suggestions.clear();

        let words: Vec<&str> = text.split_whitespace().collect();
        let Some(last) = words.last() else {
            return;
        };
        let needs_completion = !text.ends_with(char::is_whitespace);

        let window = self.engine.context_model().window_size();
        let words = &words[words.len().saturating_sub(window)..];

        if needs_completion {
            self.suggestions = self.engine.complete_prefix(last, self.settings.completions);
        }

        let single = self.engine.suggest_continuation(words, 1, needs_completion, self.settings.single_word_suggestions);
        self.extend_with(&single, 1);
        let double = self.engine.suggest_continuation(words, 2, needs_completion, self.settings.two_word_suggestions);
        self.extend_with(&double, 2);

        log::debug!("input: {:?} suggestions: {:?}", self.input, self.suggestions);
    }

    /// Accepts a listed suggestion: it replaces the last word, a space is
    /// appended and the suggestions are recomputed.
    pub fn accept(&mut self, suggestion: &str) {
        let mut words: Vec<&str> = self.input.split_whitespace().collect();
        words.pop();
        words.push(suggestion);
        let text = format!("{} ", words.join(" "));
        self.update(&text);
    }

    /// Appends the complete, not yet listed suggestions of `expected` extra words.
    fn extend_with(&mut self, suggestions: &[Suggestion], expected: usize) {
        for suggestion in suggestions {
            if suggestion.len() < expected + 1 {
                continue;
            }
            let Some(text) = suggestion.to_text() else {
                continue;
            };
            if !self.suggestions.contains(&text) {
                self.suggestions.push(text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rs_suggest_core::{EngineConfig, Text};

    fn text(words: &str) -> Text {
        words.split_whitespace().map(str::to_owned).collect()
    }

    fn engine() -> SuggestionEngine {
        let corpus = vec![text("the cat sat down"), text("the cat ran away"), text("the cow")];
        SuggestionEngine::from_corpus(&corpus, &EngineConfig { window_size: 2, threads: 1 }).unwrap()
    }

    #[test]
    fn blank_text_has_no_suggestions() {
        let engine = engine();
        let mut session = Session::new(&engine, SuggestionSettings::default());
        session.update("   ");
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn unfinished_word_lists_completions_then_continuations() {
        let engine = engine();
        let mut session = Session::new(&engine, SuggestionSettings::default());
        session.update("the c");
        assert_eq!(
            session.suggestions(),
            &["cat", "cow", "cat sat", "cat ran", "cat sat down"]
        );
    }

    #[test]
    fn finished_word_lists_continuations_only() {
        let engine = engine();
        let mut session = Session::new(&engine, SuggestionSettings::default());
        session.update("the cat ");
        assert_eq!(session.suggestions(), &["cat sat", "cat ran", "cat sat down"]);
    }

    #[test]
    fn incomplete_continuations_are_hidden() {
        let engine = engine();
        let mut session = Session::new(&engine, SuggestionSettings::default());
        // "cow" only ever ends a text
        session.update("cow ");
        assert!(session.suggestions().is_empty());
        session.update("the cat sat ");
        assert_eq!(session.suggestions(), &["sat down"]);
    }

    #[test]
    fn accepting_replaces_the_last_word() {
        let engine = engine();
        let mut session = Session::new(&engine, SuggestionSettings::default());
        session.update("the c");
        session.accept("cat sat");
        assert_eq!(session.input(), "the cat sat ");
        assert_eq!(session.suggestions(), &["sat down"]);
    }
}
