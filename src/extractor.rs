//Copyright 2024 Felix Engl
//
//Licensed under the Apache License, Version 2.0 (the "License");
//you may not use this file except in compliance with the License.
//You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
//Unless required by applicable law or agreed to in writing, software
//distributed under the License is distributed on an "AS IS" BASIS,
//WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//See the License for the specific language governing permissions and
//limitations under the License.


use std::iter::FusedIterator;
use std::slice::Windows;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::config::{SkipRange, WindowConfig};
use crate::error::{ConfigurationError, InputTypeError};
use crate::skip_gram::SkipGram;
use crate::tokens::TokenSequence;

/// Extracts skip-grams from a sequence of tokens.
///
/// For every window of exactly `window_size` tokens the extractor emits the
/// tokens before `skip_range.start` followed by the tokens from
/// `skip_range.end` to the end of the window. Sequences shorter than a
/// window produce no skip-grams.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipGramExtractor {
    config: WindowConfig,
}

impl SkipGramExtractor {
    pub fn new(window_size: usize, skip_range: impl Into<SkipRange>) -> Result<Self, ConfigurationError> {
        Ok(Self::with_config(WindowConfig::new(window_size, skip_range)?))
    }

    pub fn with_config(config: WindowConfig) -> Self {
        log::debug!(
            "Created skip-gram extractor with window size {} and skip range {:?}.",
            config.window_size(),
            config.skip_range()
        );
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    delegate::delegate! {
        to self.config {
            pub fn window_size(&self) -> usize;
            pub fn skip_range(&self) -> SkipRange;
            pub fn arity(&self) -> usize;
            pub fn gram_count(&self, token_count: usize) -> usize;
        }
    }

    /// Returns the left and right span of every window without copying.
    pub fn windows<'a, T>(&self, tokens: &'a [T]) -> SkipGramWindows<'a, T> {
        SkipGramWindows {
            windows: tokens.windows(self.config.window_size()),
            skip_range: self.config.skip_range()
        }
    }

    /// Extracts the skip-grams of `tokens` in window order.
    pub fn extract<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<SkipGram> {
        let grams: Vec<SkipGram> = self.windows(tokens)
            .map(|(left, right)| SkipGram::from_spans(left, right))
            .collect();
        log::trace!("Extracted {} skip-grams from {} tokens.", grams.len(), tokens.len());
        grams
    }

    /// Extracts the skip-grams of an untyped token sequence.
    /// Fails if `tokens` is not an array of strings.
    pub fn extract_value(&self, tokens: &Value) -> Result<Vec<SkipGram>, InputTypeError> {
        let tokens = TokenSequence::try_from(tokens)?;
        Ok(self.extract(&tokens))
    }
}

impl From<WindowConfig> for SkipGramExtractor {
    fn from(value: WindowConfig) -> Self {
        Self::with_config(value)
    }
}

/// An iterator over the `(left, right)` spans of every window.
#[derive(Debug, Clone)]
pub struct SkipGramWindows<'a, T> {
    windows: Windows<'a, T>,
    skip_range: SkipRange,
}

impl<'a, T> SkipGramWindows<'a, T> {
    #[inline]
    fn split(&self, window: &'a [T]) -> (&'a [T], &'a [T]) {
        (&window[..self.skip_range.start], &window[self.skip_range.end..])
    }
}

impl<'a, T> Iterator for SkipGramWindows<'a, T> {
    type Item = (&'a [T], &'a [T]);

    fn next(&mut self) -> Option<Self::Item> {
        let window = self.windows.next()?;
        Some(self.split(window))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for SkipGramWindows<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let window = self.windows.next_back()?;
        Some(self.split(window))
    }
}

impl<'a, T> ExactSizeIterator for SkipGramWindows<'a, T> {}

impl<'a, T> FusedIterator for SkipGramWindows<'a, T> {}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use lipsum::lipsum_words_with_rng;
    use log::LevelFilter;
    use log4rs::append::console::ConsoleAppender;
    use log4rs::config::{Appender, Logger, Root};
    use log4rs::Config;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    use serde_json::json;
    use crate::error::{ConfigurationErrorKind, InputTypeError};
    use crate::extractor::SkipGramExtractor;
    use crate::skip_gram::SkipGram;

    fn init() {
        let stdout = ConsoleAppender::builder().build();

        let config = Config::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .logger(Logger::builder().build("skipgram", LevelFilter::Trace))
            .build(Root::builder().appender("stdout").build(LevelFilter::Warn))
            .unwrap();

        let _ = log4rs::init_config(config);
    }

    fn pseudo_random_document(random: &mut StdRng, max_len: usize) -> Vec<String> {
        let len = random.gen_range(0..=max_len);
        lipsum_words_with_rng(random.clone(), len.max(1))
            .split_whitespace()
            .take(len)
            .map(str::to_string)
            .collect_vec()
    }

    fn pseudo_random_extractor(random: &mut StdRng) -> SkipGramExtractor {
        let window_size = random.gen_range(1..8);
        let start = random.gen_range(0..window_size);
        let end = random.gen_range(start..window_size);
        SkipGramExtractor::new(window_size, (start, end)).unwrap()
    }

    #[test]
    fn skips_the_middle(){
        init();
        let extractor = SkipGramExtractor::new(5, (2, 3)).unwrap();
        let grams = extractor.extract(&["a", "b", "c", "d", "e"]);
        assert_eq!(1, grams.len());
        assert_eq!(grams[0], ["a", "b", "d", "e"]);
    }

    #[test]
    fn slides_over_the_tokens(){
        init();
        let extractor = SkipGramExtractor::new(3, (1, 2)).unwrap();
        let grams = extractor.extract(&["w", "x", "y", "z"]);
        assert_eq!(2, grams.len());
        assert_eq!(grams[0], ["w", "y"]);
        assert_eq!(grams[1], ["x", "z"]);
    }

    #[test]
    fn short_sequences_produce_nothing(){
        let extractor = SkipGramExtractor::new(3, (1, 2)).unwrap();
        assert!(extractor.extract::<&str>(&[]).is_empty());
        assert!(extractor.extract(&["a", "b"]).is_empty());
        assert_eq!(1, extractor.extract(&["a", "b", "c"]).len());
    }

    #[test]
    fn no_skip_is_a_contiguous_ngram(){
        let tokens = ["where", "are", "we", "going", "cotton"];
        let extractor = SkipGramExtractor::new(3, (0, 0)).unwrap();
        let grams = extractor.extract(&tokens);
        let ngrams = tokens.windows(3).map(|window| SkipGram::from_iter(window.iter().copied())).collect_vec();
        assert_eq!(ngrams, grams);
    }

    #[test]
    fn unigrams_by_default(){
        let extractor = SkipGramExtractor::default();
        let grams = extractor.extract(&["a", "b", "a"]);
        assert_eq!(vec![SkipGram::from_iter(["a"]), SkipGram::from_iter(["b"]), SkipGram::from_iter(["a"])], grams);
    }

    #[test]
    fn empty_left_or_right_span(){
        let tokens = ["a", "b", "c", "d"];

        let extractor = SkipGramExtractor::new(3, (0, 2)).unwrap();
        let grams = extractor.extract(&tokens);
        assert_eq!(grams[0], ["c"]);
        assert_eq!(grams[1], ["d"]);

        let extractor = SkipGramExtractor::new(3, (2, 2)).unwrap();
        let grams = extractor.extract(&tokens);
        assert_eq!(grams[0], ["a", "b", "c"]);
        assert_eq!(grams[1], ["b", "c", "d"]);
    }

    #[test]
    fn empty_tokens_are_regular_tokens(){
        let extractor = SkipGramExtractor::new(2, (1, 1)).unwrap();
        let grams = extractor.extract(&["", "a", ""]);
        assert_eq!(grams[0], ["", "a"]);
        assert_eq!(grams[1], ["a", ""]);
    }

    #[test]
    fn invalid_configs_are_rejected(){
        assert_eq!(ConfigurationErrorKind::InvalidWindowSize, SkipGramExtractor::new(0, (0, 0)).unwrap_err().kind());
        assert_eq!(ConfigurationErrorKind::InvalidSkipRange, SkipGramExtractor::new(5, (3, 2)).unwrap_err().kind());
        assert_eq!(ConfigurationErrorKind::IncompatibleSkipRange, SkipGramExtractor::new(2, (2, 2)).unwrap_err().kind());
    }

    #[test]
    fn length_and_arity_hold(){
        let mut random = StdRng::seed_from_u64(123456);
        for _ in 0..200 {
            let extractor = pseudo_random_extractor(&mut random);
            let tokens = pseudo_random_document(&mut random, 40);
            let grams = extractor.extract(&tokens);
            let expected = (tokens.len() + 1).saturating_sub(extractor.window_size());
            assert_eq!(expected, grams.len(), "Failed for {:?} with {} tokens", extractor.config(), tokens.len());
            assert_eq!(expected, extractor.gram_count(tokens.len()));
            let skip_range = extractor.skip_range();
            let arity = skip_range.start + (extractor.window_size() - skip_range.end);
            assert_eq!(arity, extractor.arity());
            assert!(grams.iter().all(|gram| gram.arity() == arity), "Failed for {:?}", extractor.config());
        }
    }

    #[test]
    fn extraction_is_deterministic(){
        let mut random = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let extractor = pseudo_random_extractor(&mut random);
            let tokens = pseudo_random_document(&mut random, 30);
            assert_eq!(extractor.extract(&tokens), extractor.extract(&tokens));
        }
    }

    #[test]
    fn windows_borrow_the_tokens(){
        let tokens = vec![1, 2, 3, 4, 5];
        let extractor = SkipGramExtractor::new(3, (1, 2)).unwrap();
        let windows = extractor.windows(&tokens);
        assert_eq!(3, windows.len());
        assert_eq!(
            vec![(&[1][..], &[3][..]), (&[2][..], &[4][..]), (&[3][..], &[5][..])],
            windows.collect_vec()
        );
        let last = extractor.windows(&tokens).next_back().unwrap();
        assert_eq!((&[3][..], &[5][..]), last);
    }

    #[test]
    fn untyped_input_is_checked(){
        let extractor = SkipGramExtractor::new(3, (1, 2)).unwrap();
        let grams = extractor.extract_value(&json!(["w", "x", "y", "z"])).unwrap();
        assert_eq!(extractor.extract(&["w", "x", "y", "z"]), grams);
        assert_eq!(Err(InputTypeError::NotASequence("a string")), extractor.extract_value(&json!("w x y z")));
        assert_eq!(
            Err(InputTypeError::NotAString { index: 2, found: "a boolean" }),
            extractor.extract_value(&json!(["w", "x", true]))
        );
    }

    #[test]
    fn can_be_shared_between_threads(){
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let extractor = SkipGramExtractor::new(4, (1, 3)).unwrap();
        assert_send_sync(&extractor);

        let mut random = StdRng::seed_from_u64(7);
        let documents = (0..8).map(|_| pseudo_random_document(&mut random, 50)).collect_vec();
        let expected = documents.iter().map(|tokens| extractor.extract(tokens)).collect_vec();

        let results = std::thread::scope(|scope| {
            let handles = documents.iter()
                .map(|tokens| scope.spawn(move || extractor.extract(tokens)))
                .collect_vec();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect_vec()
        });

        assert_eq!(expected, results);
    }

    #[test]
    fn can_serialize(){
        let extractor = SkipGramExtractor::new(5, (2, 3)).unwrap();
        let json = serde_json::to_string(&extractor).unwrap();
        assert_eq!(r#"{"window_size":5,"skip_range":[2,3]}"#, json);
        assert_eq!(extractor, serde_json::from_str(&json).unwrap());
    }
}
