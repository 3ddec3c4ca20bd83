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


use std::borrow::Cow;
use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;
use crate::error::TextProcessingError;

/// Splits a preprocessed document into tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenizer for F where F: Fn(&str) -> Vec<String> {
    #[inline]
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// How the regex of a [PatternTokenizer] is applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternMode {
    /// The pattern matches the separators. Leading or trailing separators
    /// produce empty tokens.
    #[default]
    Split,
    /// The pattern matches the tokens.
    Find,
}

/// A regex based tokenizer.
#[derive(Debug, Clone)]
pub struct PatternTokenizer {
    regex: Regex,
    mode: PatternMode,
}

impl PatternTokenizer {
    pub const DEFAULT_SPLIT_PATTERN: &'static str = r"[\s]+";
    pub const DEFAULT_TOKEN_PATTERN: &'static str = r"[^\s]+";

    pub fn new(pattern: &str, mode: PatternMode) -> Result<Self, TextProcessingError> {
        let regex = Regex::new(pattern).map_err(|source| TextProcessingError::InvalidPattern {
            pattern: pattern.to_string(),
            source
        })?;
        Ok(Self { regex, mode })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn mode(&self) -> PatternMode {
        self.mode
    }
}

impl Default for PatternTokenizer {
    /// Splits at every run of whitespace.
    fn default() -> Self {
        Self {
            regex: Regex::new(Self::DEFAULT_SPLIT_PATTERN).expect("The default split pattern is valid."),
            mode: PatternMode::Split
        }
    }
}

impl Tokenizer for PatternTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        match self.mode {
            PatternMode::Split => {
                self.regex.split(text).map(str::to_string).collect_vec()
            }
            PatternMode::Find => {
                self.regex.find_iter(text).map(|value| value.as_str().to_string()).collect_vec()
            }
        }
    }
}

/// Tokenizes along unicode word boundaries and lowercases every word.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct UnicodeTokenizer {
    normalize: bool,
    stemmer: Option<rust_stemmers::Algorithm>,
}

impl UnicodeTokenizer {
    pub fn new(
        normalize: bool,
        stemmer: Option<rust_stemmers::Algorithm>
    ) -> Self {
        Self {
            normalize,
            stemmer
        }
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.normalize {
            Cow::Owned(text.nfc().to_string())
        } else {
            Cow::Borrowed(text)
        };

        let words = text.unicode_words().map(|value| value.to_lowercase());

        if let Some(stemmer) = self.stemmer {
            let stemmer = rust_stemmers::Stemmer::create(stemmer);
            words.map(|value| stemmer.stem(&value).into_owned()).collect_vec()
        } else {
            words.collect_vec()
        }
    }
}

/// Every tokenizer a [TokenizerConfig](crate::TokenizerConfig) can build.
#[derive(Debug, Clone)]
pub enum AnyTokenizer {
    Pattern(PatternTokenizer),
    Unicode(UnicodeTokenizer),
}

impl Tokenizer for AnyTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        match self {
            AnyTokenizer::Pattern(tokenizer) => tokenizer.tokenize(text),
            AnyTokenizer::Unicode(tokenizer) => tokenizer.tokenize(text),
        }
    }
}

impl From<PatternTokenizer> for AnyTokenizer {
    fn from(value: PatternTokenizer) -> Self {
        Self::Pattern(value)
    }
}

impl From<UnicodeTokenizer> for AnyTokenizer {
    fn from(value: UnicodeTokenizer) -> Self {
        Self::Unicode(value)
    }
}
