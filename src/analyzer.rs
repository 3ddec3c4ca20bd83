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


use std::hash::Hash;
use text_processing::{AnyTokenizer, Preprocessor, TextPreprocessor, Tokenizer};
use crate::config::AnalyzerConfig;
use crate::error::SkipGramError;
use crate::extractor::SkipGramExtractor;
use crate::skip_gram::SkipGram;

/// Turns a raw document into the features counted by a vectorizer.
pub trait Analyzer {
    /// A single feature
    type Feature: Hash + Eq;

    fn analyze(&self, document: &str) -> Vec<Self::Feature>;
}

/// Preprocesses, tokenizes and finally extracts the skip-grams of a document.
#[derive(Debug, Clone)]
pub struct SkipGramAnalyzer<P = TextPreprocessor, T = AnyTokenizer> {
    preprocessor: P,
    tokenizer: T,
    extractor: SkipGramExtractor,
}

impl<P, T> SkipGramAnalyzer<P, T> {
    pub fn new(preprocessor: P, tokenizer: T, extractor: SkipGramExtractor) -> Self {
        Self {
            preprocessor,
            tokenizer,
            extractor
        }
    }

    pub fn preprocessor(&self) -> &P {
        &self.preprocessor
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn extractor(&self) -> &SkipGramExtractor {
        &self.extractor
    }
}

impl SkipGramAnalyzer {
    pub fn from_config(cfg: &AnalyzerConfig) -> Result<Self, SkipGramError> {
        let tokenizer = cfg.tokenizer.build()?;
        log::debug!("Created skip-gram analyzer with {:?}.", cfg);
        Ok(Self::new(cfg.preprocessor, tokenizer, SkipGramExtractor::with_config(cfg.window)))
    }
}

impl<P, T> SkipGramAnalyzer<P, T> where P: Preprocessor, T: Tokenizer {
    /// The analyzer as a plain function, for pipelines expecting a closure.
    pub fn as_fn(&self) -> impl Fn(&str) -> Vec<SkipGram> + '_ {
        move |document: &str| self.analyze(document)
    }
}

impl<P, T> Analyzer for SkipGramAnalyzer<P, T> where P: Preprocessor, T: Tokenizer {
    type Feature = SkipGram;

    fn analyze(&self, document: &str) -> Vec<SkipGram> {
        let text = self.preprocessor.preprocess(document);
        let tokens = self.tokenizer.tokenize(&text);
        self.extractor.extract(&tokens)
    }
}
