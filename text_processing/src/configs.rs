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


use serde::{Deserialize, Serialize};
use crate::error::TextProcessingError;
use crate::preprocessor::TextPreprocessor;
use crate::tokenizer::{AnyTokenizer, PatternMode, PatternTokenizer, UnicodeTokenizer};

/// The config for the preprocessing step.
pub type PreprocessorConfig = TextPreprocessor;

/// The config for the tokenizer used by the analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// A regex based tokenizer
    Pattern {
        pattern: String,
        #[serde(default)]
        mode: PatternMode
    },
    /// Tokenizes along unicode word boundaries
    Unicode {
        /// If set to true the text is normalized
        #[serde(default)]
        normalize_text: bool,
        #[serde(default)]
        stemmer: Option<rust_stemmers::Algorithm>
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::Pattern {
            pattern: PatternTokenizer::DEFAULT_SPLIT_PATTERN.to_string(),
            mode: PatternMode::Split
        }
    }
}

impl TokenizerConfig {
    pub fn build(&self) -> Result<AnyTokenizer, TextProcessingError> {
        match self {
            TokenizerConfig::Pattern { pattern, mode } => {
                log::debug!("Build pattern tokenizer with {pattern:?} in mode {mode:?}.");
                Ok(PatternTokenizer::new(pattern, *mode)?.into())
            }
            TokenizerConfig::Unicode { normalize_text, stemmer } => {
                log::debug!("Build unicode tokenizer (normalize: {normalize_text}, stemmer: {stemmer:?}).");
                Ok(UnicodeTokenizer::new(*normalize_text, *stemmer).into())
            }
        }
    }
}
