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


//! Preprocessing and tokenizing collaborators for the skip-gram analyzer.
//!
//! Nothing in here knows about skip-grams. Every type implements either
//! [Preprocessor] or [Tokenizer] and can be swapped for a closure.

pub mod configs;
pub mod error;
pub mod preprocessor;
pub mod tokenizer;

pub use configs::{PreprocessorConfig, TokenizerConfig};
pub use error::TextProcessingError;
pub use preprocessor::{Preprocessor, TextPreprocessor};
pub use tokenizer::{AnyTokenizer, PatternMode, PatternTokenizer, Tokenizer, UnicodeTokenizer};
