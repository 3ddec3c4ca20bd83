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


//! Skip-gram features for bag-of-words style vectorizers.
//!
//! A [SkipGramExtractor] slides a window of `window_size` tokens over a
//! document and keeps everything in the window except the tokens inside the
//! skip range:
//!
//! ```
//! use skipgram::SkipGramExtractor;
//!
//! let extractor = SkipGramExtractor::new(3, (1, 2)).unwrap();
//! let grams = extractor.extract(&["w", "x", "y", "z"]);
//! assert_eq!(grams[0], ["w", "y"]);
//! assert_eq!(grams[1], ["x", "z"]);
//! ```
//!
//! The [SkipGramAnalyzer] puts a preprocessor and a tokenizer from the
//! `text_processing` crate in front of the extractor.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod extractor;
pub mod skip_gram;
pub mod tokens;

pub use analyzer::{Analyzer, SkipGramAnalyzer};
pub use config::{AnalyzerConfig, RawWindowConfig, SkipRange, WindowConfig};
pub use error::{ConfigurationError, ConfigurationErrorKind, InputTypeError, SkipGramError, SkipRangeViolation};
pub use extractor::{SkipGramExtractor, SkipGramWindows};
pub use skip_gram::SkipGram;
pub use tokens::TokenSequence;
pub use text_processing;
