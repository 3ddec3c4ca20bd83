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


use strum::{Display, EnumDiscriminants};
use text_processing::TextProcessingError;
use thiserror::Error;

/// The reason why a skip range is malformed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum SkipRangeViolation {
    #[error("expected exactly 2 values but got {0}")]
    NotAPair(usize),
    #[error("the start {0} is negative")]
    NegativeStart(i64),
    #[error("the end {end} is smaller than the start {start}")]
    EndBeforeStart {
        start: i64,
        end: i64
    },
}

/// A window configuration violates one of its invariants.
/// The offending values are always part of the error.
#[derive(Debug, Clone, Eq, PartialEq, Error, EnumDiscriminants)]
#[strum_discriminants(name(ConfigurationErrorKind), derive(Display, Hash))]
pub enum ConfigurationError {
    #[error("The window size has to be at least 1 but was {0}!")]
    InvalidWindowSize(i64),
    #[error("The skip range {range:?} is invalid, {reason}!")]
    InvalidSkipRange {
        range: Vec<i64>,
        reason: SkipRangeViolation
    },
    #[error("The skip range end {skip_end} has to be smaller than the window size {window_size}!")]
    IncompatibleSkipRange {
        skip_end: i64,
        window_size: i64
    },
}

impl ConfigurationError {
    pub fn kind(&self) -> ConfigurationErrorKind {
        self.into()
    }
}

/// The input of an extraction is not an ordered sequence of strings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InputTypeError {
    #[error("Expected an array of strings but got {0}!")]
    NotASequence(&'static str),
    #[error("Expected a string at index {index} but got {found}!")]
    NotAString {
        index: usize,
        found: &'static str
    },
}

/// Any error that can occur while setting up or running an analyzer.
#[derive(Debug, Error)]
pub enum SkipGramError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    InputType(#[from] InputTypeError),
    #[error(transparent)]
    TextProcessing(#[from] TextProcessingError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Converts a size into the signed representation used in error messages.
#[inline]
pub(crate) fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
