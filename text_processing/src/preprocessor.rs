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
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Turns a raw document into the text handed to a [Tokenizer](crate::Tokenizer).
pub trait Preprocessor {
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

impl<F> Preprocessor for F where F: Fn(&str) -> String {
    #[inline]
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(text))
    }
}

/// The default preprocessor.
/// Case folding is on by default, like the classic count vectorizer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextPreprocessor {
    /// Lowercase the whole document
    pub lowercase: bool,
    /// Strip leading and trailing whitespace
    pub trim: bool,
    /// Apply NFC normalization
    pub normalize: bool,
}

impl TextPreprocessor {
    pub const fn new(lowercase: bool, trim: bool, normalize: bool) -> Self {
        Self { lowercase, trim, normalize }
    }

    /// A preprocessor returning every document as is.
    pub const fn identity() -> Self {
        Self::new(false, false, false)
    }
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new(true, true, false)
    }
}

impl Preprocessor for TextPreprocessor {
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut text = Cow::Borrowed(if self.trim { text.trim() } else { text });
        if self.normalize {
            text = Cow::Owned(text.nfc().collect::<String>());
        }
        if self.lowercase {
            let lowered = text.to_lowercase();
            if lowered != text {
                text = Cow::Owned(lowered);
            }
        }
        text
    }
}
