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


use std::fmt::{Display, Formatter};
use std::ops::Deref;
use compact_str::CompactString;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The inline capacity of a [SkipGram] before it spills to the heap.
const INLINE_TOKENS: usize = 4;

/// A single skip-gram feature.
///
/// Equality, hashing and ordering are structural, two skip-grams are equal
/// iff their tokens are equal element-wise.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SkipGram(SmallVec<[CompactString; INLINE_TOKENS]>);

impl SkipGram {
    /// Concatenates the `left` and `right` span of a window.
    pub fn from_spans<S: AsRef<str>>(left: &[S], right: &[S]) -> Self {
        left.iter().chain(right).map(|value| CompactString::from(value.as_ref())).collect()
    }

    /// The number of tokens.
    #[inline]
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> SmallVec<[CompactString; INLINE_TOKENS]> {
        self.0
    }
}

impl Deref for SkipGram {
    type Target = [CompactString];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<CompactString> for SkipGram {
    fn from_iter<T: IntoIterator<Item=CompactString>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for SkipGram {
    fn from_iter<T: IntoIterator<Item=&'a str>>(iter: T) -> Self {
        iter.into_iter().map(CompactString::from).collect()
    }
}

impl<const N: usize> PartialEq<[&str; N]> for SkipGram {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other).all(|(a, b)| a.as_str() == *b)
    }
}

impl Display for SkipGram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}
