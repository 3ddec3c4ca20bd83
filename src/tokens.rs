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


use std::ops::Deref;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::error::InputTypeError;

/// An owned, ordered sequence of tokens.
///
/// Typed callers can hand any `&[impl AsRef<str>]` to the extractor, this
/// type only exists for input that arrives untyped.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for TokenSequence {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl<'a> FromIterator<&'a str> for TokenSequence {
    fn from_iter<T: IntoIterator<Item=&'a str>>(iter: T) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl TryFrom<&Value> for TokenSequence {
    type Error = InputTypeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => {
                values.iter().enumerate().map(|(index, value)| {
                    match value {
                        Value::String(token) => Ok(token.clone()),
                        other => Err(InputTypeError::NotAString { index, found: json_type_name(other) })
                    }
                }).collect::<Result<Vec<_>, _>>().map(Self)
            }
            other => Err(InputTypeError::NotASequence(json_type_name(other)))
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
