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
use text_processing::{PreprocessorConfig, TokenizerConfig};
use crate::error::{signed, ConfigurationError, SkipGramError, SkipRangeViolation};

/// The offsets inside a window bounding the skipped tokens.
/// Everything in `start..end` of a window is dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct SkipRange {
    pub start: usize,
    pub end: usize,
}

impl SkipRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The number of skipped tokens per window.
    pub const fn skipped(&self) -> usize {
        self.end - self.start
    }
}

impl From<(usize, usize)> for SkipRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<SkipRange> for (usize, usize) {
    fn from(value: SkipRange) -> Self {
        (value.start, value.end)
    }
}

/// A validated window configuration.
///
/// It is only possible to get an instance through [WindowConfig::new] or a
/// [RawWindowConfig], both check that
/// - `window_size >= 1`
/// - `skip_range.start <= skip_range.end`
/// - `skip_range.end < window_size`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindowConfig", into = "RawWindowConfig")]
pub struct WindowConfig {
    window_size: usize,
    skip_range: SkipRange,
}

impl WindowConfig {
    pub fn new(window_size: usize, skip_range: impl Into<SkipRange>) -> Result<Self, ConfigurationError> {
        let skip_range = skip_range.into();
        if window_size < 1 {
            return Err(ConfigurationError::InvalidWindowSize(signed(window_size)))
        }
        if skip_range.end < skip_range.start {
            return Err(ConfigurationError::InvalidSkipRange {
                range: vec![signed(skip_range.start), signed(skip_range.end)],
                reason: SkipRangeViolation::EndBeforeStart {
                    start: signed(skip_range.start),
                    end: signed(skip_range.end)
                }
            })
        }
        if skip_range.end >= window_size {
            return Err(ConfigurationError::IncompatibleSkipRange {
                skip_end: signed(skip_range.end),
                window_size: signed(window_size)
            })
        }
        Ok(Self { window_size, skip_range })
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    #[inline]
    pub fn skip_range(&self) -> SkipRange {
        self.skip_range
    }

    /// The number of tokens in every skip-gram.
    #[inline]
    pub fn arity(&self) -> usize {
        self.skip_range.start + (self.window_size - self.skip_range.end)
    }

    /// The number of skip-grams extracted from `token_count` tokens.
    #[inline]
    pub fn gram_count(&self, token_count: usize) -> usize {
        (token_count + 1).saturating_sub(self.window_size)
    }
}

impl Default for WindowConfig {
    /// A window of one token without skipping, the plain unigram.
    fn default() -> Self {
        Self {
            window_size: 1,
            skip_range: SkipRange::default()
        }
    }
}

/// The unchecked form of a [WindowConfig], as found in config files.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawWindowConfig {
    pub window_size: i64,
    pub skip_range: Vec<i64>,
}

impl Default for RawWindowConfig {
    fn default() -> Self {
        WindowConfig::default().into()
    }
}

impl From<WindowConfig> for RawWindowConfig {
    fn from(value: WindowConfig) -> Self {
        Self {
            window_size: signed(value.window_size),
            skip_range: vec![signed(value.skip_range.start), signed(value.skip_range.end)]
        }
    }
}

impl TryFrom<RawWindowConfig> for WindowConfig {
    type Error = ConfigurationError;

    fn try_from(value: RawWindowConfig) -> Result<Self, Self::Error> {
        let RawWindowConfig { window_size, skip_range } = value;
        if window_size < 1 {
            return Err(ConfigurationError::InvalidWindowSize(window_size))
        }
        let invalid = |reason: SkipRangeViolation| ConfigurationError::InvalidSkipRange {
            range: skip_range.clone(),
            reason
        };
        let (start, end) = match skip_range.as_slice() {
            &[start, end] => (start, end),
            other => return Err(invalid(SkipRangeViolation::NotAPair(other.len())))
        };
        if start < 0 {
            return Err(invalid(SkipRangeViolation::NegativeStart(start)))
        }
        if end < start {
            return Err(invalid(SkipRangeViolation::EndBeforeStart { start, end }))
        }
        if end >= window_size {
            return Err(ConfigurationError::IncompatibleSkipRange { skip_end: end, window_size })
        }
        let window_size = usize::try_from(window_size)
            .map_err(|_| ConfigurationError::InvalidWindowSize(window_size))?;
        // 0 <= start <= end < window_size, so both fit.
        WindowConfig::new(window_size, (start as usize, end as usize))
    }
}

/// The config for a complete skip-gram analyzer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub window: WindowConfig,
    pub preprocessor: PreprocessorConfig,
    pub tokenizer: TokenizerConfig,
}

impl AnalyzerConfig {
    pub fn from_json_str(value: &str) -> Result<Self, SkipGramError> {
        Ok(serde_json::from_str(value)?)
    }

    pub fn from_yaml_str(value: &str) -> Result<Self, SkipGramError> {
        Ok(serde_yaml::from_str(value)?)
    }
}
