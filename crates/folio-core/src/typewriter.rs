//! Typewriter text cycler.
//!
//! Types each phrase forward one character at a time, holds the full phrase,
//! deletes it, then moves on to the next phrase, looping forever. The machine
//! owns no timer: [`TypewriterCycler::advance`] performs one transition and
//! returns how long the host should wait before calling it again.

use std::time::Duration;

use crate::error::TypewriterError;

// ============================================================================
// Timing
// ============================================================================

/// Delays between typewriter transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay after each typed character.
    pub typing: Duration,
    /// Reading pause once the phrase is fully shown.
    pub hold: Duration,
    /// Delay after each deleted character.
    pub deleting: Duration,
}

impl TypewriterTiming {
    pub const DEFAULT: Self = Self {
        typing: Duration::from_millis(80),
        hold: Duration::from_millis(1500),
        deleting: Duration::from_millis(40),
    };
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// State
// ============================================================================

/// Current phase of the typewriter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeMode {
    /// Revealing characters of the current phrase.
    #[default]
    Typing,
    /// Full phrase visible, waiting to start deleting.
    HoldingFull,
    /// Removing characters from the end.
    Deleting,
}

/// Output of a single transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Text to display after the transition.
    pub text: &'a str,
    /// How long to wait before the next `advance`.
    pub delay: Duration,
}

/// A phrase with its character boundaries precomputed, so slicing by
/// character count never splits a multi-byte character.
#[derive(Clone, Debug)]
struct Phrase {
    text: String,
    /// Byte offset of the end of each prefix, `bounds[n]` ends the first `n` chars.
    bounds: Vec<usize>,
}

impl Phrase {
    fn new(text: String) -> Self {
        let mut bounds = Vec::with_capacity(text.len() + 1);
        bounds.push(0);
        bounds.extend(text.char_indices().map(|(i, c)| i + c.len_utf8()));
        Self { text, bounds }
    }

    fn char_len(&self) -> usize {
        self.bounds.len() - 1
    }

    fn prefix(&self, chars: usize) -> &str {
        &self.text[..self.bounds[chars]]
    }
}

/// Character-by-character phrase cycler.
///
/// Initial state is `Typing` at phrase 0 with nothing visible. The host is
/// expected to wait [`initial_delay`](Self::initial_delay) before the first
/// call to [`advance`](Self::advance), then wait each returned delay.
#[derive(Clone, Debug)]
pub struct TypewriterCycler {
    phrases: Vec<Phrase>,
    phrase_index: usize,
    char_index: usize,
    mode: TypeMode,
    timing: TypewriterTiming,
}

impl TypewriterCycler {
    /// Creates a cycler with default timing.
    pub fn new<I, S>(phrases: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_timing(phrases, TypewriterTiming::default())
    }

    /// Creates a cycler with custom timing.
    ///
    /// Fails if the list is empty or any phrase is empty.
    pub fn with_timing<I, S>(phrases: I, timing: TypewriterTiming) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases
            .into_iter()
            .enumerate()
            .map(|(index, p)| {
                let text = p.into();
                if text.is_empty() {
                    Err(TypewriterError::EmptyPhrase { index })
                } else {
                    Ok(Phrase::new(text))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }

        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            mode: TypeMode::Typing,
            timing,
        })
    }

    /// Performs exactly one transition.
    pub fn advance(&mut self) -> Frame<'_> {
        let len = self.phrases[self.phrase_index].char_len();

        let delay = match self.mode {
            TypeMode::Typing if self.char_index < len => {
                self.char_index += 1;
                self.timing.typing
            }
            TypeMode::Typing => {
                self.mode = TypeMode::HoldingFull;
                self.timing.hold
            }
            TypeMode::HoldingFull => {
                self.mode = TypeMode::Deleting;
                Duration::ZERO
            }
            TypeMode::Deleting if self.char_index > 0 => {
                self.char_index -= 1;
                self.timing.deleting
            }
            TypeMode::Deleting => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.mode = TypeMode::Typing;
                Duration::ZERO
            }
        };

        Frame {
            text: self.current_text(),
            delay,
        }
    }

    /// Currently visible text.
    pub fn current_text(&self) -> &str {
        self.phrases[self.phrase_index].prefix(self.char_index)
    }

    /// Delay before the first `advance` of a fresh cycle.
    pub fn initial_delay(&self) -> Duration {
        self.timing.typing
    }

    /// Restarts from the first phrase with nothing visible.
    pub fn reset(&mut self) {
        self.phrase_index = 0;
        self.char_index = 0;
        self.mode = TypeMode::Typing;
    }

    #[inline]
    pub fn mode(&self) -> TypeMode {
        self.mode
    }

    #[inline]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[inline]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[inline]
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Full text of the phrase currently being typed or deleted.
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index].text
    }

    #[inline]
    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }
}

// ============================================================================
// Tests
// ============================================================================
