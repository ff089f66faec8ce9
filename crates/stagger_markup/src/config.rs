//! Animator and selection configuration

use serde::{Deserialize, Serialize};
use stagger_animation::StaggerTiming;

use crate::error::ConfigError;

/// Largest number of decimals accepted for rendered delays
pub const MAX_PRECISION: usize = 6;

/// Container tag whose content is laid out by hand
pub const DEFAULT_CONTAINER_TAG: &str = "div";

/// Inline style of the per-word wrapper
pub const DEFAULT_WORD_STYLE: &str = "display:inline-block;";

/// Classes of the main title elements animated on page load
pub const DEFAULT_TITLE_CLASSES: &[&str] = &[
    "main-slider__title",
    "main-slider-two__title",
    "main-slider-three__title",
    "main-slider-four__title",
];

/// Configuration for [`TitleAnimator`](crate::TitleAnimator)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Words inside this tag are not wrapped in a word span
    pub container_tag: String,
    /// Per-glyph delay timing
    pub timing: StaggerTiming,
    /// Inline style of the word wrapper span
    pub word_style: String,
    /// Keep character references like `&amp;` as a single glyph
    pub keep_entities: bool,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            container_tag: DEFAULT_CONTAINER_TAG.to_string(),
            timing: StaggerTiming::default(),
            word_style: DEFAULT_WORD_STYLE.to_string(),
            keep_entities: false,
        }
    }
}

impl AnimatorConfig {
    pub fn container_tag(mut self, tag: impl Into<String>) -> Self {
        self.container_tag = tag.into();
        self
    }

    pub fn timing(mut self, timing: StaggerTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn word_style(mut self, style: impl Into<String>) -> Self {
        self.word_style = style.into();
        self
    }

    pub fn keep_entities(mut self, keep: bool) -> Self {
        self.keep_entities = keep;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let tag = &self.container_tag;
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::InvalidContainerTag(tag.clone()));
        }

        let timing = &self.timing;
        if !timing.step_secs.is_finite() || timing.step_secs <= 0.0 {
            return Err(ConfigError::InvalidStep(timing.step_secs));
        }
        if !timing.initial_secs.is_finite() || timing.initial_secs < 0.0 {
            return Err(ConfigError::InvalidInitialDelay(timing.initial_secs));
        }
        if timing.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge(timing.precision));
        }

        if self.word_style.contains('"') {
            return Err(ConfigError::InvalidWordStyle(self.word_style.clone()));
        }

        Ok(())
    }
}

/// Which elements of a page get their titles animated
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TitleSelection {
    /// An element matches if its `class` attribute lists any of these
    pub classes: Vec<String>,
}

impl Default for TitleSelection {
    fn default() -> Self {
        Self {
            classes: DEFAULT_TITLE_CLASSES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TitleSelection {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// True if the space-separated `class_attr` lists any selected class
    pub fn matches(&self, class_attr: &str) -> bool {
        class_attr
            .split_ascii_whitespace()
            .any(|class| self.classes.iter().any(|c| c == class))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classes.is_empty() {
            return Err(ConfigError::EmptySelection);
        }
        for class in &self.classes {
            if class.is_empty() || class.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidClass(class.clone()));
            }
        }
        Ok(())
    }
}
