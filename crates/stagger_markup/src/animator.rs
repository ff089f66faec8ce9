//! Title animator
//!
//! Rewrites a title fragment so each visible glyph sits in its own span with
//! an increasing `animation-delay`, ready for a staggered CSS entrance:
//!
//! ```text
//! Hi there
//! ```
//!
//! becomes (line breaks added)
//!
//! ```text
//! <span style="display:inline-block;">
//!   <span style="animation-delay:0.05s">H</span><span style="animation-delay:0.10s">i</span>
//! </span> <span style="display:inline-block;">
//!   <span style="animation-delay:0.15s">t</span>...<span style="animation-delay:0.35s">e</span>
//! </span>
//! ```
//!
//! Tags pass through verbatim and in order. Words inside the container tag
//! (`div` by default) get glyph spans but no word span. The delay keeps
//! counting across tags for the whole fragment.

use std::fmt::Write as _;

use stagger_animation::{Delay, StaggerClock};
use tracing::{debug, trace};

use crate::config::AnimatorConfig;
use crate::container::ContainerStack;
use crate::error::ConfigError;
use crate::scanner::{Scanner, Token};
use crate::tag::TagInfo;
use crate::text::{glyphs, segments, Segment};

/// Result of animating one fragment
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedMarkup {
    /// The rewritten fragment
    pub markup: String,
    /// Number of glyph spans emitted
    pub glyphs: usize,
    /// Number of words wrapped (with or without a word span)
    pub words: usize,
    /// Delay of the last glyph, if any
    pub last_delay: Option<Delay>,
}

/// Wraps title text into per-glyph animation spans
///
/// The animator holds only configuration; every call gets its own container
/// stack and delay clock, so one animator can serve any number of elements.
#[derive(Clone, Debug, Default)]
pub struct TitleAnimator {
    config: AnimatorConfig,
}

impl TitleAnimator {
    /// Create an animator, rejecting invalid configuration
    pub fn new(config: AnimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Animate a fragment, returning only the rewritten markup
    pub fn animate(&self, input: &str) -> String {
        self.animate_detailed(input).markup
    }

    /// Animate a fragment
    ///
    /// Never fails: malformed tag runs are copied through and do not affect
    /// container tracking.
    pub fn animate_detailed(&self, input: &str) -> AnimatedMarkup {
        let mut pass = Pass {
            config: &self.config,
            containers: ContainerStack::new(&self.config.container_tag),
            clock: StaggerClock::new(self.config.timing),
            out: String::with_capacity(input.len().saturating_mul(8)),
            words: 0,
        };

        for token in Scanner::new(input) {
            match token {
                Token::Text(text) => pass.flush_text(text),
                Token::Tag(raw) => {
                    pass.containers.observe(&TagInfo::parse(raw));
                    pass.out.push_str(raw);
                }
                Token::Malformed(raw) => {
                    trace!(run = raw, "passing through unterminated tag");
                    pass.out.push_str(raw);
                }
            }
        }

        debug!(
            glyphs = pass.clock.ticks(),
            words = pass.words,
            "animated title fragment"
        );

        AnimatedMarkup {
            glyphs: pass.clock.ticks(),
            words: pass.words,
            last_delay: pass.clock.last_delay(),
            markup: pass.out,
        }
    }
}

/// State of one animation pass
struct Pass<'c> {
    config: &'c AnimatorConfig,
    containers: ContainerStack,
    clock: StaggerClock,
    out: String,
    words: usize,
}

impl Pass<'_> {
    fn flush_text(&mut self, text: &str) {
        for segment in segments(text) {
            match segment {
                Segment::Space(space) => self.out.push_str(space),
                Segment::Word(word) => self.wrap_word(word),
            }
        }
    }

    fn wrap_word(&mut self, word: &str) {
        let manual = self.containers.is_manual();
        if !manual {
            // String writes cannot fail
            let _ = write!(self.out, r#"<span style="{}">"#, self.config.word_style);
        }

        for glyph in glyphs(word, self.config.keep_entities) {
            let delay = self.clock.next_delay();
            let _ = write!(
                self.out,
                r#"<span style="animation-delay:{delay}">{glyph}</span>"#
            );
        }

        if !manual {
            self.out.push_str("</span>");
        }
        self.words += 1;
    }
}
