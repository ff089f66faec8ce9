//! Stagger Markup
//!
//! Turns title markup into per-glyph spans with staggered animation delays,
//! for CSS entrance animations that reveal a title one letter at a time.
//!
//! # Overview
//!
//! - [`Scanner`]: splits markup into text and tag runs without validating it
//! - [`TitleAnimator`]: wraps every visible glyph of a fragment
//! - [`PageAnimator`]: finds title elements in a page by class (parsed with
//!   `lol_html`) and animates each one
//!
//! # Quick Start
//!
//! ```rust
//! use stagger_markup::TitleAnimator;
//!
//! let animator = TitleAnimator::default();
//! let html = animator.animate("<div>Go</div>");
//! assert_eq!(
//!     html,
//!     concat!(
//!         "<div>",
//!         r#"<span style="animation-delay:0.05s">G</span>"#,
//!         r#"<span style="animation-delay:0.10s">o</span>"#,
//!         "</div>",
//!     )
//! );
//! ```
//!
//! # Containers
//!
//! Text inside the container tag (`div` by default) is treated as laid out
//! by hand: glyphs are wrapped but words are not. The container is detected
//! by tag name only, so a self-closing `<div/>` also counts as opening one.

mod animator;
mod config;
mod container;
mod error;
mod page;
mod scanner;
mod tag;
mod text;

pub use animator::{AnimatedMarkup, TitleAnimator};
pub use config::{
    AnimatorConfig, TitleSelection, DEFAULT_CONTAINER_TAG, DEFAULT_TITLE_CLASSES,
    DEFAULT_WORD_STYLE, MAX_PRECISION,
};
pub use container::ContainerStack;
pub use error::{ConfigError, PageError};
pub use page::{PageAnimator, PageReport};
pub use scanner::{Scanner, Token};
pub use tag::TagInfo;
pub use text::{glyphs, is_title_whitespace, segments, Glyphs, Segment, Segments};

pub use stagger_animation::{Delay, StaggerClock, StaggerTiming};
