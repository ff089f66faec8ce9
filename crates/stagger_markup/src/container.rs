//! Manual container tracking
//!
//! Text inside a container element is already laid out by hand, so words
//! there skip the inline-block word wrapper. The stack only ever holds
//! container names; every other tag is transparent.

use smallvec::SmallVec;

use crate::tag::TagInfo;

/// LIFO of currently open container tags
#[derive(Clone, Debug)]
pub struct ContainerStack {
    tag: String,
    open: SmallVec<[String; 4]>,
    manual: bool,
}

impl ContainerStack {
    /// Track containers named `tag` (compared case-insensitively)
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            open: SmallVec::new(),
            manual: false,
        }
    }

    /// Update the stack for a tag seen in the markup.
    ///
    /// Any opening tag with the container name pushes, including `<div/>`;
    /// the name alone decides. A closing tag pops (a no-op on an empty stack)
    /// and the flag is recomputed from what is still open.
    pub fn observe(&mut self, tag: &TagInfo<'_>) {
        if !tag.is_named(&self.tag) {
            return;
        }

        if tag.is_closing() {
            self.open.pop();
            self.manual = self.open.iter().any(|name| *name == self.tag);
        } else {
            self.open.push(self.tag.clone());
            self.manual = true;
        }
    }

    /// True while at least one container is open
    pub fn is_manual(&self) -> bool {
        self.manual
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }
}
