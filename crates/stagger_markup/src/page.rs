//! Page-level title animation
//!
//! Finds the title elements of a page by class and runs the
//! [`TitleAnimator`] over each element's content, in document order. All
//! markup outside the matched elements is copied unchanged.
//!
//! Selection runs on `lol_html`, so comments, raw text (`<script>`,
//! `<style>`), quoted attributes and `<template>` content are parsed the way
//! a browser parses them. The rewriter brackets the content of each selected
//! element with marker comments; a second pass animates what sits between a
//! marker pair and removes the markers.

use std::cell::Cell;
use std::rc::Rc;

use lol_html::html_content::{ContentType, EndTag};
use lol_html::{element, rewrite_str, EndTagHandler, HandlerResult, RewriteStrSettings};
use tracing::debug;

use crate::animator::TitleAnimator;
use crate::config::TitleSelection;
use crate::error::{ConfigError, PageError};

/// Result of animating a page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageReport {
    /// The rewritten page
    pub html: String,
    /// Number of title elements animated
    pub elements: usize,
    /// Total glyph spans emitted across all elements
    pub glyphs: usize,
}

/// Animates every selected title element of a page
#[derive(Clone, Debug, Default)]
pub struct PageAnimator {
    animator: TitleAnimator,
    selection: TitleSelection,
}

impl PageAnimator {
    pub fn new(animator: TitleAnimator, selection: TitleSelection) -> Result<Self, ConfigError> {
        selection.validate()?;
        Ok(Self {
            animator,
            selection,
        })
    }

    pub fn animator(&self) -> &TitleAnimator {
        &self.animator
    }

    pub fn selection(&self) -> &TitleSelection {
        &self.selection
    }

    /// Animate all matching elements of `html`
    ///
    /// Elements nested inside an animated element are covered by the outer
    /// pass and are not animated again. Void elements, elements inside
    /// `<template>` and elements the parser never closes are left as they
    /// are.
    pub fn animate_page(&self, html: &str) -> Result<PageReport, PageError> {
        let markers = Markers::for_page(html);
        let marked = self.mark_titles(html, &markers)?;
        let report = self.animate_marked(&marked, &markers);

        debug!(
            elements = report.elements,
            glyphs = report.glyphs,
            "animated page"
        );
        Ok(report)
    }

    /// Bracket the content of every selected element with marker comments
    fn mark_titles(&self, html: &str, markers: &Markers) -> Result<String, PageError> {
        let next_id = Cell::new(0usize);
        let template_depth = Rc::new(Cell::new(0usize));
        let in_template = Rc::clone(&template_depth);

        let output = rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: vec![
                    element!("template", move |el| {
                        if let Some(handlers) = el.end_tag_handlers() {
                            template_depth.set(template_depth.get() + 1);
                            let depth = Rc::clone(&template_depth);
                            let handler: EndTagHandler<'static> =
                                Box::new(move |_end: &mut EndTag<'_>| -> HandlerResult {
                                    depth.set(depth.get().saturating_sub(1));
                                    Ok(())
                                });
                            handlers.push(handler);
                        }
                        Ok(())
                    }),
                    element!("[class]", |el| {
                        if in_template.get() > 0 || !el.can_have_content() {
                            return Ok(());
                        }
                        let Some(classes) = el.get_attribute("class") else {
                            return Ok(());
                        };
                        if !self.selection.matches(&classes) {
                            return Ok(());
                        }

                        let id = next_id.get();
                        next_id.set(id + 1);
                        el.prepend(&markers.start(id), ContentType::Html);
                        el.append(&markers.end(id), ContentType::Html);
                        Ok(())
                    }),
                ],
                ..RewriteStrSettings::new()
            },
        )?;

        Ok(output)
    }

    /// Animate the content between each outermost marker pair
    fn animate_marked(&self, marked: &str, markers: &Markers) -> PageReport {
        let mut report = PageReport {
            html: String::with_capacity(marked.len().saturating_mul(2)),
            ..PageReport::default()
        };
        let mut rest = marked;

        while let Some(pos) = rest.find(&markers.prefix) {
            report.html.push_str(&rest[..pos]);
            let (marker, len) = markers.parse(&rest[pos..]);
            let body = &rest[pos + len..];

            let Marker::Start(id) = marker else {
                rest = body;
                continue;
            };
            let end_marker = markers.end(id);
            let Some(end) = body.find(&end_marker) else {
                debug!(id, "title element has no closing tag");
                rest = body;
                continue;
            };

            let content = markers.strip(&body[..end]);
            let animated = self.animator.animate_detailed(&content);
            report.html.push_str(&animated.markup);
            report.elements += 1;
            report.glyphs += animated.glyphs;
            rest = &body[end + end_marker.len()..];

            debug!(glyphs = animated.glyphs, "animated title element");
        }

        report.html.push_str(rest);
        report
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Start(usize),
    End(usize),
    Unknown,
}

/// Marker comments that bracket selected content between the two passes
///
/// The prefix is chosen so it never occurs in the input page.
#[derive(Debug)]
struct Markers {
    prefix: String,
}

impl Markers {
    fn for_page(html: &str) -> Self {
        let mut nonce = 0usize;
        loop {
            let prefix = format!("<!--stagger-{nonce}:");
            if !html.contains(&prefix) {
                return Self { prefix };
            }
            nonce += 1;
        }
    }

    fn start(&self, id: usize) -> String {
        format!("{}s{id}-->", self.prefix)
    }

    fn end(&self, id: usize) -> String {
        format!("{}e{id}-->", self.prefix)
    }

    /// Read the marker at the start of `s`, returning it and its length
    fn parse(&self, s: &str) -> (Marker, usize) {
        let body = &s[self.prefix.len()..];
        let Some(close) = body.find("-->") else {
            return (Marker::Unknown, s.len());
        };
        let len = self.prefix.len() + close + 3;
        let tag = &body[..close];

        let marker = match (tag.get(..1), tag.get(1..).and_then(|n| n.parse().ok())) {
            (Some("s"), Some(id)) => Marker::Start(id),
            (Some("e"), Some(id)) => Marker::End(id),
            _ => Marker::Unknown,
        };
        (marker, len)
    }

    /// Remove every marker from `s`
    fn strip(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut rest = s;
        while let Some(pos) = rest.find(&self.prefix) {
            out.push_str(&rest[..pos]);
            let (_, len) = self.parse(&rest[pos..]);
            rest = &rest[pos + len..];
        }
        out.push_str(rest);
        out
    }
}
