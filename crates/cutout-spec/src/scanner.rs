//! Splits a specification string into path text and `@` directives.

use std::borrow::Cow;

pub const MARKER_START_CHAR: char = '@';
pub const DP_MARKER: &str = "@dp";

/// Structural markers recognized inside a specification (the `@dp` suffix is handled separately,
/// see [`strip_dp`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Left,
    Right,
    Bottom,
    CenterVertical,
    Cutout,
    BindLeftCutout,
    BindRightCutout,
}

impl Directive {
    /// Match order. No marker in the vocabulary is a prefix of another, so the first literal match
    /// is the only one.
    pub const ALL: [Directive; 7] = [
        Directive::Left,
        Directive::Right,
        Directive::Bottom,
        Directive::CenterVertical,
        Directive::Cutout,
        Directive::BindLeftCutout,
        Directive::BindRightCutout,
    ];

    pub fn marker(self) -> &'static str {
        match self {
            Directive::Left => "@left",
            Directive::Right => "@right",
            Directive::Bottom => "@bottom",
            Directive::CenterVertical => "@center_vertical",
            Directive::Cutout => "@cutout",
            Directive::BindLeftCutout => "@bind_left_cutout",
            Directive::BindRightCutout => "@bind_right_cutout",
        }
    }

    /// Whether the fragment collected so far must be placed before this directive takes effect.
    pub fn flushes(self) -> bool {
        matches!(
            self,
            Directive::Bottom | Directive::CenterVertical | Directive::Cutout
        )
    }

    fn match_at(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| text.starts_with(d.marker()))
    }
}

/// Removes the last `@dp` marker, reporting whether one was present.
pub fn strip_dp(spec: &str) -> (Cow<'_, str>, bool) {
    match spec.rfind(DP_MARKER) {
        Some(idx) => {
            let mut out = String::with_capacity(spec.len() - DP_MARKER.len());
            out.push_str(&spec[..idx]);
            out.push_str(&spec[idx + DP_MARKER.len()..]);
            (Cow::Owned(out), true)
        }
        None => (Cow::Borrowed(spec), false),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Verbatim path text. Consecutive `Text` tokens belong to the same fragment.
    Text(&'a str),
    Directive(Directive),
}

/// Single pass, left-to-right tokenizer.
///
/// An `@` that does not start a known marker is dropped and scanning resumes right after it; the
/// text that follows stays part of the current fragment.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    spec: &'a str,
    pos: usize,
    pending: Option<Directive>,
}

impl<'a> Scanner<'a> {
    pub fn new(spec: &'a str) -> Self {
        Self {
            spec,
            pos: 0,
            pending: None,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some(directive) = self.pending.take() {
                return Some(Token::Directive(directive));
            }

            let rest = &self.spec[self.pos..];
            if rest.is_empty() {
                return None;
            }

            let Some(offset) = rest.find(MARKER_START_CHAR) else {
                self.pos = self.spec.len();
                return Some(Token::Text(rest));
            };

            let marker_at = self.pos + offset;
            match Directive::match_at(&self.spec[marker_at..]) {
                Some(directive) => {
                    self.pos = marker_at + directive.marker().len();
                    self.pending = Some(directive);
                }
                None => {
                    tracing::trace!(offset = marker_at, "skipping unrecognized marker");
                    self.pos = marker_at + MARKER_START_CHAR.len_utf8();
                }
            }

            let text = &rest[..offset];
            if !text.is_empty() {
                return Some(Token::Text(text));
            }
        }
    }
}
