//! Dot Track
//!
//! A fixed run of dots whose filled cells always form a prefix. The score is
//! the only state, so a gap between filled cells cannot be represented.

use crate::error::ClickRejected;

/// A planned score change produced by interpreting a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub from: u8,
    pub to: u8,
}

impl Click {
    /// Points this change consumes; negative when it refunds.
    pub fn cost(&self) -> i32 {
        i32::from(self.to) - i32::from(self.from)
    }

    pub fn is_spend(&self) -> bool {
        self.to > self.from
    }
}

/// Score widget of `len` dots with `base` free dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotTrack {
    len: u8,
    base: u8,
    score: u8,
}

impl DotTrack {
    /// New track sitting at its base allowance.
    pub fn new(len: u8, base: u8) -> Self {
        let base = base.min(len);
        Self { len, base, score: base }
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn base(&self) -> u8 {
        self.base
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// Points bought above the base allowance.
    pub fn spent(&self) -> i32 {
        i32::from(self.score) - i32::from(self.base)
    }

    /// Force the score, clamped to the track length.
    ///
    /// Bypasses every guard; the click path goes through [`DotTrack::click`].
    pub fn render(&mut self, score: u8) {
        self.score = score.min(self.len);
    }

    pub fn reset(&mut self) {
        self.score = self.base;
    }

    pub fn is_filled(&self, index: usize) -> bool {
        index < usize::from(self.score)
    }

    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        (0..usize::from(self.len)).map(move |i| self.is_filled(i))
    }

    /// Interpret a click on cell `index`.
    ///
    /// The topmost filled cell unfills to `index`; any other cell sets the
    /// score to `index + 1`. Targets under the base allowance are refused.
    pub fn click(&self, index: usize) -> Result<Click, ClickRejected> {
        if index >= usize::from(self.len) {
            return Err(ClickRejected::OutOfRange { index, len: self.len });
        }
        // index < len <= u8::MAX
        let index = index as u8;
        let to = if index + 1 == self.score { index } else { index + 1 };
        if to < self.base {
            return Err(ClickRejected::BelowBase { target: to, base: self.base });
        }
        Ok(Click { from: self.score, to })
    }

    pub(crate) fn apply(&mut self, click: Click) {
        self.score = click.to.min(self.len);
    }
}
