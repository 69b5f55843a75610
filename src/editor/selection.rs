//! Selection state machine.
//!
//! ```text
//!              ShapeClicked(id)
//!   ┌──────┐ ─────────────────────► ┌────────────────────────┐
//!   │ Idle │                        │ Selected(id, channel)  │ ◄─┐
//!   └──────┘ ◄───────────────────── └───────────┬────────────┘   │
//!            BackgroundClicked /                │ ShapeClicked   │
//!            NewDocumentLoaded                  └────────────────┘
//!                                     same id: flip channel if the
//!                                     other one renders, else stay
//! ```
//!
//! Transitions are pure: the caller supplies which channels a shape renders
//! and gets the next state back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two colorable properties of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintChannel {
    Fill,
    Stroke,
}

impl PaintChannel {
    /// CSS property / presentation attribute name.
    pub fn property(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Fill => Self::Stroke,
            Self::Stroke => Self::Fill,
        }
    }
}

impl fmt::Display for PaintChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

/// Which channels currently render a color on a shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelAvailability {
    pub fill: bool,
    pub stroke: bool,
}

impl ChannelAvailability {
    pub fn has(&self, channel: PaintChannel) -> bool {
        match channel {
            PaintChannel::Fill => self.fill,
            PaintChannel::Stroke => self.stroke,
        }
    }

    /// Channel picked on a first click: fill if it renders, else stroke if
    /// it renders, else fill.
    pub fn preferred(&self) -> PaintChannel {
        if !self.fill && self.stroke {
            PaintChannel::Stroke
        } else {
            PaintChannel::Fill
        }
    }
}

/// The active shape and the channel color edits go to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub shape_id: String,
    pub channel: PaintChannel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// No selection
    #[default]
    Idle,
    /// A shape is selected
    Selected(Selection),
}

impl SelectionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Selected(selection) => Some(selection),
            Self::Idle => None,
        }
    }

    /// State after the shape `id` was clicked.
    ///
    /// Re-clicking the selected shape flips to the other channel only when
    /// that channel renders a color; otherwise the selection stays as is.
    pub fn on_shape_clicked(&self, id: &str, available: ChannelAvailability) -> Self {
        let channel = match self {
            Self::Selected(current) if current.shape_id == id => {
                let other = current.channel.other();
                if available.has(other) {
                    other
                } else {
                    current.channel
                }
            }
            _ => available.preferred(),
        };

        Self::Selected(Selection {
            shape_id: id.to_string(),
            channel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: ChannelAvailability = ChannelAvailability {
        fill: true,
        stroke: true,
    };
    const FILL_ONLY: ChannelAvailability = ChannelAvailability {
        fill: true,
        stroke: false,
    };
    const STROKE_ONLY: ChannelAvailability = ChannelAvailability {
        fill: false,
        stroke: true,
    };
    const NEITHER: ChannelAvailability = ChannelAvailability {
        fill: false,
        stroke: false,
    };

    fn channel(state: &SelectionState) -> Option<PaintChannel> {
        state.selection().map(|s| s.channel)
    }

    #[test]
    fn test_first_click_prefers_fill() {
        let idle = SelectionState::Idle;
        assert_eq!(channel(&idle.on_shape_clicked("a", BOTH)), Some(PaintChannel::Fill));
        assert_eq!(channel(&idle.on_shape_clicked("a", STROKE_ONLY)), Some(PaintChannel::Stroke));
        assert_eq!(channel(&idle.on_shape_clicked("a", NEITHER)), Some(PaintChannel::Fill));
    }

    #[test]
    fn test_reclick_toggles_between_channels() {
        let state = SelectionState::Idle.on_shape_clicked("a", BOTH);
        let state = state.on_shape_clicked("a", BOTH);
        assert_eq!(channel(&state), Some(PaintChannel::Stroke));
        let state = state.on_shape_clicked("a", BOTH);
        assert_eq!(channel(&state), Some(PaintChannel::Fill));
    }

    #[test]
    fn test_reclick_on_empty_channel_is_noop() {
        let mut state = SelectionState::Idle.on_shape_clicked("a", FILL_ONLY);
        for _ in 0..4 {
            state = state.on_shape_clicked("a", FILL_ONLY);
            assert_eq!(channel(&state), Some(PaintChannel::Fill));
        }

        let state = SelectionState::Idle.on_shape_clicked("b", STROKE_ONLY);
        let state = state.on_shape_clicked("b", STROKE_ONLY);
        assert_eq!(channel(&state), Some(PaintChannel::Stroke));
    }

    #[test]
    fn test_other_shape_starts_fresh() {
        let state = SelectionState::Idle
            .on_shape_clicked("a", BOTH)
            .on_shape_clicked("a", BOTH);
        assert_eq!(channel(&state), Some(PaintChannel::Stroke));

        let state = state.on_shape_clicked("b", BOTH);
        assert_eq!(
            state.selection(),
            Some(&Selection {
                shape_id: "b".into(),
                channel: PaintChannel::Fill,
            })
        );
    }

    #[test]
    fn test_channel_names() {
        assert_eq!(PaintChannel::Fill.to_string(), "fill");
        assert_eq!(PaintChannel::Stroke.property(), "stroke");
        assert_eq!(PaintChannel::Fill.other(), PaintChannel::Stroke);
    }
}
