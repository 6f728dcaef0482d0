//! A headless row engine for sectioned note lists.
//!
//! For compositing rows onto a canvas (backgrounds, labels, tag chips, reveal clipping), see
//! the `notelist-paint` crate.
//!
//! The list shows pinned notes above unpinned notes, each section under a header band, and the
//! pinned section can be collapsed. This crate computes:
//! - per-row geometry from section membership, tags, collapse state and view mode
//! - frame-stepped insert/remove/move transitions, queued by stable note identity
//! - row placement (prefix sums) for the hosting container's layout pass
//!
//! It is UI-agnostic. The host is expected to provide:
//! - the current ordering via [`NoteSource`]
//! - a periodic `tick(now_ms)` while a transition runs
//! - reactions to [`RowHost`] notifications (relayout, repaint, inline editors)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod key;
mod layout;
mod options;
mod placement;
mod source;
mod sums;
mod timeline;
mod transition;
mod types;

#[cfg(test)]
mod tests;

pub use controller::{RowController, RowHost};
pub use layout::RowLayout;
pub use options::{AnimationOptions, LayoutOptions, RowOptions};
pub use placement::RowPlacement;
pub use source::{NoteMeta, NoteSource, SectionFacts};
pub use timeline::{Easing, Timeline, TimelineTick};
pub use transition::{PendingTransition, RequestOutcome, Transitions};
pub use types::{AnimationFrame, ListState, NoteId, PlayDirection, TransitionKind};
