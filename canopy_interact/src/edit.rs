// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline label-edit state machine.
//!
//! The machine is `Viewing | Editing`. Entering edit mode seeds a private
//! draft from the current external label; committing trims the draft and
//! reports it only when it meaningfully changed; canceling discards it. The
//! machine always returns to `Viewing` after a commit attempt, whether or not
//! a value was produced.
//!
//! ## Usage
//!
//! ```
//! use canopy_interact::edit::{EditKey, LabelEdit};
//!
//! let mut edit: LabelEdit<u32> = LabelEdit::new();
//!
//! assert!(edit.begin(7, "Alpha"));
//! edit.set_draft("  Beta  ");
//!
//! let commit = edit.handle_key(EditKey::Confirm).expect("draft changed");
//! assert_eq!(commit.target, 7);
//! assert_eq!(commit.label, "Beta");
//! assert!(!edit.is_editing());
//! ```
//!
//! ## External label changes
//!
//! While `Viewing` the machine holds no copy of the label, so whatever the
//! host displays is authoritative by construction. While `Editing` the draft
//! is private to the machine: a label change arriving from elsewhere never
//! overwrites an in-progress draft (last-writer-wins applies only outside
//! edit mode). The original label captured at [`LabelEdit::begin`] is what a
//! later commit compares against.
//!
//! ## Focus
//!
//! On entering `Editing` the host is expected to focus and select its edit
//! surface *after the next render pass* — the surface does not exist until
//! the host has re-rendered. The machine carries no timing of its own; a
//! `true` return from [`LabelEdit::begin`] is the host's cue to schedule that
//! one-shot continuation with whatever run-after-paint primitive its UI layer
//! provides.

use alloc::string::String;

/// Phase of the edit machine.
#[derive(Clone, Debug, PartialEq)]
enum Phase<K> {
    Viewing,
    Editing {
        target: K,
        /// Label as it was when editing began; commits compare against this.
        original: String,
        draft: String,
    },
}

/// Committed outcome of an edit, produced by [`LabelEdit::commit`] when the
/// trimmed draft is non-empty and differs from the original label.
///
/// The host funnels this into its data model (for example
/// `canopy_graph::FlowGraph::set_label`).
#[derive(Clone, Debug, PartialEq)]
pub struct LabelCommit<K> {
    /// The box whose label was edited.
    pub target: K,
    /// The trimmed replacement label.
    pub label: String,
}

/// Key intents recognized while editing; the host maps its real key events
/// (typically Enter/Escape) onto these.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EditKey {
    /// Attempt to commit the draft.
    Confirm,
    /// Discard the draft.
    Cancel,
}

/// Inline-edit state machine: `Viewing | Editing`, generic over the node key
/// `K`.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelEdit<K> {
    phase: Phase<K>,
}

impl<K> Default for LabelEdit<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> LabelEdit<K> {
    /// Create a machine in the `Viewing` state.
    pub fn new() -> Self {
        Self {
            phase: Phase::Viewing,
        }
    }

    /// Enter edit mode for `target`: the `Viewing -> Editing` transition.
    ///
    /// The draft is seeded from `label`, the current external value. Returns
    /// `true` on a genuine transition; while already editing this is a no-op
    /// returning `false` and the in-progress draft is untouched.
    pub fn begin(&mut self, target: K, label: &str) -> bool {
        if matches!(self.phase, Phase::Editing { .. }) {
            return false;
        }
        self.phase = Phase::Editing {
            target,
            original: String::from(label),
            draft: String::from(label),
        };
        true
    }

    /// Replace the draft while `Editing`.
    ///
    /// Returns `false` (and does nothing) while `Viewing`.
    pub fn set_draft(&mut self, text: &str) -> bool {
        let Phase::Editing { draft, .. } = &mut self.phase else {
            return false;
        };
        *draft = String::from(text);
        true
    }

    /// The in-progress draft, if editing.
    pub fn draft(&self) -> Option<&str> {
        match &self.phase {
            Phase::Editing { draft, .. } => Some(draft),
            Phase::Viewing => None,
        }
    }

    /// Attempt to commit the draft: the `Editing -> Viewing` transition.
    ///
    /// The draft is trimmed of surrounding whitespace. A [`LabelCommit`] is
    /// produced only when the trimmed draft is non-empty **and** differs from
    /// the label captured at [`LabelEdit::begin`]; either way the machine
    /// returns to `Viewing`. Calling `commit` while `Viewing` returns `None`.
    pub fn commit(&mut self) -> Option<LabelCommit<K>> {
        match core::mem::replace(&mut self.phase, Phase::Viewing) {
            Phase::Editing {
                target,
                original,
                draft,
            } => {
                let trimmed = draft.trim();
                if !trimmed.is_empty() && trimmed != original.as_str() {
                    Some(LabelCommit {
                        target,
                        label: String::from(trimmed),
                    })
                } else {
                    None
                }
            }
            Phase::Viewing => None,
        }
    }

    /// Discard the draft and return to `Viewing`.
    ///
    /// Returns whether an edit was actually in progress.
    pub fn cancel(&mut self) -> bool {
        match core::mem::replace(&mut self.phase, Phase::Viewing) {
            Phase::Editing { .. } => true,
            Phase::Viewing => false,
        }
    }

    /// Route a key intent: [`EditKey::Confirm`] commits, [`EditKey::Cancel`]
    /// cancels.
    pub fn handle_key(&mut self, key: EditKey) -> Option<LabelCommit<K>> {
        match key {
            EditKey::Confirm => self.commit(),
            EditKey::Cancel => {
                self.cancel();
                None
            }
        }
    }

    /// Whether an edit is in progress.
    pub fn is_editing(&self) -> bool {
        matches!(self.phase, Phase::Editing { .. })
    }

    /// The box being edited, if any.
    pub fn target(&self) -> Option<&K> {
        match &self.phase {
            Phase::Editing { target, .. } => Some(target),
            Phase::Viewing => None,
        }
    }
}
