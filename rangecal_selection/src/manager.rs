// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rangecal_grid::{Cell, CellMeasure, CellRange};

use crate::{
    CellAnimationType, SelectionKind, SelectionRenderOptions, SelectionState, SelectionTransition,
    TransitionError, create_state,
};

/// Keeps the previous and the current selection and builds the transition
/// between them.
///
/// Only one step of history is kept: every state change demotes the current
/// state to the previous one. Changes must be applied in the order they
/// happen. A change that arrives while a transition is running simply
/// replaces the pair; the caller drops the old transition and builds a new
/// one.
///
/// Supported transitions:
///
/// | previous | current | transition |
/// |---|---|---|
/// | none | cell | [`AppearAlpha`](crate::AppearAlpha) or [`AppearBubble`](crate::AppearBubble) |
/// | none | range | [`AppearAlpha`](crate::AppearAlpha) |
/// | cell | none | reversed [`AppearAlpha`](crate::AppearAlpha) or [`AppearBubble`](crate::AppearBubble) |
/// | range | none | reversed [`AppearAlpha`](crate::AppearAlpha) |
/// | cell | cell on the same row or column | [`MoveToCell`](crate::MoveToCell) |
/// | cell | any other cell | [`DualAlpha`](crate::DualAlpha) or [`DualBubble`](crate::DualBubble) |
/// | range | intersecting range | [`RangeToRange`](crate::RangeToRange) |
/// | range | disjoint range | [`DualAlpha`](crate::DualAlpha) |
///
/// The alpha or bubble choice follows
/// [`SelectionRenderOptions::cell_animation_type`]. Any other pair is an error.
///
/// ```rust
/// use rangecal_grid::{Cell, UniformGridMeasure};
/// use rangecal_selection::{SelectionKind, SelectionManager, SelectionRenderOptions};
///
/// let measure = UniformGridMeasure::new(280.0, 30.0, 20.0);
/// let options = SelectionRenderOptions::default();
///
/// let mut manager = SelectionManager::new();
/// manager.set_state(Cell::new(2), Cell::new(2), &measure);
/// manager.set_state(Cell::new(2), Cell::new(12), &measure);
/// assert_eq!(manager.previous_state().kind(), SelectionKind::Cell);
/// assert_eq!(manager.current_state().kind(), SelectionKind::Range);
///
/// // A cell can't morph into a range in one motion.
/// assert!(!manager.has_transition());
/// let err = manager.create_transition(&options, &measure).unwrap_err();
/// assert_eq!(err.previous, SelectionKind::Cell);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectionManager {
    previous: SelectionState,
    current: SelectionState,
}

impl SelectionManager {
    /// Creates a manager with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: SelectionState::None,
            current: SelectionState::None,
        }
    }

    /// The state before the last change.
    #[must_use]
    pub fn previous_state(&self) -> &SelectionState {
        &self.previous
    }

    /// The state after the last change.
    #[must_use]
    pub fn current_state(&self) -> &SelectionState {
        &self.current
    }

    /// Clears the selection.
    pub fn set_none_state(&mut self) {
        self.push_state(SelectionState::None);
    }

    /// Selects `start..=end`, measured with `measure`.
    ///
    /// The range must be normalized; see [`CellRange::normalize`].
    pub fn set_state<M: CellMeasure + ?Sized>(&mut self, start: Cell, end: Cell, measure: &M) {
        self.push_state(create_state(CellRange::new(start, end), measure));
    }

    fn push_state(&mut self, state: SelectionState) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            previous = ?self.current.range(),
            current = ?state.range(),
            kind = %state.kind(),
            "selection state changed"
        );

        self.previous = core::mem::replace(&mut self.current, state);
    }

    /// Re-measures both states after the grid geometry changed.
    ///
    /// The selected ranges and the history are kept.
    pub fn update_configuration<M: CellMeasure + ?Sized>(&mut self, measure: &M) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            previous = ?self.previous.range(),
            current = ?self.current.range(),
            "selection re-measured"
        );

        self.previous = self.previous.remeasured(measure);
        self.current = self.current.remeasured(measure);
    }

    /// Returns `true` if a transition is defined from the previous state to
    /// the current one and the two differ.
    #[must_use]
    pub fn has_transition(&self) -> bool {
        is_supported(self.previous.kind(), self.current.kind())
            && self.previous.range() != self.current.range()
    }

    /// Builds the transition from the previous state to the current one.
    ///
    /// The transition is returned at fraction `0`, showing the previous state.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] if no transition is defined between the
    /// kinds of the two states.
    pub fn create_transition<M: CellMeasure + ?Sized>(
        &self,
        options: &SelectionRenderOptions,
        measure: &M,
    ) -> Result<SelectionTransition, TransitionError> {
        let previous = self.previous;
        let current = self.current;
        let bubble = options.cell_animation_type == CellAnimationType::Bubble;

        let transition = match (previous.kind(), current.kind()) {
            (SelectionKind::None, SelectionKind::Cell) if bubble => {
                SelectionTransition::appear_bubble(current, false)
            }
            (SelectionKind::None, SelectionKind::Cell | SelectionKind::Range) => {
                SelectionTransition::appear_alpha(current, false)
            }
            (SelectionKind::Cell, SelectionKind::None) if bubble => {
                SelectionTransition::appear_bubble(previous, true)
            }
            (SelectionKind::Cell | SelectionKind::Range, SelectionKind::None) => {
                SelectionTransition::appear_alpha(previous, true)
            }
            (SelectionKind::Cell, SelectionKind::Cell) => {
                let start = previous.range().start();
                let end = current.range().start();

                if start.same_x(end) || start.same_y(end) {
                    SelectionTransition::move_to_cell(previous, current)
                } else if bubble {
                    SelectionTransition::dual_bubble(previous, current)
                } else {
                    SelectionTransition::dual_alpha(previous, current)
                }
            }
            (SelectionKind::Range, SelectionKind::Range) => {
                if previous.range().has_intersection_with(current.range()) {
                    SelectionTransition::range_to_range(previous, current, measure)
                } else {
                    SelectionTransition::dual_alpha(previous, current)
                }
            }
            (previous, current) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%previous, %current, "unsupported selection transition");

                return Err(TransitionError { previous, current });
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(?transition, "selection transition created");

        Ok(transition)
    }
}

fn is_supported(previous: SelectionKind, current: SelectionKind) -> bool {
    matches!(
        (previous, current),
        (SelectionKind::None, SelectionKind::Cell | SelectionKind::Range)
            | (SelectionKind::Cell | SelectionKind::Range, SelectionKind::None)
            | (SelectionKind::Cell, SelectionKind::Cell)
            | (SelectionKind::Range, SelectionKind::Range)
    )
}

#[cfg(test)]
mod tests {
    use rangecal_grid::UniformGridMeasure;

    use super::*;

    #[test]
    fn supported_pairs_match_create_transition() {
        let measure = UniformGridMeasure::new(280.0, 30.0, 20.0);
        let options = SelectionRenderOptions::default();

        let states = [
            SelectionState::None,
            create_state(CellRange::single(Cell::new(1)), &measure),
            create_state(CellRange::from_indices(3, 9), &measure),
        ];

        for previous in states {
            for current in states {
                let manager = SelectionManager { previous, current };
                let supported = is_supported(previous.kind(), current.kind());

                assert_eq!(
                    manager.create_transition(&options, &measure).is_ok(),
                    supported,
                    "{:?} -> {:?}",
                    previous.kind(),
                    current.kind()
                );
            }
        }
    }

    #[test]
    fn unchanged_selection_has_no_transition() {
        let measure = UniformGridMeasure::new(280.0, 30.0, 20.0);
        let mut manager = SelectionManager::new();
        assert!(!manager.has_transition());

        manager.set_state(Cell::new(4), Cell::new(4), &measure);
        assert!(manager.has_transition());

        manager.set_state(Cell::new(4), Cell::new(4), &measure);
        assert!(!manager.has_transition());
    }
}
