//! Per-project image carousel state.
//!
//! Each project keeps its own active image index. Projects that have never
//! been touched have no entry and read as index 0.

use std::collections::HashMap;

use serde_json::{json, Value};

/// Position of a project in the bundled project list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next { project: ProjectId, total: usize },
    Prev { project: ProjectId, total: usize },
    JumpTo { project: ProjectId, index: usize },
}

impl CarouselAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Next { .. } => "next",
            Self::Prev { .. } => "prev",
            Self::JumpTo { .. } => "jump_to",
        }
    }

    /// Fields for the `carousel_action` log event.
    pub fn log_fields(&self) -> Value {
        match *self {
            Self::Next { project, total } | Self::Prev { project, total } => json!({
                "action": self.as_str(),
                "project": project.0,
                "total": total,
            }),
            Self::JumpTo { project, index } => json!({
                "action": self.as_str(),
                "project": project.0,
                "index": index,
            }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    indices: HashMap<ProjectId, usize>,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_index(&self, project: ProjectId) -> usize {
        self.indices.get(&project).copied().unwrap_or(0)
    }

    /// Advances to the next image, wrapping to the first. `total == 0` is a no-op.
    pub fn next(&mut self, project: ProjectId, total: usize) {
        if total == 0 {
            return;
        }
        let current = self.active_index(project);
        self.indices.insert(project, (current + 1) % total);
    }

    /// Steps back one image, wrapping to the last. `total == 0` is a no-op.
    pub fn prev(&mut self, project: ProjectId, total: usize) {
        if total == 0 {
            return;
        }
        let current = self.active_index(project) % total;
        self.indices.insert(project, (current + total - 1) % total);
    }

    /// Sets the active index directly. The caller guarantees `index` is in range.
    pub fn jump_to(&mut self, project: ProjectId, index: usize) {
        self.indices.insert(project, index);
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next { project, total } => self.next(project, total),
            CarouselAction::Prev { project, total } => self.prev(project, total),
            CarouselAction::JumpTo { project, index } => self.jump_to(project, index),
        }
    }
}

/// Arrows and indicator dots are only rendered when there is something to cycle through.
pub fn shows_navigation(total: usize) -> bool {
    total > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ProjectId = ProjectId(0);
    const B: ProjectId = ProjectId(1);

    #[test]
    fn untouched_project_starts_at_zero() {
        let state = CarouselState::new();
        assert_eq!(state.active_index(A), 0);
        assert_eq!(state.active_index(ProjectId(42)), 0);
    }

    #[test]
    fn next_n_times_returns_to_start() {
        for total in 2..=6 {
            for start in 0..total {
                let mut state = CarouselState::new();
                state.jump_to(A, start);
                for _ in 0..total {
                    state.next(A, total);
                }
                assert_eq!(state.active_index(A), start, "total={total} start={start}");
            }
        }
    }

    #[test]
    fn prev_is_inverse_of_next() {
        for total in 2..=5 {
            for start in 0..total {
                let mut state = CarouselState::new();
                state.jump_to(A, start);
                state.next(A, total);
                state.prev(A, total);
                assert_eq!(state.active_index(A), start);

                state.prev(A, total);
                state.next(A, total);
                assert_eq!(state.active_index(A), start);
            }
        }
    }

    #[test]
    fn jump_then_read_returns_target() {
        let mut state = CarouselState::new();
        for index in 0..4 {
            state.jump_to(A, index);
            assert_eq!(state.active_index(A), index);
        }
    }

    #[test]
    fn four_images_next_next_prev_lands_on_one() {
        let mut state = CarouselState::new();
        state.next(A, 4);
        state.next(A, 4);
        state.prev(A, 4);
        assert_eq!(state.active_index(A), 1);
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut state = CarouselState::new();
        state.prev(A, 3);
        assert_eq!(state.active_index(A), 2);
    }

    #[test]
    fn projects_are_isolated() {
        let mut state = CarouselState::new();
        state.jump_to(B, 2);
        state.next(A, 4);
        state.next(A, 4);
        state.prev(A, 4);
        state.jump_to(A, 3);
        assert_eq!(state.active_index(B), 2);

        state.prev(B, 3);
        assert_eq!(state.active_index(A), 3);
        assert_eq!(state.active_index(B), 1);
    }

    #[test]
    fn single_image_has_no_observable_transition() {
        let mut state = CarouselState::new();
        state.next(A, 1);
        assert_eq!(state.active_index(A), 0);
        state.prev(A, 1);
        assert_eq!(state.active_index(A), 0);
        assert!(!shows_navigation(1));
        assert!(shows_navigation(2));
    }

    #[test]
    fn zero_total_leaves_state_untouched() {
        let mut state = CarouselState::new();
        state.jump_to(A, 1);
        state.next(A, 0);
        state.prev(A, 0);
        assert_eq!(state.active_index(A), 1);
    }

    #[test]
    fn apply_dispatches_each_action() {
        let mut state = CarouselState::new();
        state.apply(CarouselAction::Next { project: A, total: 3 });
        state.apply(CarouselAction::Next { project: A, total: 3 });
        assert_eq!(state.active_index(A), 2);
        state.apply(CarouselAction::Prev { project: B, total: 2 });
        assert_eq!(state.active_index(B), 1);
        state.apply(CarouselAction::JumpTo { project: A, index: 0 });
        assert_eq!(state.active_index(A), 0);
    }

    #[test]
    fn action_log_fields_are_flat() {
        let next = CarouselAction::Next { project: B, total: 4 }.log_fields();
        assert_eq!(next, json!({ "action": "next", "project": 1, "total": 4 }));

        let prev = CarouselAction::Prev { project: A, total: 3 }.log_fields();
        assert_eq!(prev["action"], "prev");
        assert_eq!(prev["total"], 3);

        let jump = CarouselAction::JumpTo { project: B, index: 2 }.log_fields();
        assert_eq!(jump, json!({ "action": "jump_to", "project": 1, "index": 2 }));
        assert!(jump.get("total").is_none());
    }
}
