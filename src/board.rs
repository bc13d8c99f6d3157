//! Board State Transitions
//!
//! `AppState` is never mutated in place: every operation returns the next state.
//! The `try_*` forms report why an operation could not apply; the plain forms
//! turn those failures into no-ops, which is what the UI wants.

use reactive_stores::Store;

use crate::models::{canonical_seed, Container, Item};

pub const REORDERED_MESSAGE: &str = "Success! Item reordered within the same container.";
pub const MOVED_MESSAGE: &str = "Success! Item moved to the other container.";

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Reasons a board operation did not apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    ContainerNotFound(u32),
    ItemNotFound { container_id: u32, item_id: u32 },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::ContainerNotFound(id) => write!(f, "Container not found: {}", id),
            BoardError::ItemNotFound { container_id, item_id } => {
                write!(f, "Item {} not found in container {}", item_id, container_id)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, PartialEq, Store)]
pub struct AppState {
    /// Containers in display order
    pub containers: Vec<Container>,
    /// Whether the success banner is shown
    pub is_success: bool,
    /// Banner text for the last move/reorder
    pub success_message: String,
    /// Bumped on every successful move so a delayed dismiss can tell if it is stale
    pub banner_seq: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(canonical_seed())
    }
}

impl AppState {
    pub fn new(containers: Vec<Container>) -> Self {
        Self {
            containers,
            is_success: false,
            success_message: String::new(),
            banner_seq: 0,
        }
    }

    /// Back to the canonical seed with the banner cleared
    /// `banner_seq` keeps counting so dismiss timers from before the reset stay stale
    pub fn reset(&self) -> Self {
        Self {
            banner_seq: self.banner_seq.wrapping_add(1),
            ..Self::default()
        }
    }

    pub fn container(&self, container_id: u32) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == container_id)
    }

    pub fn find_item(&self, container_id: u32, item_id: u32) -> Option<&Item> {
        self.container(container_id)?
            .items
            .iter()
            .find(|item| item.id == item_id)
    }

    /// Total number of items across all containers
    pub fn item_count(&self) -> usize {
        self.containers.iter().map(|c| c.items.len()).sum()
    }

    fn container_index(&self, container_id: u32) -> BoardResult<usize> {
        self.containers
            .iter()
            .position(|c| c.id == container_id)
            .ok_or(BoardError::ContainerNotFound(container_id))
    }

    fn item_position(&self, container_index: usize, item_id: u32) -> BoardResult<usize> {
        let container = &self.containers[container_index];
        container.position_of(item_id).ok_or(BoardError::ItemNotFound {
            container_id: container.id,
            item_id,
        })
    }

    /// Reorder within a container or move across containers
    ///
    /// Same container: the item is taken out first, then inserted at
    /// `target_index` in the shortened list (clamped to its length).
    /// Different containers: the item is appended to the target and
    /// `target_index` is ignored.
    pub fn try_move_or_reorder(
        &self,
        source_container_id: u32,
        item_id: u32,
        target_container_id: u32,
        target_index: usize,
    ) -> BoardResult<Self> {
        let source = self.container_index(source_container_id)?;
        let target = self.container_index(target_container_id)?;
        let position = self.item_position(source, item_id)?;

        let mut next = self.clone();
        let item = next.containers[source].items.remove(position);

        let message = if source == target {
            let items = &mut next.containers[source].items;
            let index = target_index.min(items.len());
            tracing::debug!(item_id, from = position, to = index, "reorder");
            items.insert(index, item);
            REORDERED_MESSAGE.to_string()
        } else {
            let target = &mut next.containers[target];
            tracing::debug!(item_id, from = source_container_id, to = target.id, "move");
            target.items.push(item);
            MOVED_MESSAGE.to_string()
        };

        next.is_success = true;
        next.success_message = message;
        next.banner_seq = self.banner_seq.wrapping_add(1);
        Ok(next)
    }

    pub fn move_or_reorder(
        &self,
        source_container_id: u32,
        item_id: u32,
        target_container_id: u32,
        target_index: usize,
    ) -> Self {
        self.try_move_or_reorder(source_container_id, item_id, target_container_id, target_index)
            .unwrap_or_else(|err| self.unchanged("move_or_reorder", err))
    }

    /// Remove an item; the banner is left alone
    pub fn try_remove_item(&self, container_id: u32, item_id: u32) -> BoardResult<Self> {
        let container = self.container_index(container_id)?;
        let position = self.item_position(container, item_id)?;

        let mut next = self.clone();
        next.containers[container].items.remove(position);
        Ok(next)
    }

    pub fn remove_item(&self, container_id: u32, item_id: u32) -> Self {
        self.try_remove_item(container_id, item_id)
            .unwrap_or_else(|err| self.unchanged("remove_item", err))
    }

    /// Rename an item; any string is accepted, including empty
    pub fn try_rename_item(&self, container_id: u32, item_id: u32, new_name: &str) -> BoardResult<Self> {
        let container = self.container_index(container_id)?;
        let position = self.item_position(container, item_id)?;

        let mut next = self.clone();
        next.containers[container].items[position].name = new_name.to_string();
        Ok(next)
    }

    pub fn rename_item(&self, container_id: u32, item_id: u32, new_name: &str) -> Self {
        self.try_rename_item(container_id, item_id, new_name)
            .unwrap_or_else(|err| self.unchanged("rename_item", err))
    }

    /// Hide the banner if it is still the one identified by `seq`
    pub fn dismiss_banner(&self, seq: u32) -> Self {
        if !self.is_success || self.banner_seq != seq {
            return self.clone();
        }
        Self {
            is_success: false,
            success_message: String::new(),
            ..self.clone()
        }
    }

    fn unchanged(&self, op: &'static str, err: BoardError) -> Self {
        tracing::debug!(op, %err, "ignored");
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &AppState, container_id: u32) -> Vec<u32> {
        state
            .container(container_id)
            .unwrap()
            .items
            .iter()
            .map(|item| item.id)
            .collect()
    }

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(ids(&state, 1), vec![1, 2, 3, 4]);
        assert!(ids(&state, 2).is_empty());
        assert!(!state.is_success);
        assert_eq!(state.success_message, "");
    }

    #[test]
    fn test_move_to_other_container_appends() {
        let state = AppState::default();
        let next = state.move_or_reorder(1, 2, 2, 0);

        assert_eq!(ids(&next, 1), vec![1, 3, 4]);
        assert_eq!(ids(&next, 2), vec![2]);
        assert!(next.is_success);
        assert_eq!(next.success_message, MOVED_MESSAGE);

        // target index is ignored for cross-container moves
        let next = next.move_or_reorder(1, 4, 2, 0);
        assert_eq!(ids(&next, 2), vec![2, 4]);
        assert_eq!(next.item_count(), 4);
    }

    #[test]
    fn test_move_back_uses_same_message() {
        let state = AppState::default().move_or_reorder(1, 1, 2, 0);
        let back = state.move_or_reorder(2, 1, 1, 0);
        assert_eq!(ids(&back, 1), vec![2, 3, 4, 1]);
        assert!(ids(&back, 2).is_empty());
        assert_eq!(back.success_message, MOVED_MESSAGE);
    }

    #[test]
    fn test_reorder_uses_post_removal_index() {
        let state = AppState::default();
        let next = state.move_or_reorder(1, 1, 1, 2);

        assert_eq!(ids(&next, 1), vec![2, 3, 1, 4]);
        assert!(next.is_success);
        assert_eq!(next.success_message, REORDERED_MESSAGE);
    }

    #[test]
    fn test_reorder_towards_front() {
        let next = AppState::default().move_or_reorder(1, 4, 1, 0);
        assert_eq!(ids(&next, 1), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_reorder_index_clamped() {
        let next = AppState::default().move_or_reorder(1, 2, 1, usize::MAX);
        assert_eq!(ids(&next, 1), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_reorder_preserves_ids() {
        let state = AppState::default();
        for item_id in 1..=4 {
            for index in 0..=4 {
                let next = state.move_or_reorder(1, item_id, 1, index);
                assert_eq!(sorted(ids(&next, 1)), vec![1, 2, 3, 4]);
                assert!(ids(&next, 2).is_empty());
            }
        }
    }

    #[test]
    fn test_move_unknown_item_is_noop() {
        let state = AppState::default();

        assert_eq!(
            state.try_move_or_reorder(2, 1, 1, 0),
            Err(BoardError::ItemNotFound { container_id: 2, item_id: 1 })
        );
        assert_eq!(state.move_or_reorder(2, 1, 1, 0), state);
        assert_eq!(state.move_or_reorder(1, 99, 2, 0), state);
    }

    #[test]
    fn test_move_unknown_container_is_noop() {
        let state = AppState::default();

        assert_eq!(
            state.try_move_or_reorder(1, 1, 42, 0),
            Err(BoardError::ContainerNotFound(42))
        );
        assert_eq!(state.move_or_reorder(42, 1, 1, 0), state);
        assert_eq!(state.move_or_reorder(1, 1, 42, 0), state);
    }

    #[test]
    fn test_remove_item() {
        let state = AppState::default().move_or_reorder(1, 3, 2, 0);
        let next = state.remove_item(1, 2);

        assert_eq!(ids(&next, 1), vec![1, 4]);
        assert!(next.find_item(1, 2).is_none());
        assert_eq!(next.item_count(), state.item_count() - 1);
        // banner untouched
        assert_eq!(next.success_message, state.success_message);
        assert!(next.is_success);
    }

    #[test]
    fn test_remove_from_wrong_container_is_noop() {
        let state = AppState::default();
        assert_eq!(
            state.try_remove_item(2, 1),
            Err(BoardError::ItemNotFound { container_id: 2, item_id: 1 })
        );
        assert_eq!(state.remove_item(2, 1), state);
        assert_eq!(state.remove_item(5, 1), state);
    }

    #[test]
    fn test_rename_item_only_touches_name() {
        let state = AppState::default().move_or_reorder(1, 2, 2, 0);
        let next = state.rename_item(2, 2, "Groceries");

        assert_eq!(next.find_item(2, 2).unwrap().name, "Groceries");
        assert_eq!(ids(&next, 1), ids(&state, 1));
        assert_eq!(ids(&next, 2), ids(&state, 2));
        assert_eq!(next.container(1), state.container(1));
        assert_eq!(next.success_message, state.success_message);
    }

    #[test]
    fn test_rename_to_empty() {
        let next = AppState::default().rename_item(1, 1, "");
        assert_eq!(next.find_item(1, 1).unwrap().name, "");
    }

    #[test]
    fn test_rename_unknown_is_noop() {
        let state = AppState::default();
        assert_eq!(state.rename_item(2, 1, "x"), state);
        assert_eq!(state.rename_item(1, 77, "x"), state);
    }

    #[test]
    fn test_reset_restores_seed() {
        let messy = AppState::default()
            .move_or_reorder(1, 1, 2, 0)
            .rename_item(2, 1, "renamed")
            .remove_item(1, 3)
            .move_or_reorder(1, 4, 1, 0);
        assert!(messy.is_success);

        let reset = messy.reset();
        assert_eq!(reset.containers, canonical_seed());
        assert_eq!(ids(&reset, 1), vec![1, 2, 3, 4]);
        assert_eq!(reset.find_item(1, 1).unwrap().name, "Item 1");
        assert!(ids(&reset, 2).is_empty());
        assert!(!reset.is_success);
        assert_eq!(reset.success_message, "");
    }

    #[test]
    fn test_reset_of_seed_is_seed() {
        let reset = AppState::default().reset();
        assert_eq!(reset.containers, AppState::default().containers);
        assert!(!reset.is_success);
    }

    #[test]
    fn test_dismiss_from_before_reset_is_stale() {
        let first = AppState::default().move_or_reorder(1, 1, 2, 0);
        let fresh = first.reset().move_or_reorder(1, 2, 2, 0);
        assert_ne!(fresh.banner_seq, first.banner_seq);

        // timer scheduled by the first move fires after reset + new move
        let after_timer = fresh.dismiss_banner(first.banner_seq);
        assert!(after_timer.is_success);
        assert_eq!(after_timer.success_message, MOVED_MESSAGE);

        assert!(!fresh.dismiss_banner(fresh.banner_seq).is_success);
    }

    #[test]
    fn test_no_duplication_under_moves() {
        let mut state = AppState::default();
        let steps = [(1, 1, 2, 0), (1, 3, 1, 0), (2, 1, 1, 1), (1, 2, 2, 5), (2, 2, 2, 0)];
        for (src, item, dst, index) in steps {
            state = state.move_or_reorder(src, item, dst, index);
            let mut all: Vec<u32> = ids(&state, 1);
            all.extend(ids(&state, 2));
            assert_eq!(sorted(all), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_dismiss_banner() {
        let first = AppState::default().move_or_reorder(1, 1, 2, 0);
        let seq = first.banner_seq;
        let second = first.move_or_reorder(1, 2, 2, 0);

        // stale dismiss leaves the newer banner up
        assert_eq!(second.dismiss_banner(seq), second);

        let cleared = second.dismiss_banner(second.banner_seq);
        assert!(!cleared.is_success);
        assert_eq!(cleared.success_message, "");
        assert_eq!(cleared.containers, second.containers);
    }

    #[test]
    fn test_failed_move_keeps_banner_seq() {
        let state = AppState::default().move_or_reorder(1, 1, 2, 0);
        assert_eq!(state.move_or_reorder(1, 1, 2, 0).banner_seq, state.banner_seq);
    }
}
