//! Floor request board: which floors have an outstanding call

use super::types::RequestError;

/// Per-floor pending-call flags
#[derive(Debug, Clone)]
pub struct RequestBoard {
    pending: Vec<bool>,
}

impl RequestBoard {
    pub fn new(floor_count: usize) -> Self {
        Self {
            pending: vec![false; floor_count],
        }
    }

    /// Mark a floor as having a pending call. Idempotent; requesting an
    /// already-pending floor changes nothing.
    pub fn request(&mut self, floor: usize) -> Result<(), RequestError> {
        if floor >= self.pending.len() {
            return Err(RequestError::InvalidFloor {
                floor,
                floor_count: self.pending.len(),
            });
        }
        self.pending[floor] = true;
        Ok(())
    }

    /// Clear a floor's pending flag. No error if already clear.
    pub fn clear(&mut self, floor: usize) {
        if let Some(entry) = self.pending.get_mut(floor) {
            *entry = false;
        }
    }

    pub fn is_pending(&self, floor: usize) -> bool {
        self.pending.get(floor).copied().unwrap_or(false)
    }

    /// Floors with a pending call, in ascending order
    pub fn pending_floors(&self) -> Vec<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter_map(|(floor, &pending)| pending.then_some(floor))
            .collect()
    }
}
