//! Clamped per-location inventory mutation.

use stockrec_model::{CatalogEntry, LocationId};

/// Direction of a stock movement at one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

/// Apply a signed, clamped quantity delta to one location of an entry.
///
/// Increases create the per-location record when absent. Decreases clamp at
/// zero and never create a record: stock that was never tracked at a
/// location stays untracked, and no count ever goes negative. The caller
/// persists the whole entry afterwards in a single save.
pub fn apply_delta(
    entry: &mut CatalogEntry,
    location: &LocationId,
    direction: Direction,
    quantity: u32,
) {
    match direction {
        Direction::Increase => {
            let slot = entry
                .per_location_quantities
                .entry(location.clone())
                .or_insert(0);
            *slot = slot.saturating_add(quantity);
        }
        Direction::Decrease => {
            if let Some(current) = entry.per_location_quantities.get_mut(location) {
                *current = current.saturating_sub(quantity);
            }
        }
    }
}

/// Move stock between two locations of one already-resolved entry:
/// a clamped decrease at the source, then an increase at the destination.
pub fn apply_transfer(entry: &mut CatalogEntry, from: &LocationId, to: &LocationId, quantity: u32) {
    apply_delta(entry, from, Direction::Decrease, quantity);
    apply_delta(entry, to, Direction::Increase, quantity);
}
