use tactile_core::PointerId;

/// Index of the touch that owns the active drag, if it is among `ids`.
/// Mouse drags and idle dials own no touch.
#[inline]
pub fn owner_index(ids: &[i32], owner: Option<PointerId>) -> Option<usize> {
    match owner {
        Some(PointerId::Touch(id)) => ids.iter().position(|t| *t == id),
        _ => None,
    }
}

/// Whether `pagehide` should tear the animation loop down. Pages entering
/// the back/forward cache are restored as-is, loop included.
#[inline]
pub fn stops_on_pagehide(persisted: bool) -> bool {
    !persisted
}
