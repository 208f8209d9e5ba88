use super::{FormRow, StepRecord};

/// Records that carry an exclusive "default" marker.
pub trait PrimaryFlag {
    fn is_primary(&self) -> bool;
    fn set_is_primary(&mut self, value: bool);
}

impl<T: StepRecord + PrimaryFlag> PrimaryFlag for FormRow<T> {
    fn is_primary(&self) -> bool {
        self.record.is_primary()
    }

    fn set_is_primary(&mut self, value: bool) {
        self.record.set_is_primary(value)
    }
}

/// Set the primary flag of `rows[index]`.
///
/// Turning a row on clears the flag on every sibling, so at most one row is
/// primary afterwards. Returns `false` when `index` is out of range.
pub fn set_primary<T: PrimaryFlag>(rows: &mut [T], index: usize, value: bool) -> bool {
    if index >= rows.len() {
        return false;
    }

    if value {
        for (i, row) in rows.iter_mut().enumerate() {
            row.set_is_primary(i == index);
        }
    } else {
        rows[index].set_is_primary(false);
    }
    true
}

pub fn primary_count<T: PrimaryFlag>(rows: &[T]) -> usize {
    rows.iter().filter(|row| row.is_primary()).count()
}
