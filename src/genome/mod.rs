//! Circular genome annotated with transposable elements (TEs).
//!
//! A genome is a ring of positions. Each position is empty, or belongs to a TE
//! that is either active or disabled. The `Genome` trait fixes the shared
//! semantics; two storage strategies implement it:
//!
//! - `ArrayGenome`: one contiguous `Vec<Site>`, insertion splices the vector
//! - `LinkedGenome`: an arena of slots linked into a ring, insertion walks to the
//!   predecessor and relinks in O(1)
//!
//! Both are interchangeable: the same sequence of operations produces the same
//! rendering and the same active set on either.
//!
//! # Collision rule
//!
//! Inserting at a position that is currently active disables the TE owning that
//! position, all of it, before the new TE is placed.
//!
//! # Example
//!
//! ```
//! use tegenome::genome::{ArrayGenome, Genome};
//!
//! let mut genome = ArrayGenome::new(20).unwrap();
//! let first = genome.insert_te(5, 3).unwrap();
//! assert_eq!(&genome.render()[5..8], "AAA");
//!
//! genome.insert_te(5, 2).unwrap();
//! assert!(!genome.active_tes().contains(&first));
//! assert_eq!(genome.len(), 25);
//! ```

pub mod array;
pub mod linked;
pub mod ops;
pub mod registry;

pub use array::ArrayGenome;
pub use linked::{LinkedGenome, Ring, SlotId};
pub use ops::{Operation, Outcome};
pub use registry::TeRegistry;

use crate::error::{GenomeError, Result};
use crate::types::{Site, TeId};
use log::{debug, warn};
use std::mem;

/// Current placement of a TE: where its run starts and how many consecutive
/// positions it still owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeRun {
    pub start: usize,
    pub len: usize,
}

/// Shift `start` by `offset` positions around a ring of `len` positions.
///
/// Total for every offset: the sum is taken in `i128` and reduced with a
/// Euclidean remainder, so negative offsets wrap downwards.
pub fn circular_position(start: usize, offset: i64, len: usize) -> usize {
    debug_assert!(len > 0, "a genome always has at least one position");
    (start as i128 + offset as i128).rem_euclid(len as i128) as usize
}

/// Reject a TE length that is zero, or that would grow a genome of `current`
/// positions past what a `Vec<T>` can address. Checked before any mutation.
pub(crate) fn check_insert_length<T>(current: usize, length: usize) -> Result<()> {
    let capacity = isize::MAX as usize / mem::size_of::<T>().max(1);
    match current.checked_add(length) {
        Some(total) if length > 0 && total <= capacity => Ok(()),
        _ => {
            warn!("rejected TE length {} for genome of {} positions", length, current);
            Err(GenomeError::InvalidLength(length))
        }
    }
}

/// Operations shared by every genome realization
pub trait Genome {
    /// Insert a new active TE of `length` positions immediately before position
    /// `pos mod len()`, disabling the TE already active there. Returns the new id.
    fn insert_te(&mut self, pos: usize, length: usize) -> Result<TeId>;

    /// Disable every site still owned by `te`. No-op for inactive or unknown ids.
    fn disable_te(&mut self, te: TeId);

    /// Active TE ids in the order they were created
    fn active_tes(&self) -> &[TeId];

    /// Number of positions
    fn len(&self) -> usize;

    /// Sites in circular order, starting at position 0
    fn sites(&self) -> Box<dyn Iterator<Item = &Site> + '_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_active(&self, te: TeId) -> bool {
        self.active_tes().contains(&te)
    }

    /// Find the run of consecutive positions owned by `te`.
    ///
    /// The run starts at the first position (scanning from 0) owned by `te`
    /// whose circular predecessor is not, so a run straddling the end of the
    /// ring is measured whole. Returns `None` if `te` owns no position.
    fn locate_run(&self, te: TeId) -> Option<TeRun> {
        let len = self.len();
        let mut prev_owned = self.sites().last().is_some_and(|s| s.is_owned_by(te));
        let mut any_owned = false;
        let mut start = None;

        for (pos, site) in self.sites().enumerate() {
            let owned = site.is_owned_by(te);
            any_owned |= owned;
            if owned && !prev_owned {
                start = Some(pos);
                break;
            }
            prev_owned = owned;
        }

        // Every owned position has an owned predecessor only when `te` owns the whole ring
        let start = match start {
            Some(start) => start,
            None if any_owned => 0,
            None => return None,
        };

        let run_len = self
            .sites()
            .chain(self.sites())
            .skip(start)
            .take(len)
            .take_while(|s| s.is_owned_by(te))
            .count();

        Some(TeRun { start, len: run_len })
    }

    /// Copy active TE `te` to `offset` positions from the start of its run.
    ///
    /// The copy spans the TE's current run length and wraps around the ring in
    /// either direction. Returns `Ok(None)` without touching the genome if `te`
    /// is not active.
    fn copy_te(&mut self, te: TeId, offset: i64) -> Result<Option<TeId>> {
        if !self.is_active(te) {
            debug!("copy of inactive TE {} skipped", te);
            return Ok(None);
        }
        let Some(run) = self.locate_run(te) else {
            return Ok(None);
        };

        let target = circular_position(run.start, offset, self.len());
        debug!(
            "copying TE {} (start {}, run {}) by {} to position {}",
            te, run.start, run.len, offset, target
        );
        self.insert_te(target, run.len).map(Some)
    }

    /// One character per position from position 0: `-` empty, `A` active, `x` disabled
    fn render(&self) -> String {
        self.sites().map(|s| s.occupancy.symbol()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_position_wraps_both_ways() {
        assert_eq!(circular_position(5, 3, 20), 8);
        assert_eq!(circular_position(18, 5, 20), 3);
        assert_eq!(circular_position(2, -5, 20), 17);
        assert_eq!(circular_position(0, -40, 20), 0);
        assert_eq!(circular_position(7, 0, 1), 0);
    }

    #[test]
    fn test_insert_length_bounds() {
        assert!(check_insert_length::<Site>(10, 1).is_ok());
        assert!(matches!(
            check_insert_length::<Site>(10, 0),
            Err(GenomeError::InvalidLength(0))
        ));
        assert!(check_insert_length::<Site>(1, usize::MAX).is_err());

        // Fits in usize but not in a vector of sites
        let too_many = isize::MAX as usize / mem::size_of::<Site>();
        assert!(check_insert_length::<Site>(0, too_many).is_ok());
        assert!(check_insert_length::<Site>(1, too_many).is_err());
    }

    #[test]
    fn test_circular_position_extreme_offsets() {
        assert_eq!(circular_position(0, i64::MIN, 7), (i64::MIN as i128).rem_euclid(7) as usize);
        assert_eq!(
            circular_position(usize::MAX, i64::MAX, 10),
            ((usize::MAX as i128) + (i64::MAX as i128)).rem_euclid(10) as usize
        );
    }
}
