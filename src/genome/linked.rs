use super::{check_insert_length, Genome, TeRegistry};
use crate::error::{GenomeError, Result};
use crate::types::{Site, TeId};
use log::{debug, trace};
use std::fmt;

/// Handle to a slot in the `LinkedGenome` arena.
///
/// A handle says where a slot is stored, not where it sits in the ring: slot
/// numbers follow allocation order and never take part in position arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

impl SlotId {
    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Slot {
    site: Site,
    next: SlotId,
}

/// Genome stored as an arena of slots linked into a ring.
///
/// `head` is logical position 0 and `tail` is the slot just before it. Slots
/// are only ever appended, so the arena size is the genome length. Locating
/// an insertion point costs O(pos); the splice itself is O(1).
#[derive(Debug, Clone)]
pub struct LinkedGenome {
    slots: Vec<Slot>,
    head: SlotId,
    tail: SlotId,
    registry: TeRegistry,
}

impl LinkedGenome {
    /// Create a genome of `size` empty positions
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GenomeError::EmptyGenome);
        }
        let slots = (0..size)
            .map(|i| Slot {
                site: Site::EMPTY,
                next: SlotId((i + 1) % size),
            })
            .collect();

        Ok(Self {
            slots,
            head: SlotId(0),
            tail: SlotId(size - 1),
            registry: TeRegistry::new(),
        })
    }

    /// Slot handles in ring order, starting at logical position 0
    pub fn ring(&self) -> Ring<'_> {
        Ring {
            genome: self,
            cursor: self.head,
            remaining: self.slots.len(),
        }
    }

    /// Handle of the slot at logical position `pos mod len()`
    pub fn slot_at(&self, pos: usize) -> SlotId {
        self.walk(pos % self.slots.len())
    }

    /// Follow `next` `steps` times from the head
    fn walk(&self, steps: usize) -> SlotId {
        let mut cursor = self.head;
        for _ in 0..steps {
            cursor = self.slot(cursor).next;
        }
        trace!("walked {} steps to slot {:?}", steps, cursor);
        cursor
    }

    fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id.index()]
    }

    fn slot_mut(&mut self, id: SlotId) -> &mut Slot {
        &mut self.slots[id.index()]
    }
}

impl Genome for LinkedGenome {
    fn insert_te(&mut self, pos: usize, length: usize) -> Result<TeId> {
        check_insert_length::<Slot>(self.slots.len(), length)?;

        let index = pos % self.slots.len();
        let predecessor = if index == 0 {
            self.tail
        } else {
            self.walk(index - 1)
        };
        let displaced = self.slot(predecessor).next;

        if let Some(owner) = self.slot(displaced).site.active_owner() {
            debug!("insertion at {} collides with active TE {}", index, owner);
            self.disable_te(owner);
        }

        let id = self.registry.issue();
        let first = SlotId(self.slots.len());
        for k in 0..length {
            let next = if k + 1 < length {
                SlotId(first.index() + k + 1)
            } else {
                displaced
            };
            self.slots.push(Slot {
                site: Site::active(id),
                next,
            });
        }

        self.slot_mut(predecessor).next = first;
        // The tail never moves: new slots always land before an existing position
        if index == 0 {
            self.head = first;
        }

        debug!(
            "inserted TE {} at {} (length {}), genome now {}",
            id,
            index,
            length,
            self.slots.len()
        );
        Ok(id)
    }

    fn disable_te(&mut self, te: TeId) {
        if !self.registry.retire(te) {
            return;
        }

        // Ring order is irrelevant here, so scan the arena directly
        let mut flipped = 0;
        for slot in &mut self.slots {
            if slot.site.disable_if_owned_by(te) {
                flipped += 1;
            }
        }
        debug!("disabled TE {} ({} positions)", te, flipped);
    }

    fn active_tes(&self) -> &[TeId] {
        self.registry.active()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn sites(&self) -> Box<dyn Iterator<Item = &Site> + '_> {
        Box::new(self.ring().map(move |id| &self.slot(id).site))
    }
}

impl fmt::Display for LinkedGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator over slot handles in ring order, one full turn
pub struct Ring<'a> {
    genome: &'a LinkedGenome,
    cursor: SlotId,
    remaining: usize,
}

impl Iterator for Ring<'_> {
    type Item = SlotId;

    fn next(&mut self) -> Option<SlotId> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.cursor;
        self.cursor = self.genome.slot(current).next;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Ring<'_> {}
