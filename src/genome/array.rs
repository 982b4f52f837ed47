use super::{check_insert_length, Genome, TeRegistry};
use crate::error::{GenomeError, Result};
use crate::types::{Site, TeId};
use log::debug;
use std::fmt;
use std::iter;

/// Genome stored as one vector of sites indexed by circular position.
///
/// Insertion splices the vector, so every downstream position shifts: O(N).
#[derive(Debug, Clone)]
pub struct ArrayGenome {
    sites: Vec<Site>,
    registry: TeRegistry,
}

impl ArrayGenome {
    /// Create a genome of `size` empty positions
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GenomeError::EmptyGenome);
        }
        Ok(Self {
            sites: vec![Site::EMPTY; size],
            registry: TeRegistry::new(),
        })
    }

    /// Site at circular position `pos mod len()`
    pub fn site(&self, pos: usize) -> &Site {
        &self.sites[pos % self.sites.len()]
    }
}

impl Genome for ArrayGenome {
    fn insert_te(&mut self, pos: usize, length: usize) -> Result<TeId> {
        check_insert_length::<Site>(self.sites.len(), length)?;

        let index = pos % self.sites.len();
        if let Some(owner) = self.sites[index].active_owner() {
            debug!("insertion at {} collides with active TE {}", index, owner);
            self.disable_te(owner);
        }

        let id = self.registry.issue();
        self.sites.splice(index..index, iter::repeat(Site::active(id)).take(length));

        debug!(
            "inserted TE {} at {} (length {}), genome now {}",
            id,
            index,
            length,
            self.sites.len()
        );
        Ok(id)
    }

    fn disable_te(&mut self, te: TeId) {
        if !self.registry.retire(te) {
            return;
        }

        let mut flipped = 0;
        for site in &mut self.sites {
            if site.disable_if_owned_by(te) {
                flipped += 1;
            }
        }
        debug!("disabled TE {} ({} positions)", te, flipped);
    }

    fn active_tes(&self) -> &[TeId] {
        self.registry.active()
    }

    fn len(&self) -> usize {
        self.sites.len()
    }

    fn sites(&self) -> Box<dyn Iterator<Item = &Site> + '_> {
        Box::new(self.sites.iter())
    }
}

impl fmt::Display for ArrayGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
