use crate::types::TeId;

/// Id issuing and the insertion-ordered set of active TEs.
///
/// Membership here is the only authority on whether a TE is active. An id that
/// has been retired is never issued or re-activated again.
#[derive(Debug, Clone, Default)]
pub struct TeRegistry {
    last_issued: TeId,
    active: Vec<TeId>,
}

impl TeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next id and mark it active
    pub fn issue(&mut self) -> TeId {
        self.last_issued += 1;
        self.active.push(self.last_issued);
        self.last_issued
    }

    pub fn is_active(&self, te: TeId) -> bool {
        self.active.contains(&te)
    }

    /// Remove `te` from the active set. Returns false if it was not active.
    pub fn retire(&mut self, te: TeId) -> bool {
        match self.active.iter().position(|&id| id == te) {
            Some(index) => {
                self.active.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> &[TeId] {
        &self.active
    }

    /// Highest id issued so far, 0 before the first insertion
    pub fn last_issued(&self) -> TeId {
        self.last_issued
    }
}
