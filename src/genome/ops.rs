//! Operation scripts: genome mutations as plain values.
//!
//! Scripts can be replayed against any `Genome`, which is how the two storage
//! strategies are checked against each other, and generated at random from a
//! seeded RNG for simulation runs.

use super::Genome;
use crate::config::traits::ConfigSection;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::types::TeId;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single mutation applied to a genome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Insert { pos: usize, length: usize },
    Copy { te: TeId, offset: i64 },
    Disable { te: TeId },
}

/// Result of applying an `Operation`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Inserted(TeId),
    /// `None` when the source TE was not active
    Copied(Option<TeId>),
    Disabled,
}

pub fn apply<G: Genome + ?Sized>(genome: &mut G, op: Operation) -> Result<Outcome> {
    let outcome = match op {
        Operation::Insert { pos, length } => Outcome::Inserted(genome.insert_te(pos, length)?),
        Operation::Copy { te, offset } => Outcome::Copied(genome.copy_te(te, offset)?),
        Operation::Disable { te } => {
            genome.disable_te(te);
            Outcome::Disabled
        }
    };
    debug!("{:?} -> {:?}", op, outcome);
    Ok(outcome)
}

/// Apply every operation in order, stopping at the first error
pub fn replay<G: Genome + ?Sized>(genome: &mut G, ops: &[Operation]) -> Result<Vec<Outcome>> {
    ops.iter().map(|&op| apply(genome, op)).collect()
}

/// Generate a random operation.
///
/// `issued` is an upper bound on the ids issued so far; TE ids are drawn from
/// `1..=issued + 1`, so scripts also exercise copies and disables of ids that
/// are disabled or were never issued. Fails if `config` does not validate.
pub fn random_operation<R: Rng>(
    rng: &mut R,
    issued: TeId,
    genome_len: usize,
    config: &SimulationConfig,
) -> Result<Operation> {
    config.validate()?;

    let te = rng.gen_range(1..=issued + 1);
    let roll = rng.gen::<f64>();

    let op = if issued == 0 || roll < 0.5 {
        Operation::Insert {
            // Deliberately past the end sometimes: positions wrap
            pos: rng.gen_range(0..genome_len.max(1).saturating_mul(2)),
            length: rng.gen_range(1..=config.max_te_length),
        }
    } else if roll < 0.8 {
        Operation::Copy {
            te,
            offset: rng.gen_range(-config.max_offset..=config.max_offset),
        }
    } else {
        Operation::Disable { te }
    };
    Ok(op)
}

/// Generate a script of `config.steps` operations for a genome that starts
/// with `initial_size` positions. Fails if `config` does not validate.
pub fn random_script<R: Rng>(
    rng: &mut R,
    initial_size: usize,
    config: &SimulationConfig,
) -> Result<Vec<Operation>> {
    config.validate()?;

    let mut issued: TeId = 0;
    let mut genome_len = initial_size;
    let mut script = Vec::with_capacity(config.steps);

    for _ in 0..config.steps {
        let op = random_operation(rng, issued, genome_len, config)?;
        match op {
            Operation::Insert { length, .. } => {
                issued += 1;
                genome_len = genome_len.saturating_add(length);
            }
            // A copy may or may not happen; over-counting keeps `issued` an upper bound
            Operation::Copy { .. } => issued += 1,
            Operation::Disable { .. } => {}
        }
        script.push(op);
    }
    Ok(script)
}
