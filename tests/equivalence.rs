use rand::rngs::StdRng;
use rand::SeedableRng;
use tegenome::config::SimulationConfig;
use tegenome::genome::ops::{self, Operation};
use tegenome::genome::{ArrayGenome, Genome, LinkedGenome};

/// Apply `script` to both backends, comparing them after every step
fn assert_equivalent(initial_size: usize, script: &[Operation]) {
    let mut array = ArrayGenome::new(initial_size).unwrap();
    let mut linked = LinkedGenome::new(initial_size).unwrap();

    for (step, &op) in script.iter().enumerate() {
        let a = ops::apply(&mut array, op).unwrap();
        let l = ops::apply(&mut linked, op).unwrap();

        assert_eq!(a, l, "step {}: {:?} returned different outcomes", step, op);
        assert_eq!(array.render(), linked.render(), "step {}: {:?} diverged", step, op);
        assert_eq!(array.active_tes(), linked.active_tes(), "step {}: {:?}", step, op);
        assert_eq!(array.len(), linked.len(), "step {}: {:?}", step, op);
    }
}

#[test]
fn test_handwritten_script_matches() {
    let script = [
        Operation::Insert { pos: 5, length: 3 },
        Operation::Insert { pos: 5, length: 2 },
        Operation::Copy { te: 2, offset: -9 },
        Operation::Copy { te: 1, offset: 4 },
        Operation::Insert { pos: 0, length: 4 },
        Operation::Copy { te: 4, offset: 31 },
        Operation::Disable { te: 3 },
        Operation::Copy { te: 3, offset: 1 },
        Operation::Insert { pos: 1000, length: 1 },
        Operation::Copy { te: 5, offset: -1000 },
    ];
    assert_equivalent(20, &script);
}

#[test]
fn test_copies_at_the_ring_boundary_match() {
    // Copies that land right before position 0 or at the last position
    let script = [
        Operation::Insert { pos: 7, length: 1 },
        Operation::Copy { te: 1, offset: 1 },
        Operation::Copy { te: 1, offset: -7 },
        Operation::Copy { te: 2, offset: -1 },
        Operation::Copy { te: 3, offset: -1 },
    ];
    assert_equivalent(8, &script);
}

#[test]
fn test_random_scripts_match() {
    let config = SimulationConfig {
        seed: None,
        steps: 200,
        max_te_length: 6,
        max_offset: 60,
    };

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let initial_size = 1 + (seed as usize % 25);
        let script = ops::random_script(&mut rng, initial_size, &config).unwrap();
        assert_equivalent(initial_size, &script);
    }
}

#[test]
fn test_single_position_genome_matches() {
    let config = SimulationConfig {
        seed: None,
        steps: 60,
        max_te_length: 3,
        max_offset: 5,
    };
    let mut rng = StdRng::seed_from_u64(1234);
    let script = ops::random_script(&mut rng, 1, &config).unwrap();
    assert_equivalent(1, &script);
}

#[test]
fn test_boxed_backends_match() {
    use tegenome::config::GenomeBackend;

    let mut array = GenomeBackend::Array.build(15).unwrap();
    let mut linked = GenomeBackend::Linked.build(15).unwrap();
    let script = [
        Operation::Insert { pos: 14, length: 5 },
        Operation::Copy { te: 1, offset: 3 },
        Operation::Insert { pos: 15, length: 2 },
    ];

    let a = ops::replay(array.as_mut(), &script).unwrap();
    let l = ops::replay(linked.as_mut(), &script).unwrap();
    assert_eq!(a, l);
    assert_eq!(array.render(), linked.render());
    assert_eq!(array.active_tes(), linked.active_tes());
}
