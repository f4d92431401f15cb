/*!
 * Placement Policy Tests
 * Block selection and free-list order under FIFO, best-fit and worst-fit
 */

use mmu_sim::memory::{Block, MemoryManager, PlacementPolicy};
use pretty_assertions::assert_eq;

fn sized(list: &mmu_sim::BlockList) -> Vec<(usize, usize)> {
    list.iter().map(|b| (b.start, b.size())).collect()
}

/// Leave free holes of 30 @0, 10 @35 and 20 @50 (freed in that order)
fn fragmented(policy: PlacementPolicy) -> MemoryManager {
    let mut mem = MemoryManager::new(100).expect("partition");
    for (pid, size) in [(1, 30), (2, 5), (3, 10), (4, 5), (5, 20), (6, 30)] {
        mem.allocate(pid, size, policy).expect("setup allocation");
    }
    assert!(mem.free_list().is_empty());

    for pid in [1, 3, 5] {
        mem.deallocate(pid, policy).expect("setup deallocation");
    }
    mem
}

#[test]
fn test_fifo_takes_earliest_sufficient_block() {
    let policy = PlacementPolicy::Fifo;
    let mut mem = fragmented(policy);
    assert_eq!(sized(mem.free_list()), vec![(0, 30), (35, 10), (50, 20)]);

    let block = mem.allocate(7, 15, policy).unwrap();
    assert_eq!(block, Block::owned(7, 0, 14));
    assert_eq!(sized(mem.free_list()), vec![(35, 10), (50, 20), (15, 15)]);

    let block = mem.allocate(8, 12, policy).unwrap();
    assert_eq!(block, Block::owned(8, 50, 61));
    assert_eq!(sized(mem.free_list()), vec![(35, 10), (15, 15), (62, 8)]);
    mem.check_invariants().unwrap();
}

#[test]
fn test_best_fit_takes_smallest_sufficient_block() {
    let policy = PlacementPolicy::BestFit;
    let mut mem = fragmented(policy);
    assert_eq!(sized(mem.free_list()), vec![(35, 10), (50, 20), (0, 30)]);

    let block = mem.allocate(7, 15, policy).unwrap();
    assert_eq!(block, Block::owned(7, 50, 64));
    assert_eq!(sized(mem.free_list()), vec![(65, 5), (35, 10), (0, 30)]);
    assert!(policy.is_ordered(mem.free_list()));
    mem.check_invariants().unwrap();
}

#[test]
fn test_worst_fit_takes_largest_block() {
    let policy = PlacementPolicy::WorstFit;
    let mut mem = fragmented(policy);
    assert_eq!(sized(mem.free_list()), vec![(0, 30), (50, 20), (35, 10)]);

    let block = mem.allocate(7, 15, policy).unwrap();
    assert_eq!(block, Block::owned(7, 0, 14));
    assert_eq!(sized(mem.free_list()), vec![(50, 20), (15, 15), (35, 10)]);
    assert!(policy.is_ordered(mem.free_list()));
    mem.check_invariants().unwrap();
}

#[test]
fn test_alloc_list_stays_address_ordered() {
    for policy in PlacementPolicy::ALL {
        let mut mem = fragmented(policy);
        mem.allocate(7, 8, policy).unwrap();
        mem.allocate(8, 9, policy).unwrap();

        let starts: Vec<usize> = mem.alloc_list().iter().map(|b| b.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted, "alloc list out of order under {}", policy);
        mem.check_invariants().unwrap();
    }
}

#[test]
fn test_coalesce_discards_policy_order() {
    let policy = PlacementPolicy::WorstFit;
    let mut mem = fragmented(policy);
    mem.coalesce();
    assert_eq!(sized(mem.free_list()), vec![(0, 30), (35, 10), (50, 20)]);
}
