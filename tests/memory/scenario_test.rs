/*!
 * Partition Scenario Tests
 * Step-by-step list states for a FIFO partition of 100 addresses
 */

use mmu_sim::memory::{
    Block, BlockView, MemoryError, MemoryInfo, MemoryManager, MemoryPressure, PlacementPolicy,
};
use pretty_assertions::assert_eq;

fn views(iter: impl Iterator<Item = BlockView>) -> Vec<(usize, usize, u32)> {
    iter.map(|b| (b.start, b.end, b.owner)).collect()
}

#[test]
fn test_fifo_sequence() {
    let policy = PlacementPolicy::Fifo;
    let mut mem = MemoryManager::new(100).expect("partition");

    mem.allocate(1, 30, policy).expect("allocate pid 1");
    assert_eq!(views(mem.allocated_blocks()), vec![(0, 29, 1)]);
    assert_eq!(views(mem.free_blocks()), vec![(30, 99, 0)]);

    mem.allocate(2, 20, policy).expect("allocate pid 2");
    assert_eq!(views(mem.allocated_blocks()), vec![(0, 29, 1), (30, 49, 2)]);
    assert_eq!(views(mem.free_blocks()), vec![(50, 99, 0)]);

    // FIFO appends the released block to the back
    mem.deallocate(1, policy).expect("deallocate pid 1");
    assert_eq!(views(mem.allocated_blocks()), vec![(30, 49, 2)]);
    assert_eq!(views(mem.free_blocks()), vec![(50, 99, 0), (0, 29, 0)]);

    // Address order, but pid 2 still separates the two free blocks
    let merges = mem.coalesce();
    assert_eq!(merges, 0);
    assert_eq!(views(mem.free_blocks()), vec![(0, 29, 0), (50, 99, 0)]);
    assert_eq!(views(mem.allocated_blocks()), vec![(30, 49, 2)]);
    assert_eq!(mem.block_of(2), Some(&Block::owned(2, 30, 49)));
    assert_eq!(mem.block_of(1), None);

    mem.deallocate(2, policy).expect("deallocate pid 2");
    assert_eq!(mem.coalesce(), 2);
    assert_eq!(views(mem.free_blocks()), vec![(0, 99, 0)]);
    mem.check_invariants().expect("invariants");
}

#[test]
fn test_oversized_allocation_fails_without_mutation() {
    let mut mem = MemoryManager::new(100).expect("partition");
    let before = mem.clone();

    let result = mem.allocate(9, 101, PlacementPolicy::Fifo);
    match result {
        Err(MemoryError::AllocationFailed { pid, size }) => {
            assert_eq!(pid, 9);
            assert_eq!(size, 101);
        }
        other => panic!("Expected AllocationFailed, got {:?}", other),
    }
    assert_eq!(mem, before);
}

#[test]
fn test_deallocation_on_fresh_session_fails() {
    let mut mem = MemoryManager::new(100).expect("partition");
    let before = mem.clone();

    let result = mem.deallocate(9, PlacementPolicy::Fifo);
    assert_eq!(result, Err(MemoryError::DeallocationNotFound { pid: 9 }));
    assert_eq!(mem, before);
}

#[test]
fn test_zero_partition_is_rejected() {
    assert_eq!(MemoryManager::new(0), Err(MemoryError::InvalidPartition(0)));
}

#[test]
fn test_fragmented_space_needs_coalesce() {
    let policy = PlacementPolicy::Fifo;
    let mut mem = MemoryManager::new(60).expect("partition");
    for pid in 1..=3 {
        mem.allocate(pid, 20, policy).expect("allocate");
    }
    mem.deallocate(2, policy).expect("deallocate pid 2");
    mem.deallocate(3, policy).expect("deallocate pid 3");

    // 40 free addresses exist, split across two blocks
    assert!(mem.allocate(4, 40, policy).is_err());

    assert_eq!(mem.coalesce(), 1);
    let block = mem.allocate(4, 40, policy).expect("allocate after coalesce");
    assert_eq!((block.start, block.end), (20, 59));
    assert!(mem.free_list().is_empty());
    mem.check_invariants().expect("invariants");
}

#[test]
fn test_memory_info_reports_pressure() {
    let mut mem = MemoryManager::new(100).expect("partition");
    assert_eq!(MemoryInfo::partition_size(&mem), 100);
    assert_eq!(mem.pressure(), MemoryPressure::Low);

    mem.allocate(1, 85, PlacementPolicy::BestFit).expect("allocate");
    assert_eq!(mem.pressure(), MemoryPressure::High);

    let stats = MemoryInfo::stats(&mem);
    assert_eq!(stats.largest_free_block, 15);
    assert_eq!(stats.external_fragmentation, 0.0);
}
