/*!
 * Property Tests
 * Conservation, disjointness, ordering and coalesce laws over random workloads
 */

use mmu_sim::memory::{coalesce, Block, BlockList, MemoryManager, PlacementPolicy};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Allocate(u32, usize),
    Deallocate(u32),
    Coalesce,
}

fn policy_strategy() -> impl Strategy<Value = PlacementPolicy> {
    prop_oneof![
        Just(PlacementPolicy::Fifo),
        Just(PlacementPolicy::BestFit),
        Just(PlacementPolicy::WorstFit),
    ]
}

fn op_strategy(with_coalesce: bool) -> BoxedStrategy<Op> {
    let alloc = (1u32..8, 1usize..120).prop_map(|(pid, size)| Op::Allocate(pid, size));
    let dealloc = (1u32..8).prop_map(Op::Deallocate);
    if with_coalesce {
        prop_oneof![4 => alloc, 3 => dealloc, 1 => Just(Op::Coalesce)].boxed()
    } else {
        prop_oneof![alloc, dealloc].boxed()
    }
}

/// Disjoint free blocks in shuffled order, some of them address-adjacent
fn free_list_strategy() -> impl Strategy<Value = BlockList> {
    prop::collection::vec((1usize..20, 0usize..3), 0..16)
        .prop_map(|spans| {
            let mut next = 0;
            let mut blocks = Vec::with_capacity(spans.len());
            for (size, gap) in spans {
                let start = next + gap;
                blocks.push(Block::free(start, start + size - 1));
                next = start + size;
            }
            blocks
        })
        .prop_shuffle()
        .prop_map(|blocks| blocks.into_iter().collect::<BlockList>())
}

fn apply(mem: &mut MemoryManager, op: Op, policy: PlacementPolicy) {
    match op {
        Op::Allocate(pid, size) => {
            let _ = mem.allocate(pid, size, policy);
        }
        Op::Deallocate(pid) => {
            let _ = mem.deallocate(pid, policy);
        }
        Op::Coalesce => {
            mem.coalesce();
        }
    }
}

proptest! {
    #[test]
    fn prop_lists_always_tile_the_partition(
        partition in 1usize..400,
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(true), 0..60),
    ) {
        let mut mem = MemoryManager::new(partition).unwrap();
        for op in ops {
            apply(&mut mem, op, policy);
            prop_assert_eq!(mem.free_list().total_size() + mem.alloc_list().total_size(), partition);
            prop_assert!(mem.check_invariants().is_ok(), "{:?}", mem.check_invariants());
        }
    }

    #[test]
    fn prop_free_list_keeps_policy_order(
        partition in 1usize..400,
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(false), 0..60),
    ) {
        let mut mem = MemoryManager::new(partition).unwrap();
        for op in ops {
            apply(&mut mem, op, policy);
            prop_assert!(policy.is_ordered(mem.free_list()));
        }
    }

    #[test]
    fn prop_failed_operations_do_not_mutate(
        partition in 1usize..200,
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(true), 0..40),
        pid in 1u32..8,
        size in 1usize..300,
    ) {
        let mut mem = MemoryManager::new(partition).unwrap();
        for op in ops {
            apply(&mut mem, op, policy);
        }

        let before = mem.clone();
        if mem.allocate(pid, size, policy).is_err() {
            prop_assert_eq!(&mem, &before);
        }

        let before = mem.clone();
        if mem.deallocate(pid, policy).is_err() {
            prop_assert_eq!(&mem, &before);
        }
    }

    #[test]
    fn prop_coalesce_is_idempotent(list in free_list_strategy()) {
        let once = coalesce(list);
        let twice = coalesce(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_coalesce_output_is_minimal_and_sorted(list in free_list_strategy()) {
        let total = list.total_size();
        let merged = coalesce(list);
        let blocks: Vec<&Block> = merged.iter().collect();

        prop_assert_eq!(merged.total_size(), total);
        for pair in blocks.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
            prop_assert!(!pair[0].is_adjacent_to(pair[1]));
        }
    }
}
