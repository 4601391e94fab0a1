/*!
 * Property Tests
 * Layout invariants under random placement and reclamation sequences
 */

use proptest::prelude::*;
use segment_memory_sim::memory::{IntervalKind, NextFitAllocator};

#[derive(Debug, Clone)]
enum Op {
    Place { size: usize, lifetime: u64, wait: u64 },
    Reclaim { wait: u64 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (1usize..=40, 1u64..=15, 0u64..=2)
            .prop_map(|(size, lifetime, wait)| Op::Place { size, lifetime, wait }),
        1 => (0u64..=6).prop_map(|wait| Op::Reclaim { wait }),
    ]
}

fn intervals(allocator: &NextFitAllocator) -> Vec<(usize, usize, IntervalKind)> {
    allocator
        .layout()
        .iter()
        .map(|(_, node)| (node.location, node.size, node.kind))
        .collect()
}

proptest! {
    /// The layout stays a gap-free partition with no neighbouring holes
    #[test]
    fn layout_stays_partitioned(region in 1usize..=120, ops in prop::collection::vec(op(), 1..80)) {
        let mut allocator = NextFitAllocator::new(region).unwrap();
        let mut now = 0u64;

        for op in ops {
            match op {
                Op::Place { size, lifetime, wait } => {
                    now += wait;
                    allocator.place(size, now, lifetime).unwrap();
                }
                Op::Reclaim { wait } => {
                    now += wait;
                    allocator.reclaim_expired(now).unwrap();
                }
            }
            prop_assert!(allocator.layout().validate().is_ok());
            prop_assert!(allocator.layout().contains(allocator.cursor()));
            prop_assert_eq!(allocator.stats().occupied + allocator.stats().free, region);
        }
    }

    /// Placement accounts for exactly the requested size, or changes nothing
    #[test]
    fn placement_conserves_space(region in 1usize..=120, ops in prop::collection::vec(op(), 1..80)) {
        let mut allocator = NextFitAllocator::new(region).unwrap();
        let mut now = 0u64;

        for op in ops {
            let Op::Place { size, lifetime, wait } = op else {
                continue;
            };
            now += wait;
            let before = intervals(&allocator);
            let occupied = allocator.occupied();
            let cursor = allocator.cursor();

            if allocator.place(size, now, lifetime).unwrap() {
                prop_assert_eq!(allocator.occupied(), occupied + size);
                let placed = allocator.last_placement().unwrap();
                prop_assert_eq!(placed.size, size);
                prop_assert_eq!(placed.expiry, now + lifetime);
            } else {
                prop_assert_eq!(intervals(&allocator), before);
                prop_assert_eq!(allocator.cursor(), cursor);
            }
        }
    }

    /// Reclamation frees exactly the expired segments, and a repeat frees nothing
    #[test]
    fn reclaim_frees_expired_and_is_idempotent(
        region in 1usize..=120,
        ops in prop::collection::vec(op(), 1..80),
    ) {
        let mut allocator = NextFitAllocator::new(region).unwrap();
        let mut now = 0u64;

        for op in ops {
            match op {
                Op::Place { size, lifetime, wait } => {
                    now += wait;
                    allocator.place(size, now, lifetime).unwrap();
                }
                Op::Reclaim { wait } => {
                    now += wait;
                    let expired: usize = allocator
                        .snapshot()
                        .iter()
                        .filter(|segment| segment.expiry <= now)
                        .map(|segment| segment.size)
                        .sum();
                    let occupied = allocator.occupied();

                    prop_assert_eq!(allocator.reclaim_expired(now).unwrap(), expired);
                    prop_assert_eq!(allocator.occupied(), occupied - expired);
                    prop_assert!(allocator.snapshot().iter().all(|segment| segment.expiry > now));

                    let settled = intervals(&allocator);
                    prop_assert_eq!(allocator.reclaim_expired(now).unwrap(), 0);
                    prop_assert_eq!(intervals(&allocator), settled);
                }
            }
        }
    }
}
