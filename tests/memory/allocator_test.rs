/*!
 * Allocator Tests
 * Placement, reclamation and cursor scenarios through the public API
 */

use pretty_assertions::assert_eq;
use segment_memory_sim::memory::{
    Interval, MemoryError, NextFitAllocator, SegmentAllocator, SegmentInfo,
};
use segment_memory_sim::simulation::Simulator;

fn holes(allocator: &NextFitAllocator) -> Vec<(usize, usize)> {
    allocator
        .layout()
        .iter()
        .filter(|(_, node)| node.is_hole())
        .map(|(_, node)| (node.location, node.size))
        .collect()
}

#[test]
fn test_place_then_reclaim_restores_region() {
    let mut allocator = NextFitAllocator::new(100).unwrap();

    assert!(allocator.place(30, 1, 5).unwrap());
    assert_eq!(allocator.snapshot()[0].location, 0);
    assert!(!allocator.place(80, 1, 5).unwrap());

    allocator.reclaim_expired(6).unwrap();
    assert_eq!(holes(&allocator), vec![(0, 100)]);
    assert!(allocator.snapshot().is_empty());
}

#[test]
fn test_exactly_full_region_reclaims_to_one_hole() {
    let mut allocator = NextFitAllocator::new(10).unwrap();
    assert!(allocator.place(3, 1, 1).unwrap());
    assert!(allocator.place(3, 2, 1).unwrap());
    assert!(allocator.place(4, 3, 1).unwrap());
    assert_eq!(allocator.stats().free, 0);

    allocator.reclaim_expired(4).unwrap();
    assert_eq!(
        allocator.layout().head_node(),
        Some(&Interval::hole(0, 10, None))
    );

    // The cursor must still name a live node for the next placement to work
    assert!(allocator.place(10, 4, 1).unwrap());
    assert_eq!(
        allocator.snapshot(),
        vec![SegmentInfo {
            location: 0,
            size: 10,
            expiry: 5
        }]
    );
}

#[test]
fn test_wraparound_after_placing_near_end() {
    let mut allocator = NextFitAllocator::new(100).unwrap();
    assert!(allocator.place(20, 1, 2).unwrap());
    assert!(allocator.place(30, 1, 50).unwrap());
    assert!(allocator.place(45, 1, 50).unwrap());
    allocator.reclaim_expired(3).unwrap();

    // Free space: [0, 20) at the front and [95, 100) at the end
    assert_eq!(holes(&allocator), vec![(0, 20), (95, 5)]);
    assert!(allocator.place(15, 3, 1).unwrap());
    assert_eq!(allocator.last_placement().unwrap().location, 0);
}

#[test]
fn test_multiple_expired_neighbours_merge_in_one_pass() {
    let mut allocator = NextFitAllocator::new(60).unwrap();
    for lifetime in [100, 1, 1, 1, 100] {
        assert!(allocator.place(10, 1, lifetime).unwrap());
    }

    let reclaimed = allocator.reclaim_expired(2).unwrap();
    assert_eq!(reclaimed, 30);
    assert_eq!(holes(&allocator), vec![(10, 30), (50, 10)]);
    assert!(allocator.layout().validate().is_ok());
}

#[test]
fn test_failed_placement_is_side_effect_free() {
    let mut allocator = NextFitAllocator::new(50).unwrap();
    assert!(allocator.place(20, 1, 1).unwrap());
    assert!(allocator.place(20, 1, 9).unwrap());
    allocator.reclaim_expired(2).unwrap();

    let before: Vec<_> = allocator.layout().iter().map(|(id, n)| (id, n.clone())).collect();
    let cursor = allocator.cursor();

    assert!(!allocator.place(25, 2, 1).unwrap());
    let after: Vec<_> = allocator.layout().iter().map(|(id, n)| (id, n.clone())).collect();
    assert_eq!(after, before);
    assert_eq!(allocator.cursor(), cursor);
}

#[test]
fn test_invalid_arguments_do_not_mutate() {
    let mut allocator = NextFitAllocator::new(10).unwrap();
    assert!(allocator.place(5, 3, 1).unwrap());

    assert!(matches!(
        allocator.place(0, 3, 1),
        Err(MemoryError::InvalidArgument(_))
    ));
    assert!(matches!(
        allocator.reclaim_expired(2),
        Err(MemoryError::InvalidArgument(_))
    ));
    assert_eq!(allocator.snapshot().len(), 1);
    assert_eq!(allocator.clock(), 3);
}

#[test]
fn test_driver_generic_over_allocators() {
    fn drive<A: SegmentAllocator>(allocator: A) -> Vec<(u64, usize)> {
        let mut sim = Simulator::new(allocator);
        [(20, 10), (50, 5), (70, 20)]
            .into_iter()
            .map(|(size, lifetime)| {
                let record = sim.add_segment(size, lifetime).unwrap();
                (record.placed_at, record.location)
            })
            .collect()
    }

    let expected = vec![(1, 0), (2, 20), (7, 20)];
    assert_eq!(drive(NextFitAllocator::new(100).unwrap()), expected);
    assert_eq!(
        drive(segment_memory_sim::SharedAllocator::new(100).unwrap()),
        expected
    );
}
