/*!
 * Shell Transcript Tests
 * Full command sessions checked against their exact output
 */

use pretty_assertions::assert_eq;
use segment_memory_sim::{Shell, SimConfig};

fn run(input: &str, config: SimConfig) -> String {
    let mut shell = Shell::new(Vec::new(), config);
    shell.run(input.as_bytes()).unwrap();
    String::from_utf8(shell.into_inner()).unwrap()
}

fn placed(size: usize, time: u64, location: usize, departs: u64) -> String {
    format!(
        "Segment of size {:4} placed at time {:4} at location {:4}, departs at {:4}\n",
        size, time, location, departs
    )
}

#[test]
fn test_placement_line_format() {
    assert_eq!(
        placed(20, 1, 0, 11),
        "Segment of size   20 placed at time    1 at location    0, departs at   11\n"
    );
}

#[test]
fn test_three_segments_then_print() {
    let out = run("C 100\nA 20 10\nA 50 5\nA 70 20\nP\nE\n", SimConfig::default());

    let expected = [
        placed(20, 1, 0, 11),
        placed(50, 2, 20, 7),
        placed(70, 7, 20, 27),
        "0\t20\t11\n20\t70\t27\n".to_string(),
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn test_long_session() {
    let config = SimConfig {
        operator_name: "Ada Lovelace".to_string(),
        ..SimConfig::default()
    };
    let input = "N\nC 100\n\
                 A 20 10\nA 50 5\nA 70 20\nA 100 10\nA 25 5\nA 50 10\n\
                 A 25 5\nA 100 10\nA 50 10\nA 25 10\nA 100 10\nA 100 10\n\
                 P\nE\n";

    let expected = [
        "Ada Lovelace\n".to_string(),
        placed(20, 1, 0, 11),
        placed(50, 2, 20, 7),
        placed(70, 7, 20, 27),
        placed(100, 27, 0, 37),
        placed(25, 37, 0, 42),
        placed(50, 38, 25, 48),
        placed(25, 39, 75, 44),
        placed(100, 48, 0, 58),
        placed(50, 58, 0, 68),
        placed(25, 59, 50, 69),
        placed(100, 69, 0, 79),
        placed(100, 79, 0, 89),
        "0\t100\t89\n".to_string(),
    ]
    .concat();
    assert_eq!(run(input, config), expected);
}

#[test]
fn test_create_resets_clock() {
    let out = run("C 10\nA 10 5\nC 10\nA 4 1\nP\n", SimConfig::default());
    assert_eq!(
        out,
        [placed(10, 1, 0, 6), placed(4, 1, 0, 2), "0\t4\t2\n".to_string()].concat()
    );
}

#[test]
fn test_oversized_segment_is_skipped() {
    let out = run("C 10\nA 11 1\nA 3 2\nP\n", SimConfig::default());
    assert_eq!(out, [placed(3, 1, 0, 3), "0\t3\t3\n".to_string()].concat());
}

#[test]
fn test_seeded_random_walk_is_reproducible() {
    let config = SimConfig {
        seed: Some(7),
        ..SimConfig::default()
    };
    let first = run("R 100 5 25 20 50\n", config.clone());
    let second = run("R 100 5 25 20 50\n", config);
    assert_eq!(first, second);

    let lines: Vec<&str> = first.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Number of placements made =     50");

    let mean: f64 = lines[1]
        .strip_prefix("Mean occupancy of memory = ")
        .unwrap()
        .trim()
        .parse()
        .unwrap();
    assert!(mean > 0.0);
}

#[test]
fn test_random_walk_leaves_region_for_print() {
    let config = SimConfig {
        seed: Some(11),
        ..SimConfig::default()
    };
    let out = run("R 40 1 10 5 20\nP\n", config);
    let segments = out.lines().skip(2).count();
    assert!(segments >= 1);
    assert!(out.lines().skip(2).all(|line| line.split('\t').count() == 3));
}
