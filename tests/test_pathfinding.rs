mod common;

use cave_explorer::{GoalApproach, Grid, PathFinder, Position};
use common::{finder, follow_path};

#[test]
fn test_default_cave() {
    let finder = PathFinder::default_cave();
    assert!(finder.solve(), "default cave should be solvable");

    let path = finder.get_path();
    assert_eq!(path, "eess");

    // The recorded moves end one hop short of the pool at (3,2).
    assert_eq!(follow_path(&finder, &path), Some(Position::new(3, 1)));
}

#[test]
fn test_unreachable_goal() {
    let finder = finder(&["RRRRRR", "RS..RR", "RRR.RR", "RRRRMR"]);
    assert!(!finder.solve());
    assert_eq!(finder.get_path(), "");
}

#[test]
fn test_reachable_through_long_detour() {
    let finder = finder(&["S.........", "RRRRRRRRR.", "..........", ".RRRRRRRRR", ".........M"]);
    assert!(finder.solve());
    let path = finder.get_path();
    assert!(!path.is_empty());
    let end = follow_path(&finder, &path).unwrap();
    assert_eq!(end, Position::new(4, 8));
}

#[test]
fn test_walls_elsewhere_do_not_matter() {
    let open = finder(&["S.M", "...", "..."]);
    let walled = finder(&["S.M", "RRR", "R.R"]);
    assert_eq!(open.solve(), walled.solve());
    assert!(walled.solve());
}

/// Reachability says yes, but the only entry onto the pool is directly from
/// the start, so no move is ever recorded.
#[test]
fn test_goal_adjacent_to_start_gives_empty_path() {
    let finder = finder(&["SM"]);
    assert!(finder.solve());
    assert_eq!(finder.get_path(), "");
}

#[test]
fn test_single_floor_between_start_and_goal() {
    let finder = finder(&["S.M"]);
    assert!(finder.solve());
    assert_eq!(finder.get_path(), "n");
}

#[test]
fn test_direction_letters() {
    // Goal below: down is 's'
    assert_eq!(finder(&["S", ".", ".", "M"]).get_path(), "ss");
    // Goal above: up is 'w'
    assert_eq!(finder(&["M", ".", ".", "S"]).get_path(), "ww");
    // Goal to the left: left is 'e'
    assert_eq!(finder(&["M..S"]).get_path(), "ee");
    // Goal to the right: right is 'n'
    assert_eq!(finder(&["S..M"]).get_path(), "nn");
}

#[test]
fn test_strict_goal_never_records_a_path() {
    let layouts: [&[&str]; 3] = [&["S.M"], &["S..M"], &["SM"]];
    for layout in layouts {
        let finder = finder(layout).with_goal_approach(GoalApproach::Enter);
        assert!(finder.solve());
        assert_eq!(finder.get_path(), "", "layout {:?}", layout);
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let finder = finder(&[
        "RRRRRRR", "RS....R", "RRRRR.R", "R.....R", "R.RRRRR", "R....MR", "RRRRRRR",
    ]);
    let render = finder.render();
    let first = (finder.solve(), finder.get_path());
    for _ in 0..5 {
        assert_eq!((finder.solve(), finder.get_path()), first);
    }
    assert_eq!(finder.render(), render);
}

#[test]
fn test_queries_from_several_threads() {
    let finder = PathFinder::default_cave();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (finder.solve(), finder.get_path())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), (true, "eess".to_string()));
        }
    });
}

#[test]
fn test_is_valid_for_small_grids() {
    for (rows, cols) in [(1, 1), (1, 4), (3, 1), (5, 6)] {
        let layout: Vec<String> = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| if r == 0 && c == 0 { 'S' } else { '.' })
                    .collect()
            })
            .collect();
        let finder = PathFinder::new(Grid::from_rows(layout.as_slice()).unwrap()).unwrap();
        assert!(finder.is_valid(0, 0));
        assert!(finder.is_valid(rows - 1, cols - 1));
        assert!(!finder.is_valid(-1, 0));
        assert!(!finder.is_valid(0, -1));
        assert!(!finder.is_valid(rows, 0));
        assert!(!finder.is_valid(0, cols));
        assert!(!finder.is_valid(rows, cols));
    }
}
