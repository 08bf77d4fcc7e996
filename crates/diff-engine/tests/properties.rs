//! Behavioral properties of the diff engine across its public API.

use diff_engine::{
    compute_diff, render_side_by_side, render_unified, DiffEngine, DiffOp, DiffOptions, OpTag,
    RowKind, RowView,
};
use pretty_assertions::assert_eq;

/// Input pairs covering empty texts, trailing newlines, reorders and repeats.
const PAIRS: &[(&str, &str)] = &[
    ("", ""),
    ("", "x"),
    ("x", ""),
    ("a\nb\nc", "a\nx\nc"),
    ("a\nb", "a\nb\nc"),
    ("a\nb\nc\n", "c\nb\na\n"),
    ("one\ntwo\nthree\nfour\nfive", "zero\none\nthree\nfour\nfour\nsix"),
    ("same\nsame\nsame", "same"),
    ("\n\n\n", "\n"),
    ("fn main() {\n    run();\n}\n", "fn main() {\n    setup();\n    run();\n}\n"),
];

fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

#[test]
fn identical_inputs_produce_only_equal_ops() {
    for (left, _) in PAIRS {
        let result = compute_diff(left, left);
        assert!(result.is_identical());
        assert!(result.ops().iter().all(|op| op.tag() == OpTag::Equal));

        let summary = result.summary();
        assert_eq!(summary.added, 0);
        assert_eq!(summary.removed, 0);
        assert_eq!(summary.unchanged, lines(left).len());
    }
}

#[test]
fn ops_reconstruct_both_inputs() {
    for (left, right) in PAIRS {
        let result = compute_diff(left, right);

        let old: Vec<String> = result
            .ops()
            .iter()
            .flat_map(|op| op.old_lines().to_vec())
            .collect();
        let new: Vec<String> = result
            .ops()
            .iter()
            .flat_map(|op| op.new_lines().to_vec())
            .collect();
        assert_eq!(old, lines(left), "left of {:?} -> {:?}", left, right);
        assert_eq!(new, lines(right), "right of {:?} -> {:?}", left, right);
    }
}

#[test]
fn ops_are_contiguous_and_ordered() {
    for (left, right) in PAIRS {
        let result = compute_diff(left, right);
        let (mut old_pos, mut new_pos) = (0, 0);
        for op in result.ops() {
            assert_eq!(op.old_range().start, old_pos);
            assert_eq!(op.new_range().start, new_pos);
            old_pos = op.old_range().end;
            new_pos = op.new_range().end;
        }
        assert_eq!(old_pos, result.left().len());
        assert_eq!(new_pos, result.right().len());
    }
}

#[test]
fn summary_matches_ops() {
    for (left, right) in PAIRS {
        let result = compute_diff(left, right);
        let summary = result.summary();

        let unchanged: usize = result
            .ops()
            .iter()
            .filter(|op| op.tag() == OpTag::Equal)
            .map(|op| op.old_range().len())
            .sum();
        let removed: usize = result
            .ops()
            .iter()
            .filter(|op| op.is_change())
            .map(|op| op.old_lines().len())
            .sum();
        let added: usize = result
            .ops()
            .iter()
            .filter(|op| op.is_change())
            .map(|op| op.new_lines().len())
            .sum();

        assert_eq!(summary.unchanged, unchanged);
        assert_eq!(summary.removed, removed);
        assert_eq!(summary.added, added);
        assert_eq!(summary.left_lines(), result.left().len());
        assert_eq!(summary.right_lines(), result.right().len());
    }
}

#[test]
fn counts_are_symmetric() {
    for (a, b) in PAIRS {
        let forward = compute_diff(a, b).summary();
        let backward = compute_diff(b, a).summary();
        assert_eq!(forward.added, backward.removed);
        assert_eq!(forward.removed, backward.added);
        assert_eq!(forward.unchanged, backward.unchanged);
    }
}

#[test]
fn empty_inputs() {
    let result = compute_diff("", "");
    assert!(result.is_identical());
    assert!(render_unified(&result, 3).is_empty());

    let result = compute_diff("", "x");
    assert_eq!(
        result.ops(),
        &[DiffOp::Insert {
            old_index: 0,
            new: 0..1,
            lines: vec!["x".to_string()],
        }]
    );

    let result = compute_diff("x", "");
    assert_eq!(
        result.ops(),
        &[DiffOp::Delete {
            old: 0..1,
            new_index: 0,
            lines: vec!["x".to_string()],
        }]
    );
}

#[test]
fn side_by_side_rows_cover_both_inputs() {
    for (left, right) in PAIRS {
        let result = compute_diff(left, right);
        let rows = render_side_by_side(&result);

        let left_rows: Vec<usize> = rows.iter().filter_map(|r| r.left_line_number).collect();
        let right_rows: Vec<usize> = rows.iter().filter_map(|r| r.right_line_number).collect();
        assert_eq!(left_rows, (1..=result.left().len()).collect::<Vec<_>>());
        assert_eq!(right_rows, (1..=result.right().len()).collect::<Vec<_>>());

        for row in &rows {
            match row.kind {
                RowKind::Added => assert!(!row.has_left() && row.has_right()),
                RowKind::Removed => assert!(row.has_left() && !row.has_right()),
                RowKind::Changed | RowKind::Unchanged => {
                    assert!(row.has_left() && row.has_right())
                }
            }
        }
    }
}

#[test]
fn replace_example_end_to_end() {
    let result = compute_diff("a\nb\nc", "a\nx\nc");

    let changes: Vec<&DiffOp> = result.ops().iter().filter(|op| op.is_change()).collect();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].tag(), OpTag::Replace);
    assert_eq!(changes[0].old_range().start + 1, 2);
    assert_eq!(changes[0].old_lines(), &["b".to_string()]);
    assert_eq!(changes[0].new_lines(), &["x".to_string()]);

    let unified = render_unified(&result, 1);
    assert_eq!(unified, "@@ -1,3 +1,3 @@\n a\n-b\n+x\n c\n");

    assert_eq!(
        render_side_by_side(&result),
        vec![
            RowView::unchanged((1, "a"), (1, "a")),
            RowView::changed((2, "b"), (2, "x")),
            RowView::unchanged((3, "c"), (3, "c")),
        ]
    );
}

#[test]
fn insert_example_end_to_end() {
    let result = compute_diff("a\nb", "a\nb\nc");

    let changes: Vec<&DiffOp> = result.ops().iter().filter(|op| op.is_change()).collect();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].tag(), OpTag::Insert);
    assert_eq!(changes[0].new_lines(), &["c".to_string()]);

    let rows = render_side_by_side(&result);
    let added = rows.iter().find(|r| r.kind == RowKind::Added).unwrap();
    assert_eq!(added.left_line_number, None);
    assert_eq!(added.left_text, None);
    assert_eq!(added.right_text.as_deref(), Some("c"));
}

#[test]
fn engine_runs_in_parallel_without_coordination() {
    let engine = DiffEngine::new(DiffOptions::default());
    std::thread::scope(|scope| {
        let handles: Vec<_> = PAIRS
            .iter()
            .map(|(left, right)| {
                let engine = &engine;
                scope.spawn(move || engine.compute_diff(left, right).unwrap())
            })
            .collect();

        for (handle, (left, right)) in handles.into_iter().zip(PAIRS) {
            assert_eq!(handle.join().unwrap(), compute_diff(left, right));
        }
    });
}

#[test]
fn results_serialize_for_ui_shells() {
    let result = compute_diff("a\nb", "a\nc");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["summary"]["added"], 1);
    assert_eq!(json["ops"][1]["op"], "replace");

    let rows = serde_json::to_value(render_side_by_side(&result)).unwrap();
    assert_eq!(rows[1]["kind"], "changed");
    assert_eq!(rows[0]["left_text"], "a");
}
