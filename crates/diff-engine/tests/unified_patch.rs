//! The unified rendering must be readable by standard patch tooling.

use diff_engine::{compute_diff, render_unified_with_labels};
use unidiff::PatchSet;

#[test]
fn unified_output_parses_as_patch() {
    let left = "alpha\nbeta\ngamma\ndelta\n";
    let right = "alpha\nBETA\ngamma\ndelta\nepsilon\n";
    let text = render_unified_with_labels(&compute_diff(left, right), 3, "a/notes.txt", "b/notes.txt");

    let mut patch_set = PatchSet::new();
    patch_set.parse(&text).unwrap();

    let files = patch_set.files();
    assert_eq!(files.len(), 1);

    let hunks = files[0].hunks();
    assert_eq!(hunks.len(), 1);
    assert_eq!(hunks[0].source_start, 1);
    assert_eq!(hunks[0].source_length, 4);
    assert_eq!(hunks[0].target_start, 1);
    assert_eq!(hunks[0].target_length, 5);

    let additions = hunks[0]
        .lines()
        .iter()
        .filter(|l| l.line_type.as_str() == "+")
        .count();
    let deletions = hunks[0]
        .lines()
        .iter()
        .filter(|l| l.line_type.as_str() == "-")
        .count();
    assert_eq!(additions, 2);
    assert_eq!(deletions, 1);
}
