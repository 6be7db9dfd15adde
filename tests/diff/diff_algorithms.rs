use crate::common::{author, page};
use design_vcs::{DiffAlgorithm, EngineConfig, FileChange, LineChange, LineChangeKind, Repository};
use pretty_assertions::assert_eq;
use rstest::rstest;

const OLD_PAGE: &str = "<header>\n<h1>Shop</h1>\n</header>\n<main>";
const NEW_PAGE: &str = "<h1>Shop</h1>\n</header>\n<main>\n<footer>";

fn line_changes(algorithm: DiffAlgorithm, author: &str) -> Vec<LineChange> {
    let repository = Repository::in_memory(EngineConfig {
        diff_algorithm: algorithm,
        ..EngineConfig::default()
    });
    let main = repository
        .create_branch("site", "main", None, author, None)
        .unwrap();
    let old = repository
        .create_version("site", &main.id, page(OLD_PAGE), "old", author)
        .unwrap();
    let new = repository
        .create_version("site", &main.id, page(NEW_PAGE), "new", author)
        .unwrap();

    match repository.diff_versions(&old.id, &new.id).unwrap().remove(0).change {
        FileChange::Modified { changes, .. } => changes,
        other => panic!("expected a modified file, got {other:?}"),
    }
}

#[rstest]
fn heuristic_walk_is_the_default(author: String) {
    assert_eq!(EngineConfig::default().diff_algorithm, DiffAlgorithm::Heuristic);

    assert_eq!(
        line_changes(DiffAlgorithm::Heuristic, &author),
        vec![
            LineChange::remove(1, "<header>"),
            LineChange::context(2, "<h1>Shop</h1>"),
            LineChange::context(3, "</header>"),
            LineChange::context(4, "<main>"),
            LineChange::add(4, "<footer>"),
        ]
    );
}

#[rstest]
fn myers_reports_the_same_edits(author: String) {
    let changes = line_changes(DiffAlgorithm::Myers, &author);
    let edits = changes
        .iter()
        .filter(|change| change.is_change())
        .map(|change| (change.kind, change.content.as_str()))
        .collect::<Vec<_>>();

    assert_eq!(
        edits,
        vec![
            (LineChangeKind::Remove, "<header>"),
            (LineChangeKind::Add, "<footer>"),
        ]
    );
}
