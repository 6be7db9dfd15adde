use crate::common::{Project, page, project};
use design_vcs::ObjectId;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn rollback_recommits_target_snapshot(project: Project) {
    let v1 = project.commit(
        &project.main,
        page("<h1>v1</h1>").with_css("h1 { color: navy }"),
    );
    let v2 = project.commit(&project.main, page("<h1>v2</h1>"));

    let rollback = project
        .repository
        .rollback(&project.id, &project.main.id, &v1.id, &project.author)
        .unwrap();

    assert_eq!(rollback.snapshot, v1.snapshot);
    assert_eq!(rollback.hash, v1.hash);
    assert_ne!(rollback.id, v1.id);
    assert_eq!(rollback.parent_id.as_ref(), Some(&v2.id));
    assert_eq!(rollback.message, format!("Rollback to {}", v1.hash));
    assert_eq!(
        rollback.metadata.changed_files,
        vec!["index.html", "styles.css"]
    );
    assert_eq!(project.head_of(&project.main), Some(rollback.id.clone()));
}

#[rstest]
fn rollback_keeps_history(project: Project) {
    let v1 = project.commit(&project.main, page("<h1>v1</h1>"));
    let v2 = project.commit(&project.main, page("<h1>v2</h1>"));
    let rollback = project
        .repository
        .rollback(&project.id, &project.main.id, &v1.id, &project.author)
        .unwrap();

    let history = project
        .repository
        .get_version_history(&rollback.id, None)
        .unwrap()
        .into_iter()
        .map(|version| version.id)
        .collect::<Vec<_>>();

    assert_eq!(history, vec![rollback.id, v2.id, v1.id]);
}

#[rstest]
fn rollback_to_unknown_version_is_not_found(project: Project) {
    let head = project.commit(&project.main, page("<h1>v1</h1>"));

    let error = project
        .repository
        .rollback(
            &project.id,
            &project.main.id,
            &ObjectId::digest("version", b"missing"),
            &project.author,
        )
        .unwrap_err();

    assert!(error.is_not_found());
    assert_eq!(project.head_of(&project.main), Some(head.id));
}
