use crate::common::{Project, page, project};
use design_vcs::{DesignVcsError, ObjectId};
use rstest::rstest;

#[rstest]
fn merging_branch_without_commits_is_not_found(project: Project) {
    let base = project.commit(&project.main, page("<h1>home</h1>"));
    let empty = project
        .repository
        .create_branch(&project.id, "empty", None, &project.author, None)
        .unwrap();

    let as_source = project
        .repository
        .merge_branches(&empty.id, &project.main.id, &project.author)
        .unwrap_err();
    let as_target = project
        .repository
        .merge_branches(&project.main.id, &empty.id, &project.author)
        .unwrap_err();

    assert!(matches!(
        as_source,
        DesignVcsError::NotFound {
            resource: "branch head",
            ..
        }
    ));
    assert!(as_target.is_not_found());
    assert_eq!(project.head_of(&project.main), Some(base.id));
}

#[rstest]
fn merging_unknown_branch_is_not_found(project: Project) {
    project.commit(&project.main, page("<h1>home</h1>"));
    let unknown = ObjectId::digest("branch", b"missing");

    let error = project
        .repository
        .merge_branches(&unknown, &project.main.id, &project.author)
        .unwrap_err();

    assert!(error.is_not_found());
}
