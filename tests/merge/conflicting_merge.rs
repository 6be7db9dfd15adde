use crate::common::{Project, page, project};
use design_vcs::{Conflict, MergeResult};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn conflicting_merge_leaves_target_untouched(project: Project) {
    let base = project.commit(&project.main, page("<h1>base</h1>"));
    let experiment = project.branch_from("experiment", &base);
    project.commit(&experiment, page("<h1>bold</h1>"));
    let main_head = project.commit(&project.main, page("<h1>calm</h1>"));
    let versions_before = project
        .repository
        .get_project_versions(&project.id)
        .unwrap()
        .len();

    let result = project
        .repository
        .merge_branches(&experiment.id, &project.main.id, &project.author)
        .unwrap();

    assert_eq!(
        result,
        MergeResult::Conflicted {
            conflicts: vec![Conflict {
                path: "index.html".to_string(),
                ours: "<h1>calm</h1>".to_string(),
                theirs: "<h1>bold</h1>".to_string(),
            }],
        }
    );
    assert!(!result.is_clean());
    assert!(result.merge_version().is_none());
    assert_eq!(project.head_of(&project.main), Some(main_head.id));
    assert_eq!(
        project
            .repository
            .get_project_versions(&project.id)
            .unwrap()
            .len(),
        versions_before
    );
}
