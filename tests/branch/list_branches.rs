use crate::common::{Project, project, repository};
use design_vcs::Repository;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn project_branches_are_in_creation_order(project: Project) {
    for name in ["redesign/hero", "experiment", "archive"] {
        project
            .repository
            .create_branch(&project.id, name, None, &project.author, None)
            .unwrap();
    }

    let names = project
        .repository
        .get_project_branches(&project.id)
        .unwrap()
        .into_iter()
        .map(|branch| branch.name.to_string())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["main", "redesign/hero", "experiment", "archive"]);
}

#[rstest]
fn branches_of_unknown_project_are_not_found(repository: Repository) {
    assert!(repository.get_project_branches("nowhere").unwrap_err().is_not_found());
}
