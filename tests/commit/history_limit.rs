use crate::common::{Project, author, page, project};
use design_vcs::{DesignVersion, EngineConfig, ObjectId, Repository};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn commit_chain(project: &Project, length: usize) -> Vec<DesignVersion> {
    (0..length)
        .map(|n| project.commit(&project.main, page(&format!("<h1>v{n}</h1>"))))
        .collect()
}

#[rstest]
#[case::zero(0, 0)]
#[case::one(1, 1)]
#[case::partial(3, 3)]
#[case::exact(5, 5)]
#[case::beyond_root(10, 5)]
fn history_is_bounded_by_limit(
    project: Project,
    #[case] limit: usize,
    #[case] expected: usize,
) {
    let versions = commit_chain(&project, 5);
    let head = versions.last().unwrap();

    let history = project
        .repository
        .get_version_history(&head.id, Some(limit))
        .unwrap();

    assert_eq!(history.len(), expected);
    let expected_ids = versions
        .iter()
        .rev()
        .take(expected)
        .map(|version| version.id.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        history.into_iter().map(|version| version.id).collect::<Vec<_>>(),
        expected_ids
    );
}

#[rstest]
fn history_defaults_to_configured_limit(author: String) {
    let repository = Repository::in_memory(EngineConfig {
        history_limit: 3,
        ..EngineConfig::default()
    });
    let main = repository
        .create_branch("site", "main", None, &author, None)
        .unwrap();
    let mut head = None;
    for n in 0..6 {
        head = Some(
            repository
                .create_version("site", &main.id, page(&format!("{n}")), "edit", &author)
                .unwrap(),
        );
    }

    let history = repository
        .get_version_history(&head.unwrap().id, None)
        .unwrap();
    assert_eq!(history.len(), 3);
}

#[rstest]
fn history_of_unknown_version_is_not_found(project: Project) {
    let error = project
        .repository
        .get_version_history(&ObjectId::digest("version", b"missing"), Some(0))
        .unwrap_err();

    assert!(error.is_not_found());
}

#[rstest]
fn history_of_branched_version_follows_its_own_line(project: Project) {
    let versions = commit_chain(&project, 2);
    let experiment = project.branch_from("experiment", &versions[0]);
    let side = project.commit(&experiment, page("<h1>side</h1>"));

    let history = project
        .repository
        .get_version_history(&side.id, None)
        .unwrap()
        .into_iter()
        .map(|version| version.id)
        .collect::<Vec<_>>();

    assert_eq!(history, vec![side.id, versions[0].id.clone()]);
}
