use crate::common::{author, page, store_dir};
use assert_fs::TempDir;
use design_vcs::{DesignVcsError, EngineConfig, Repository};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn file_backed_repository_survives_reopen(store_dir: TempDir, author: String) {
    let (main, v1, v2) = {
        let repository = Repository::open(store_dir.path(), EngineConfig::default()).unwrap();
        let main = repository
            .create_branch("site", "main", None, &author, Some("production"))
            .unwrap();
        let v1 = repository
            .create_version("site", &main.id, page("<h1>v1</h1>"), "first", &author)
            .unwrap();
        let v2 = repository
            .create_version("site", &main.id, page("<h1>v2</h1>"), "second", &author)
            .unwrap();
        (main, v1, v2)
    };

    let repository = Repository::open(store_dir.path(), EngineConfig::default()).unwrap();

    assert_eq!(repository.get_version(&v1.id).unwrap(), v1);
    let reopened_main = repository.get_branch(&main.id).unwrap();
    assert_eq!(reopened_main.head_version_id.as_ref(), Some(&v2.id));
    assert!(reopened_main.is_default);
    assert_eq!(
        repository
            .get_version_history(&v2.id, None)
            .unwrap()
            .into_iter()
            .map(|version| version.id)
            .collect::<Vec<_>>(),
        vec![v2.id.clone(), v1.id.clone()]
    );

    let v3 = repository
        .create_version("site", &main.id, page("<h1>v3</h1>"), "third", &author)
        .unwrap();
    assert_eq!(v3.parent_id, Some(v2.id));
    assert!(
        repository
            .create_branch("site", "main", None, &author, None)
            .is_err()
    );
    assert_eq!(repository.get_project_versions("site").unwrap().len(), 3);
}

#[rstest]
fn concurrent_commits_on_file_store_stay_linear(store_dir: TempDir, author: String) {
    let repository = Repository::open(
        store_dir.path(),
        EngineConfig {
            max_commit_retries: 10_000,
            ..EngineConfig::default()
        },
    )
    .unwrap();
    let main = repository
        .create_branch("site", "main", None, &author, None)
        .unwrap();

    std::thread::scope(|scope| {
        for writer in 0..4 {
            let (repository, main, author) = (&repository, &main, &author);
            scope.spawn(move || {
                for n in 0..5 {
                    repository
                        .create_version(
                            "site",
                            &main.id,
                            page(&format!("<p>{writer}-{n}</p>")),
                            "edit",
                            author,
                        )
                        .unwrap();
                }
            });
        }
    });

    let head = repository
        .get_branch(&main.id)
        .unwrap()
        .head_version_id
        .unwrap();
    assert_eq!(
        repository.get_version_history(&head, None).unwrap().len(),
        20
    );
}

#[rstest]
fn long_branch_names_work_on_disk(store_dir: TempDir, author: String) {
    let project_id = "8f14e45f-ceea-467f-a8f3-6c1e0e5c2b7d";
    let name = format!("feature/{}", "landing-page-hero-redesign-".repeat(3));
    let repository = Repository::open(store_dir.path(), EngineConfig::default()).unwrap();

    let branch = repository
        .create_branch(project_id, &name, None, &author, None)
        .unwrap();
    let duplicate = repository
        .create_branch(project_id, &name, None, &author, None)
        .unwrap_err();

    assert_eq!(branch.name.to_string(), name);
    assert!(matches!(duplicate, DesignVcsError::BranchExists { .. }));
    assert_eq!(repository.get_project_branches(project_id).unwrap(), vec![branch]);
}
