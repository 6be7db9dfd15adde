use crate::common::{Project, page, project};
use design_vcs::{FileChange, LineChange};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn second_version_builds_on_first(project: Project) -> Result<(), Box<dyn std::error::Error>> {
    let repository = &project.repository;

    let v1 = repository.create_version(
        &project.id,
        &project.main.id,
        page("<h1>v1</h1>"),
        "initial design",
        &project.author,
    )?;
    assert_eq!(v1.parent_id, None);
    assert_eq!(v1.metadata.changed_files, vec!["index.html"]);
    assert_eq!(v1.metadata.file_count, 1);

    let v2 = repository.create_version(
        &project.id,
        &project.main.id,
        page("<h1>v2</h1>"),
        "new headline",
        &project.author,
    )?;
    assert_eq!(v2.parent_id.as_ref(), Some(&v1.id));
    assert_eq!(v2.metadata.changed_files, vec!["index.html"]);
    assert_eq!(project.head_of(&project.main), Some(v2.id.clone()));

    let diffs = repository.diff_versions(&v1.id, &v2.id)?;
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].path, "index.html");
    assert_eq!(
        diffs[0].change,
        FileChange::Modified {
            old_content: "<h1>v1</h1>".to_string(),
            new_content: "<h1>v2</h1>".to_string(),
            changes: vec![
                LineChange::remove(1, "<h1>v1</h1>"),
                LineChange::add(1, "<h1>v2</h1>"),
            ],
        }
    );

    Ok(())
}

#[rstest]
fn versions_keep_full_snapshot_and_metadata(project: Project) {
    let snapshot = page("<h1>shop</h1>")
        .with_html("cart.html", "<ul></ul>")
        .with_css("h1 { color: red }")
        .with_js("checkout()")
        .with_asset("logo.png", "cdn://logo")
        .with_config("theme", serde_json::json!({ "mode": "dark" }));

    let version = project.commit(&project.main, snapshot.clone());
    let loaded = project.repository.get_version(&version.id).unwrap();

    assert_eq!(loaded, version);
    assert_eq!(loaded.snapshot, snapshot);
    assert_eq!(loaded.hash, snapshot.content_hash());
    assert_eq!(loaded.metadata.file_count, 4);
    assert_eq!(
        loaded.metadata.total_size,
        "<h1>shop</h1>".len() + "<ul></ul>".len() + "h1 { color: red }".len() + "checkout()".len()
    );
    assert_eq!(
        loaded.metadata.changed_files,
        vec!["cart.html", "index.html", "styles.css", "script.js"]
    );
}

#[rstest]
fn unknown_versions_are_not_found(project: Project) {
    let missing = design_vcs::ObjectId::digest("version", b"missing");
    let error = project.repository.get_version(&missing).unwrap_err();

    assert!(error.is_not_found());
}
