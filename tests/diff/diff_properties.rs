use crate::common::{Project, page, project};
use design_vcs::{FileChange, ObjectId};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn diff_of_version_with_itself_is_all_unchanged(project: Project) {
    let version = project.commit(
        &project.main,
        page("<h1>home</h1>")
            .with_html("about.html", "<p>about</p>")
            .with_css("h1 {}")
            .with_js("run()"),
    );

    let diffs = project
        .repository
        .diff_versions(&version.id, &version.id)
        .unwrap();

    assert_eq!(
        diffs.iter().map(|diff| diff.path.as_str()).collect::<Vec<_>>(),
        vec!["about.html", "index.html"]
    );
    assert!(diffs.iter().all(|diff| diff.change == FileChange::Unchanged));
}

#[rstest]
fn added_paths_are_removed_the_other_way(project: Project) {
    let v1 = project.commit(&project.main, page("<h1>home</h1>"));
    let v2 = project.commit(
        &project.main,
        page("<h1>home</h1>").with_html("contact.html", "<form></form>"),
    );

    let forward = project.repository.diff_versions(&v1.id, &v2.id).unwrap();
    let backward = project.repository.diff_versions(&v2.id, &v1.id).unwrap();

    let added = forward.iter().find(|diff| diff.path == "contact.html").unwrap();
    let removed = backward.iter().find(|diff| diff.path == "contact.html").unwrap();
    assert_eq!(
        added.change,
        FileChange::Added {
            new_content: "<form></form>".to_string()
        }
    );
    assert_eq!(
        removed.change,
        FileChange::Removed {
            old_content: "<form></form>".to_string()
        }
    );
}

#[rstest]
fn stylesheet_and_script_are_reported_only_when_changed(project: Project) {
    let v1 = project.commit(&project.main, page("<h1>home</h1>").with_css("h1 {}"));
    let v2 = project.commit(
        &project.main,
        page("<h1>home</h1>").with_css("h1 {}").with_js("boot()"),
    );

    let paths = project
        .repository
        .diff_versions(&v1.id, &v2.id)
        .unwrap()
        .into_iter()
        .map(|diff| (diff.path, diff.change.status_char()))
        .collect::<Vec<_>>();

    assert_eq!(
        paths,
        vec![
            ("index.html".to_string(), 'U'),
            ("script.js".to_string(), 'A'),
        ]
    );
}

#[rstest]
fn diff_with_unknown_version_is_not_found(project: Project) {
    let version = project.commit(&project.main, page("<h1>home</h1>"));
    let missing = ObjectId::digest("version", b"missing");

    assert!(
        project
            .repository
            .diff_versions(&version.id, &missing)
            .unwrap_err()
            .is_not_found()
    );
    assert!(
        project
            .repository
            .diff_versions(&missing, &version.id)
            .unwrap_err()
            .is_not_found()
    );
}
