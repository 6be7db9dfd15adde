use crate::common::{Project, project};
use design_vcs::{DesignSnapshot, ObjectId};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn preview_inlines_styles_into_index_page(project: Project) {
    let version = project.commit(
        &project.main,
        DesignSnapshot::new()
            .with_html("index.html", "<html><head></head><body>home</body></html>")
            .with_html("about.html", "<html><head></head><body>about</body></html>")
            .with_css("body { margin: 0 }"),
    );

    let preview = project.repository.get_version_preview(&version.id).unwrap();

    assert_eq!(
        preview.as_deref(),
        Some("<html><head><style>body { margin: 0 }</style></head><body>home</body></html>")
    );
}

#[rstest]
fn preview_without_index_takes_first_page_by_path(project: Project) {
    let version = project.commit(
        &project.main,
        DesignSnapshot::new()
            .with_html("pricing.html", "<p>pricing</p>")
            .with_html("about.html", "<p>about</p>"),
    );

    let preview = project.repository.get_version_preview(&version.id).unwrap();

    assert_eq!(preview.as_deref(), Some("<style></style><p>about</p>"));
}

#[rstest]
fn preview_without_pages_is_none(project: Project) {
    let version = project.commit(&project.main, DesignSnapshot::new().with_css("h1 {}"));

    assert_eq!(project.repository.get_version_preview(&version.id).unwrap(), None);
}

#[rstest]
fn preview_of_unknown_version_is_not_found(project: Project) {
    let error = project
        .repository
        .get_version_preview(&ObjectId::digest("version", b"missing"))
        .unwrap_err();

    assert!(error.is_not_found());
}
