use crate::areas::repository::Repository;
use crate::artifacts::objects::VersionId;
use crate::error::Result;

const HEAD_CLOSE_TAG: &str = "</head>";
const ENTRY_PAGE: &str = "index.html";

impl Repository {
    /// Renderable page of a version with the stylesheet inlined
    ///
    /// The page is `index.html` when the snapshot has one, otherwise the
    /// first markup file in path order. Returns `None` for a version without
    /// markup files.
    pub fn get_version_preview(&self, version_id: &VersionId) -> Result<Option<String>> {
        let version = self.database().require_version(version_id)?;
        let html = &version.snapshot.html;

        Ok(html
            .get(ENTRY_PAGE)
            .or_else(|| html.values().next())
            .map(|page| inline_styles(page, &version.snapshot.css)))
    }
}

/// Insert `<style>` before the first `</head>`, or at the very start without one
fn inline_styles(page: &str, css: &str) -> String {
    let style = format!("<style>{css}</style>");

    match page.find(HEAD_CLOSE_TAG) {
        Some(position) => {
            let mut preview = String::with_capacity(page.len() + style.len());
            preview.push_str(&page[..position]);
            preview.push_str(&style);
            preview.push_str(&page[position..]);
            preview
        }
        None => format!("{style}{page}"),
    }
}
