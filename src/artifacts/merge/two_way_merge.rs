use crate::artifacts::diff::version_diff::paired_paths;
use crate::artifacts::merge::conflict::Conflict;
use crate::artifacts::objects::snapshot::DesignSnapshot;
use tracing::debug;

/// Merge `source` into `target` without a common ancestor
///
/// Markup paths only the source has are added, paths only the target has
/// are kept, and equal paths keep the target's content. A path present on
/// both sides with different content is a conflict; if there is any, no
/// snapshot is produced.
///
/// On a clean merge the stylesheet is always the source's (target edits to it
/// are discarded), the script is the source's unless it has none, and assets
/// and config are the target's entries overlaid with the source's.
pub fn merge_snapshots(
    source: &DesignSnapshot,
    target: &DesignSnapshot,
) -> Result<DesignSnapshot, Vec<Conflict>> {
    let mut html = target.html.clone();
    let mut conflicts = Vec::new();

    for (path, ours, theirs) in paired_paths(&target.html, &source.html) {
        match (ours, theirs) {
            (None, Some(theirs)) => {
                debug!(path, "merge adds path from source");
                html.insert(path.to_string(), theirs.to_string());
            }
            (Some(ours), Some(theirs)) if ours != theirs => {
                debug!(path, "merge conflict");
                conflicts.push(Conflict {
                    path: path.to_string(),
                    ours: ours.to_string(),
                    theirs: theirs.to_string(),
                });
            }
            _ => {}
        }
    }

    if !conflicts.is_empty() {
        return Err(conflicts);
    }

    let mut assets = target.assets.clone();
    assets.extend(source.assets.clone());
    let mut config = target.config.clone();
    config.extend(source.config.clone());

    Ok(DesignSnapshot {
        html,
        css: source.css.clone(),
        js: source
            .js_file()
            .or(target.js.as_deref())
            .map(str::to_string),
        assets,
        config,
    })
}
