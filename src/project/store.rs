//! Project list operations over a `KeyValueStore`.

use super::Project;
use crate::document::Snapshot;
use crate::error::{Error, Result, ResultExt};
use crate::storage::{KeyValueStore, PROJECTS_KEY};
use log::{debug, info, warn};
use std::time::{SystemTime, UNIX_EPOCH};

// ─────────────────────────────────────────────────────────────────────────────
// Reading
// ─────────────────────────────────────────────────────────────────────────────

fn read_projects<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<Project>> {
    let Some(contents) = store.read(PROJECTS_KEY)? else {
        return Ok(Vec::new());
    };
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&contents).map_err(|e| Error::Parse {
        message: format!("Failed to parse project list: {}", e),
        source: Some(Box::new(e)),
    })
}

fn write_projects<S: KeyValueStore + ?Sized>(store: &mut S, projects: &[Project]) -> Result<()> {
    let json = serde_json::to_string(projects).map_err(|e| Error::StorageWrite {
        key: PROJECTS_KEY.to_string(),
        source: Box::new(e),
    })?;
    store.write(PROJECTS_KEY, &json)
}

/// All stored projects in insertion order.
///
/// Missing or malformed data yields an empty list.
pub fn list_projects<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Project> {
    read_projects(store).unwrap_or_warn_default(Vec::new(), "Failed to read projects")
}

/// Snapshot of the project called `name`, if stored.
pub fn load_project<S: KeyValueStore + ?Sized>(store: &S, name: &str) -> Option<Snapshot> {
    let project = list_projects(store).into_iter().find(|p| p.name == name)?;
    info!("Loaded project '{}'", name);
    Some(project.snapshot())
}

// ─────────────────────────────────────────────────────────────────────────────
// Writing
// ─────────────────────────────────────────────────────────────────────────────

/// Name used when saving without one: `Project_{unix_millis}`.
pub fn generated_project_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("Project_{}", millis)
}

/// Save `snapshot` under `name`, replacing any project with the same name,
/// and return the name used.
///
/// The name is trimmed; an empty name gets a generated one. The saved
/// project moves to the end of the list.
///
/// # Errors
///
/// - `Error::Parse`: the stored list is corrupted and is left untouched
/// - `Error::StorageWrite`: the store rejected the write
pub fn save_project<S: KeyValueStore + ?Sized>(
    store: &mut S,
    name: &str,
    snapshot: &Snapshot,
) -> Result<String> {
    let trimmed = name.trim();
    let name = if trimmed.is_empty() {
        generated_project_name()
    } else {
        trimmed.to_string()
    };

    let mut projects = read_projects(store)?;
    projects.retain(|p| p.name != name);
    projects.push(Project::from_snapshot(name.clone(), snapshot));
    write_projects(store, &projects)?;

    info!("Saved project '{}' ({} total)", name, projects.len());
    Ok(name)
}

/// Remove the project called `name`. Returns whether one was removed.
pub fn delete_project<S: KeyValueStore + ?Sized>(store: &mut S, name: &str) -> Result<bool> {
    let mut projects = read_projects(store)?;
    let before = projects.len();
    projects.retain(|p| p.name != name);

    if projects.len() == before {
        debug!("No project named '{}' to delete", name);
        return Ok(false);
    }

    write_projects(store, &projects)?;
    info!("Deleted project '{}'", name);
    Ok(true)
}

/// Delete, logging instead of returning errors.
pub fn delete_project_silent<S: KeyValueStore + ?Sized>(store: &mut S, name: &str) -> bool {
    delete_project(store, name).unwrap_or_else(|e| {
        warn!("Failed to delete project '{}': {}", name, e);
        false
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentSet, LanguageId};
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn sample_docs() -> Snapshot {
        let mut docs = DocumentSet::placeholder();
        docs.set_text(LanguageId::Css, "body { margin: 0; }");
        docs.set_text(LanguageId::Markdown, "- a\n- b");
        docs.snapshot()
    }

    #[test]
    fn test_save_then_load_returns_docs() {
        let mut store = MemoryStore::new();
        let docs = sample_docs();
        let name = save_project(&mut store, "demo", &docs).unwrap();
        assert_eq!(name, "demo");
        assert_eq!(load_project(&store, "demo"), Some(docs));
    }

    #[test]
    fn test_save_trims_name() {
        let mut store = MemoryStore::new();
        let name = save_project(&mut store, "  spaced  ", &sample_docs()).unwrap();
        assert_eq!(name, "spaced");
        assert!(load_project(&store, "spaced").is_some());
    }

    #[test]
    fn test_save_blank_name_generates_one() {
        let mut store = MemoryStore::new();
        let name = save_project(&mut store, "   ", &sample_docs()).unwrap();
        let suffix = name.strip_prefix("Project_").expect("generated prefix");
        assert!(!suffix.is_empty());
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_save_twice_keeps_one_entry() {
        let mut store = MemoryStore::new();
        save_project(&mut store, "a", &sample_docs()).unwrap();
        save_project(&mut store, "b", &sample_docs()).unwrap();

        let mut updated = sample_docs();
        updated.insert(LanguageId::Html, "<p>v2</p>".to_string());
        save_project(&mut store, "a", &updated).unwrap();

        let projects = list_projects(&store);
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(projects[1].html, "<p>v2</p>");
    }

    #[test]
    fn test_list_missing_or_malformed_is_empty() {
        let mut store = MemoryStore::new();
        assert!(list_projects(&store).is_empty());

        store.write(PROJECTS_KEY, "{not a list").unwrap();
        assert!(list_projects(&store).is_empty());
        assert_eq!(load_project(&store, "x"), None);
    }

    #[test]
    fn test_save_refuses_to_overwrite_corrupted_list() {
        let mut store = MemoryStore::new();
        store.write(PROJECTS_KEY, "{not a list").unwrap();

        let result = save_project(&mut store, "x", &sample_docs());
        assert!(matches!(result, Err(Error::Parse { .. })));
        assert_eq!(store.read(PROJECTS_KEY).unwrap().as_deref(), Some("{not a list"));
    }

    #[test]
    fn test_load_tolerates_missing_fields() {
        let mut store = MemoryStore::new();
        store
            .write(PROJECTS_KEY, r#"[{"name":"legacy","html":"<i>x</i>"}]"#)
            .unwrap();
        let snapshot = load_project(&store, "legacy").unwrap();
        assert_eq!(snapshot[&LanguageId::Html], "<i>x</i>");
        assert_eq!(snapshot[&LanguageId::Json], "");
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        save_project(&mut store, "keep", &sample_docs()).unwrap();
        save_project(&mut store, "drop", &sample_docs()).unwrap();

        assert!(delete_project(&mut store, "drop").unwrap());
        assert!(!delete_project(&mut store, "drop").unwrap());
        assert!(delete_project_silent(&mut store, "keep"));
        assert!(list_projects(&store).is_empty());
    }

    #[test]
    fn test_projects_persist_in_file_store() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let docs = sample_docs();
        {
            let mut store = FileStore::new(temp.path());
            save_project(&mut store, "disk", &docs).unwrap();
        }
        let store = FileStore::new(temp.path());
        assert_eq!(load_project(&store, "disk"), Some(docs));
    }
}
