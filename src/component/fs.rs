/// Filesystem-backed component source.
///
/// An application is a directory with an `app.yaml` manifest and a
/// `components/` tree. The root module is `components/` itself; a nested
/// module `a.b` lives at `components/a/b`. Each `*.json`, `*.yaml`, or
/// `*.yml` file directly inside a module directory is one component, named
/// by its file stem. Subdirectories are submodules, never components.
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};
use serde::Deserialize;

use super::errors::ComponentError;
use super::source::{Component, ComponentSource, Module, Summary};

/// Manifest file that marks a directory as an application root.
const APP_MANIFEST: &str = "app.yaml";

/// Component manifest extensions, in summary probe order.
const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Maximum number of module suggestions attached to a not-found error.
const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Deserialize)]
struct AppManifest {
    name: String,
}

/// Fields of a component manifest that feed the summary projection.
#[derive(Debug, Deserialize)]
struct ComponentManifest {
    #[serde(rename = "apiVersion")]
    api_version: String,
    kind: String,
    #[serde(default)]
    metadata: ManifestMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct ManifestMetadata {
    #[serde(default)]
    name: Option<String>,
}

/// A component source reading an application directory on disk.
#[derive(Debug)]
pub struct FsSource {
    root: PathBuf,
    app: AppManifest,
}

impl FsSource {
    /// Open the application rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError::AppNotFound` when `root` holds no
    /// `app.yaml`, or an error when the manifest cannot be read or parsed.
    pub fn open(root: &Path) -> Result<Self, ComponentError> {
        let manifest_path = root.join(APP_MANIFEST);
        if !manifest_path.is_file() {
            return Err(ComponentError::AppNotFound {
                path: root.to_path_buf(),
            });
        }
        let text = fs::read_to_string(&manifest_path).map_err(|source| ComponentError::Read {
            path: manifest_path.clone(),
            source,
        })?;
        let app = serde_yaml_bw::from_str(&text).map_err(|source| ComponentError::AppManifest {
            path: manifest_path,
            source,
        })?;
        Ok(Self {
            root: root.to_path_buf(),
            app,
        })
    }

    fn components_root(&self) -> PathBuf {
        self.root.join("components")
    }

    /// Map a dotted module name onto its directory. `None` when a segment
    /// is empty or would escape the components tree.
    fn module_dir(&self, module: &str) -> Option<PathBuf> {
        let mut dir = self.components_root();
        if module.is_empty() {
            return Some(dir);
        }
        for segment in module.split('.') {
            if segment.is_empty() || segment.contains(['/', '\\']) || segment == ".." {
                return None;
            }
            dir.push(segment);
        }
        Some(dir)
    }

    /// Enumerate every module name in the application, root excluded.
    fn module_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_modules(&self.components_root(), "", &mut names);
        names.sort();
        names
    }

    /// Fuzzy-rank existing module names against a missed lookup.
    fn suggest(&self, query: &str) -> Vec<String> {
        let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
        let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

        let mut scored: Vec<(String, u32)> = self
            .module_names()
            .into_iter()
            .filter_map(|name| {
                let mut buf = Vec::new();
                let haystack = Utf32Str::new(&name, &mut buf);
                pattern.score(haystack, &mut matcher).map(|s| (name, s))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(name, _)| name)
            .collect()
    }

    fn not_found(&self, module: &str) -> ComponentError {
        ComponentError::ModuleNotFound {
            app: self.app.name.clone(),
            module: module.to_owned(),
            candidates: self.suggest(module),
        }
    }

    /// Locate the manifest file backing a component, probing extensions in
    /// a fixed order.
    fn component_path(&self, component: &Component) -> Result<PathBuf, ComponentError> {
        let Some(dir) = self.module_dir(component.module()) else {
            return Err(ComponentError::ComponentNotFound {
                component: component.display_name(true),
            });
        };
        for ext in EXTENSIONS {
            let path = dir.join(format!("{}.{ext}", component.name()));
            if path.is_file() {
                return Ok(path);
            }
        }
        Err(ComponentError::ComponentNotFound {
            component: component.display_name(true),
        })
    }
}

impl ComponentSource for FsSource {
    fn resolve(&self, module: &str) -> Result<Module, ComponentError> {
        let Some(dir) = self.module_dir(module) else {
            return Err(self.not_found(module));
        };
        if !dir.is_dir() {
            // An application without a components tree still has an empty
            // root module.
            if module.is_empty() {
                return Ok(Module::new(module, Vec::new()));
            }
            return Err(self.not_found(module));
        }

        let entries = fs::read_dir(&dir).map_err(|source| ComponentError::Read {
            path: dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ComponentError::Read {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if !path
                .extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| EXTENSIONS.contains(&ext))
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
                continue;
            };
            names.push(stem.to_owned());
        }
        names.sort();

        let components = names
            .iter()
            .map(|name| Component::new(module, name))
            .collect();
        Ok(Module::new(module, components))
    }

    fn summarize(&self, component: &Component) -> Result<Summary, ComponentError> {
        let path = self.component_path(component)?;
        let text = fs::read_to_string(&path).map_err(|source| ComponentError::Read {
            path: path.clone(),
            source,
        })?;

        let extension = path.extension().and_then(OsStr::to_str).unwrap_or_default();
        let manifest: ComponentManifest = if extension == "json" {
            serde_json::from_str(&text).map_err(|source| ComponentError::Manifest {
                path: path.clone(),
                source: Box::new(source),
            })?
        } else {
            serde_yaml_bw::from_str(&text).map_err(|source| ComponentError::Manifest {
                path: path.clone(),
                source: Box::new(source),
            })?
        };

        Ok(Summary {
            component_name: component.name().to_owned(),
            component_type: if extension == "json" { "json" } else { "yaml" }.to_owned(),
            api_version: manifest.api_version,
            kind: manifest.kind,
            name: manifest
                .metadata
                .name
                .unwrap_or_else(|| component.name().to_owned()),
        })
    }
}

/// Collect dotted module names by walking the components tree. Unreadable
/// directories are skipped; this only feeds suggestions.
fn collect_modules(dir: &Path, prefix: &str, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(segment) = path.file_name().and_then(OsStr::to_str) else {
            continue;
        };
        let name = if prefix.is_empty() {
            segment.to_owned()
        } else {
            format!("{prefix}.{segment}")
        };
        collect_modules(&path, &name, out);
        out.push(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn app_fixture() -> (tempfile::TempDir, FsSource) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("app.yaml"), "name: guestbook\n");
        write_file(
            &root.join("components/web.json"),
            r#"{"apiVersion": "apps/v1", "kind": "Deployment", "metadata": {"name": "web-deploy"}}"#,
        );
        write_file(
            &root.join("components/db.yaml"),
            "apiVersion: apps/v1\nkind: StatefulSet\nmetadata:\n  name: db-set\n",
        );
        write_file(
            &root.join("components/auth/sessions/store.json"),
            r#"{"apiVersion": "v1", "kind": "ConfigMap"}"#,
        );
        let source = FsSource::open(root).unwrap();
        (dir, source)
    }

    #[test]
    fn test_open_requires_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsSource::open(dir.path()).unwrap_err();
        assert!(matches!(err, ComponentError::AppNotFound { .. }));
    }

    #[test]
    fn test_resolve_root_lists_files_sorted_not_dirs() {
        let (_dir, source) = app_fixture();
        let module = source.resolve("").unwrap();
        let names: Vec<&str> = module.components().iter().map(Component::name).collect();
        assert_eq!(names, ["db", "web"]);
    }

    #[test]
    fn test_resolve_nested_module() {
        let (_dir, source) = app_fixture();
        let module = source.resolve("auth.sessions").unwrap();
        let names: Vec<&str> = module.components().iter().map(Component::name).collect();
        assert_eq!(names, ["store"]);
        assert_eq!(module.components()[0].display_name(true), "auth.sessions.store");
    }

    #[test]
    fn test_resolve_missing_module_suggests_candidates() {
        let (_dir, source) = app_fixture();
        let err = source.resolve("auth.session").unwrap_err();
        let ComponentError::ModuleNotFound { app, candidates, .. } = err else {
            panic!("expected ModuleNotFound, got {err:?}");
        };
        assert_eq!(app, "guestbook");
        assert!(candidates.contains(&"auth.sessions".to_owned()));
    }

    #[test]
    fn test_resolve_root_without_components_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("app.yaml"), "name: bare\n");
        let source = FsSource::open(dir.path()).unwrap();
        let module = source.resolve("").unwrap();
        assert!(module.components().is_empty());
    }

    #[test]
    fn test_summarize_json_component() {
        let (_dir, source) = app_fixture();
        let summary = source.summarize(&Component::new("", "web")).unwrap();
        assert_eq!(
            summary,
            Summary {
                component_name: "web".to_owned(),
                component_type: "json".to_owned(),
                api_version: "apps/v1".to_owned(),
                kind: "Deployment".to_owned(),
                name: "web-deploy".to_owned(),
            }
        );
    }

    #[test]
    fn test_summarize_yaml_component() {
        let (_dir, source) = app_fixture();
        let summary = source.summarize(&Component::new("", "db")).unwrap();
        assert_eq!(summary.component_type, "yaml");
        assert_eq!(summary.kind, "StatefulSet");
        assert_eq!(summary.name, "db-set");
    }

    #[test]
    fn test_summarize_falls_back_to_component_name() {
        let (_dir, source) = app_fixture();
        let summary = source
            .summarize(&Component::new("auth.sessions", "store"))
            .unwrap();
        assert_eq!(summary.name, "store");
    }

    #[test]
    fn test_summarize_rejects_malformed_manifest() {
        let (dir, source) = app_fixture();
        write_file(&dir.path().join("components/broken.json"), "{not json");
        let err = source.summarize(&Component::new("", "broken")).unwrap_err();
        assert!(matches!(err, ComponentError::Manifest { .. }));
    }

    #[test]
    fn test_summarize_missing_component() {
        let (_dir, source) = app_fixture();
        let err = source.summarize(&Component::new("", "ghost")).unwrap_err();
        assert!(matches!(err, ComponentError::ComponentNotFound { .. }));
    }
}
