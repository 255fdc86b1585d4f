//! Generation request assembly
//!
//! Turns the registry's option map into the manifest the template backend
//! consumes. The manifest is plain JSON: project metadata plus the flat
//! name/value option map, values already serialized by each option source.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppforgeError, Result};
use crate::registry::OptionRegistry;

/// Everything the template backend needs to create a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub project_name: String,
    pub output_dir: PathBuf,
    /// Flat option map in stable (sorted) key order.
    pub options: BTreeMap<String, String>,
}

impl GenerationRequest {
    /// Snapshot the registry into a request. Option values are read at call
    /// time; later edits do not affect an already-built request.
    pub fn from_registry(registry: &OptionRegistry, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let project_name = registry.project_name().get();
        if project_name.trim().is_empty() {
            return Err(AppforgeError::validation("project name is empty"));
        }

        let options = registry
            .all_options()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();

        Ok(Self {
            project_name,
            output_dir: output_dir.into(),
            options,
        })
    }

    /// Serialize to JSON, optionally pretty-printed.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the manifest to disk.
    pub fn write_manifest(&self, path: &Path) -> Result<()> {
        let json = self.to_json(true)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "wrote generation manifest");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyGraph;
    use crate::types::Preset;

    fn registry() -> OptionRegistry {
        let graph = PropertyGraph::new();
        let name = graph.property("projectName", "App1".to_string());
        OptionRegistry::new(&graph, name)
    }

    #[test]
    fn test_request_snapshots_option_map() {
        let reg = registry();
        let request = GenerationRequest::from_registry(&reg, "/tmp/out").unwrap();

        assert_eq!(request.project_name, "App1");
        assert_eq!(request.options["preset"], "recommended");
        assert_eq!(request.options["tfm"], "net8.0");
        assert_eq!(request.options["appId"], "com.companyname.App1");

        // Later edits do not leak into the snapshot.
        reg.select_preset(Preset::Blank);
        assert_eq!(request.options["preset"], "recommended");
    }

    #[test]
    fn test_empty_project_name_is_rejected() {
        let graph = PropertyGraph::new();
        let name = graph.property("projectName", "   ".to_string());
        let reg = OptionRegistry::new(&graph, name);

        let err = GenerationRequest::from_registry(&reg, "/tmp/out").unwrap_err();
        assert!(matches!(err, AppforgeError::Validation(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let reg = registry();
        let request = GenerationRequest::from_registry(&reg, "/tmp/out").unwrap();

        let json = request.to_json(false).unwrap();
        let parsed: GenerationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
