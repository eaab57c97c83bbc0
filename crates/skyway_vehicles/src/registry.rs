//! # Vehicle Definition Registry
//!
//! Owns every loaded definition by name and builds runtime vehicles from
//! them.
//!
//! ## Phases
//!
//! 1. **Population** - `define`/`load_*` take `&mut self`.
//! 2. **Serving** - `create`/`get` take `&self`; share the registry behind an
//!    `Arc` once population is done.
//!
//! The borrow rules keep the phases apart: nothing can call `create` while a
//! `define` is running.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::config::LoaderConfig;
use crate::definition::{DefinitionBuilder, VehicleDefinition};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{VehicleError, VehicleResult};
use crate::image::ImageResolver;
use crate::markup::MarkupNode;
use crate::vehicle::{Organisation, Vehicle};
use crate::volume_cache::FallbackVolumeCache;
use skyway_shared::DEFINITION_EXTENSION;

/// Shared resolver the registry loads images through.
pub type SharedImageResolver = Arc<dyn ImageResolver + Send + Sync>;

/// Outcome counts of a load call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Definitions registered.
    pub defined: usize,
    /// Definitions abandoned (bad type, missing id).
    pub rejected: usize,
    /// Documents that could not be read or parsed at all.
    pub failed_documents: usize,
}

impl LoadSummary {
    /// Adds another summary's counts to this one.
    pub fn absorb(&mut self, other: Self) {
        self.defined += other.defined;
        self.rejected += other.rejected;
        self.failed_documents += other.failed_documents;
    }
}

/// Name → definition store.
pub struct VehicleRegistry {
    images: SharedImageResolver,
    volumes: FallbackVolumeCache,
    definitions: HashMap<String, Arc<VehicleDefinition>>,
    diagnostics: Diagnostics,
}

impl std::fmt::Debug for VehicleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VehicleRegistry")
            .field("definitions", &self.definitions.len())
            .field("volumes", &self.volumes)
            .field("diagnostics", &self.diagnostics.entries().len())
            .finish_non_exhaustive()
    }
}

impl VehicleRegistry {
    /// Creates an empty registry with the default fallback volume size.
    #[must_use]
    pub fn new(images: SharedImageResolver) -> Self {
        Self {
            images,
            volumes: FallbackVolumeCache::default(),
            definitions: HashMap::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Creates an empty registry using the config's fallback volume size.
    #[must_use]
    pub fn with_config(images: SharedImageResolver, config: &LoaderConfig) -> Self {
        Self {
            volumes: FallbackVolumeCache::new(config.fallback_volume_size()),
            ..Self::new(images)
        }
    }

    /// Parses one definition element and registers it under its `id`.
    ///
    /// A definition with the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns error if the definition was abandoned; nothing is registered
    /// in that case.
    pub fn define<N: MarkupNode>(&mut self, node: &N) -> VehicleResult<Arc<VehicleDefinition>> {
        let built = DefinitionBuilder::new(&*self.images, &self.volumes)
            .build(node, &mut self.diagnostics);
        self.diagnostics.set_scope(None);
        let def = Arc::new(built?);

        if let Some(old) = self.definitions.insert(def.name.clone(), Arc::clone(&def)) {
            self.diagnostics.set_scope(Some(old.name.as_str()));
            self.diagnostics
                .warn(format!("Replacing vehicle definition \"{}\"", old.name));
            self.diagnostics.set_scope(None);
        }
        Ok(def)
    }

    /// Removes a definition. Vehicles already built from it keep it alive.
    pub fn remove(&mut self, name: &str) -> Option<Arc<VehicleDefinition>> {
        self.definitions.remove(name)
    }

    /// Builds a vehicle of type `name` owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleError::DefinitionNotFound`] if no definition has that
    /// name.
    pub fn create(&self, name: &str, owner: &Organisation) -> VehicleResult<Vehicle> {
        let def = self
            .definitions
            .get(name)
            .ok_or_else(|| VehicleError::DefinitionNotFound(name.to_owned()))?;
        Ok(Vehicle::new(Arc::clone(def), owner))
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<VehicleDefinition>> {
        self.definitions.get(name)
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Diagnostics recorded since the last [`Self::take_diagnostics`].
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.entries()
    }

    /// Removes and returns the recorded diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// The stand-in volume cache used for definitions without a voxel map.
    #[must_use]
    pub fn fallback_volumes(&self) -> &FallbackVolumeCache {
        &self.volumes
    }

    /// Loads every definition in an XML document.
    ///
    /// A root element with an `id` attribute is a single definition;
    /// otherwise each child element of the root is one.
    ///
    /// # Errors
    ///
    /// Returns error if the document is not well-formed. Abandoned
    /// definitions are only counted.
    pub fn load_document(&mut self, xml: &str) -> VehicleResult<LoadSummary> {
        let doc = roxmltree::Document::parse(xml)?;
        let root = doc.root_element();
        let mut summary = LoadSummary::default();

        let mut define = |registry: &mut Self, node: &roxmltree::Node<'_, '_>| {
            match registry.define(node) {
                Ok(_) => summary.defined += 1,
                Err(_) => summary.rejected += 1,
            }
        };

        if root.has_attribute("id") {
            define(self, &root);
        } else {
            for node in root.child_elements() {
                define(self, &node);
            }
        }
        Ok(summary)
    }

    /// Loads a definition document from disk.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not well-formed.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> VehicleResult<LoadSummary> {
        let path = path.as_ref();
        self.diagnostics
            .info(format!("Loading vehicle definitions from {}", path.display()));
        let xml = std::fs::read_to_string(path)?;
        self.load_document(&xml)
    }

    /// Loads every `.xml` document in a directory, in file name order.
    ///
    /// Documents that fail to read or parse are reported and counted, and the
    /// rest still load.
    ///
    /// # Errors
    ///
    /// Returns error only if the directory itself cannot be listed.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> VehicleResult<LoadSummary> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == DEFINITION_EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut summary = LoadSummary::default();
        for path in paths {
            match self.load_file(&path) {
                Ok(loaded) => summary.absorb(loaded),
                Err(err) => {
                    self.diagnostics
                        .error(format!("Skipping {}: {err}", path.display()));
                    summary.failed_documents += 1;
                }
            }
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::image::ImageCatalog;
    use crate::vehicle::OrganisationId;

    fn registry() -> VehicleRegistry {
        VehicleRegistry::new(Arc::new(ImageCatalog::with_names(["n.png", "e.png"])))
    }

    #[test]
    fn test_define_and_create() {
        let mut reg = registry();
        let summary = reg
            .load_document(r#"<vehicle id="car" type="ground"><flat><N>n.png</N></flat></vehicle>"#)
            .unwrap();
        assert_eq!(summary.defined, 1);

        let owner = Organisation::new(3, "Transtellar");
        let vehicle = reg.create("car", &owner).unwrap();
        assert!(Arc::ptr_eq(vehicle.definition(), reg.get("car").unwrap()));
        assert_eq!(vehicle.owner(), OrganisationId(3));
    }

    #[test]
    fn test_missing_name_is_not_found() {
        let reg = registry();
        let owner = Organisation::new(1, "Government");
        let err = reg.create("missing-name", &owner).unwrap_err();
        assert!(matches!(err, VehicleError::DefinitionNotFound(ref n) if n == "missing-name"));
    }

    #[test]
    fn test_unknown_type_registers_nothing() {
        let mut reg = registry();
        let summary = reg
            .load_document(r#"<vehicle id="sub" type="underwater"/>"#)
            .unwrap();
        assert_eq!(summary, LoadSummary { defined: 0, rejected: 1, failed_documents: 0 });
        assert!(reg.is_empty());
        assert!(reg.get("sub").is_none());
    }

    #[test]
    fn test_last_definition_wins() {
        let mut reg = registry();
        reg.load_document(
            r#"<vehicles>
                <vehicle id="car" type="ground" sizeX="1"/>
                <vehicle id="car" type="flying" sizeX="2"/>
            </vehicles>"#,
        )
        .unwrap();

        assert_eq!(reg.len(), 1);
        let def = reg.get("car").unwrap();
        assert_eq!(def.size.x, 2.0);
        assert!(reg
            .diagnostics()
            .iter()
            .any(|d| d.severity == Severity::Warning && d.message.contains("Replacing vehicle")));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let mut reg = registry();
        assert!(matches!(
            reg.load_document("<vehicle id=\"a\""),
            Err(VehicleError::Markup(_))
        ));
    }

    #[test]
    fn test_config_sets_fallback_size() {
        let config = LoaderConfig::from_toml_str("fallback_volume_size = [8, 8, 4]").unwrap();
        let mut reg = VehicleRegistry::with_config(Arc::new(ImageCatalog::new()), &config);
        let def = reg
            .define(&roxmltree::Document::parse(r#"<v id="a" type="ground"/>"#).unwrap().root_element())
            .unwrap();
        assert_eq!(def.voxel_map.size(), skyway_shared::Vec3i::new(8, 8, 4));
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VehicleRegistry>();
    }
}
