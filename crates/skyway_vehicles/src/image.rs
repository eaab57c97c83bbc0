//! # Image Handles
//!
//! Sprites are opaque, shared image handles. The loaders never decode pixel
//! data; they ask an [`ImageResolver`] to turn a name into a handle and keep
//! whatever comes back.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A renderable image known to the asset pipeline.
#[derive(Debug, PartialEq, Eq)]
pub struct Image {
    /// Name the image was requested by.
    pub name: String,
    /// Backing file, if the image came from disk.
    pub path: Option<PathBuf>,
}

impl Image {
    /// Creates an image that exists only in memory.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }
}

/// Shared image handle. Equal names resolved by the same resolver share one
/// allocation.
pub type ImageHandle = Arc<Image>;

/// Resolves image names to handles.
pub trait ImageResolver {
    /// Returns the image for `name`, or `None` if it cannot be loaded.
    fn resolve(&self, name: &str) -> Option<ImageHandle>;
}

impl<R: ImageResolver + ?Sized> ImageResolver for Arc<R> {
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        (**self).resolve(name)
    }
}

/// In-memory name → image table.
#[derive(Debug, Default)]
pub struct ImageCatalog {
    images: HashMap<String, ImageHandle>,
}

impl ImageCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding one in-memory image per name.
    #[must_use]
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.insert(Image::named(name));
        }
        catalog
    }

    /// Adds an image under its own name, replacing any previous entry.
    pub fn insert(&mut self, image: Image) -> ImageHandle {
        let handle = Arc::new(image);
        self.images.insert(handle.name.clone(), Arc::clone(&handle));
        handle
    }

    /// Number of images in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the catalog holds no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageResolver for ImageCatalog {
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        self.images.get(name).cloned()
    }
}

/// Resolves names to files below an asset root.
///
/// A name resolves if the file exists. Handles are cached so every
/// definition using the same name shares one handle.
#[derive(Debug)]
pub struct DirectoryImageResolver {
    root: PathBuf,
    cache: Mutex<HashMap<String, ImageHandle>>,
}

impl DirectoryImageResolver {
    /// Creates a resolver rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Asset root names are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of distinct images resolved so far.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.lock().len()
    }
}

impl ImageResolver for DirectoryImageResolver {
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        if name.is_empty() {
            return None;
        }
        let mut cache = self.cache.lock();
        if let Some(handle) = cache.get(name) {
            return Some(Arc::clone(handle));
        }
        let path = self.root.join(name);
        if !path.is_file() {
            return None;
        }
        let handle = Arc::new(Image {
            name: name.to_owned(),
            path: Some(path),
        });
        cache.insert(name.to_owned(), Arc::clone(&handle));
        Some(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_resolves_known_names() {
        let catalog = ImageCatalog::with_names(["hover_n.png", "hover_e.png"]);
        assert_eq!(catalog.len(), 2);

        let a = catalog.resolve("hover_n.png").unwrap();
        let b = catalog.resolve("hover_n.png").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(catalog.resolve("missing.png").is_none());
    }

    #[test]
    fn test_directory_resolver_caches_handles() {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let root = std::env::temp_dir().join(format!("skyway_images_{id}"));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("car.png"), b"png").unwrap();

        let resolver = DirectoryImageResolver::new(&root);
        let a = resolver.resolve("car.png").unwrap();
        let b = resolver.resolve("car.png").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.path.as_deref(), Some(root.join("car.png").as_path()));
        assert!(resolver.resolve("truck.png").is_none());
        assert!(resolver.resolve("").is_none());
        assert_eq!(resolver.cached(), 1);

        std::fs::remove_dir_all(&root).ok();
    }
}
