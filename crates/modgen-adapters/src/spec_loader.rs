//! JSON specification loader.
//!
//! Reads one or more documents and concatenates them, in argument order,
//! into a single [`Specification`].
//!
//! # Document format
//!
//! ```json
//! [
//!     {
//!         "name": "Nextsim::IIceAlbedo",
//!         "implementations": [
//!             "Nextsim::CCSMIceAlbedo",
//!             "Nextsim::SMUIceAlbedo"
//!         ]
//!     }
//! ]
//! ```
//!
//! Extra keys in a record are ignored. A record without `name` or
//! `implementations` is a parse error.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use modgen_core::{
    application::{ApplicationError, ports::SpecificationSource},
    domain::{DomainValidator as validator, Specification},
    error::{ModgenError, ModgenResult},
};

/// Loads and merges specification documents from disk.
#[derive(Debug, Clone)]
pub struct JsonSpecLoader {
    paths: Vec<PathBuf>,
}

impl JsonSpecLoader {
    /// Document read when no path is given.
    pub const DEFAULT_DOCUMENT: &'static str = "modules.json";

    /// Loader over `paths`, falling back to [`Self::DEFAULT_DOCUMENT`] when
    /// the list is empty.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        if paths.is_empty() {
            paths.push(PathBuf::from(Self::DEFAULT_DOCUMENT));
        }
        Self { paths }
    }

    /// Documents this loader will read, in order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Parse a single document. `path` is only used in error messages.
    pub fn parse_document(path: &Path, text: &str) -> ModgenResult<Specification> {
        serde_json::from_str(text).map_err(|e| {
            ApplicationError::SpecParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn read_document(path: &Path) -> ModgenResult<Specification> {
        let text = fs::read_to_string(path).map_err(|e| -> ModgenError {
            match e.kind() {
                io::ErrorKind::NotFound => ApplicationError::SpecNotFound {
                    path: path.to_path_buf(),
                },
                _ => ApplicationError::SpecRead {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                },
            }
            .into()
        })?;

        Self::parse_document(path, &text)
    }
}

impl Default for JsonSpecLoader {
    fn default() -> Self {
        Self::new(Vec::<PathBuf>::new())
    }
}

impl SpecificationSource for JsonSpecLoader {
    #[instrument(skip_all, fields(documents = self.paths.len()))]
    fn load(&self) -> ModgenResult<Specification> {
        let mut spec = Specification::default();

        for path in &self.paths {
            let document = Self::read_document(path)?;
            debug!(
                path = %path.display(),
                interfaces = document.len(),
                "Loaded specification document"
            );
            spec.extend(document);
        }

        validator::validate_specification(&spec).map_err(ModgenError::Domain)?;

        debug!(
            interfaces = spec.len(),
            implementations = spec.implementation_count(),
            "Specification merged"
        );
        Ok(spec)
    }
}
