//! Generate Service - main application orchestrator.
//!
//! This service coordinates a full regeneration:
//! 1. Validate the specification
//! 2. For each artifact, in order: render into a scoped buffer, then write it
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        Artifact, ArtifactKind, DomainValidator as validator, GenerationOptions, Specification,
    },
    emit::{Emitter, standard_emitters},
    error::{ModgenError, ModgenResult},
};

/// One artifact written by [`GenerateService::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub interfaces: usize,
    pub implementations: usize,
    pub artifacts: Vec<WrittenArtifact>,
}

impl GenerationReport {
    pub fn total_bytes(&self) -> usize {
        self.artifacts.iter().map(|a| a.bytes).sum()
    }
}

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service writing through `filesystem`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use modgen_core::application::{GenerateService, ports::*};
    ///
    /// let service = GenerateService::new(
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Regenerate all four artifacts.
    ///
    /// Fails fast: on error, artifacts already written by this call stay on
    /// disk and must be treated as unusable.
    #[instrument(
        skip_all,
        fields(
            interfaces = spec.len(),
            ipp_prefix = %options.ipp_prefix,
            hpp_prefix = %options.hpp_prefix
        )
    )]
    pub fn generate(
        &self,
        spec: &Specification,
        options: &GenerationOptions,
    ) -> ModgenResult<GenerationReport> {
        info!(
            "Generating {} artifacts for {} interfaces",
            ArtifactKind::ALL.len(),
            spec.len()
        );

        validator::validate_specification(spec).map_err(ModgenError::Domain)?;

        let mut report = GenerationReport {
            interfaces: spec.len(),
            implementations: spec.implementation_count(),
            artifacts: Vec::with_capacity(ArtifactKind::ALL.len()),
        };

        for emitter in standard_emitters(options) {
            let artifact = render_artifact(emitter.as_ref(), spec)?;
            let path = artifact.kind.path_with_prefix(&options.ipp_prefix);
            self.write_artifact(&path, &artifact)?;

            report.artifacts.push(WrittenArtifact {
                kind: artifact.kind,
                path,
                bytes: artifact.len(),
            });
        }

        info!(bytes = report.total_bytes(), "Generation completed successfully");
        Ok(report)
    }

    fn write_artifact(&self, path: &Path, artifact: &Artifact) -> ModgenResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.filesystem.exists(parent) {
                debug!(dir = %parent.display(), "Creating output directory");
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem.write_file(path, &artifact.content)?;
        debug!(
            artifact = %artifact.kind,
            path = %path.display(),
            bytes = artifact.len(),
            "Artifact written"
        );
        Ok(())
    }
}

/// Render all four artifacts in memory without writing anything.
#[instrument(skip_all, fields(interfaces = spec.len()))]
pub fn render_all(
    spec: &Specification,
    options: &GenerationOptions,
) -> ModgenResult<Vec<Artifact>> {
    validator::validate_specification(spec).map_err(ModgenError::Domain)?;

    standard_emitters(options)
        .iter()
        .map(|emitter| render_artifact(emitter.as_ref(), spec))
        .collect()
}

fn render_artifact(emitter: &dyn Emitter, spec: &Specification) -> ModgenResult<Artifact> {
    let kind = emitter.kind();
    // Buffer lives only for this artifact.
    let content = emitter
        .render(spec)
        .map_err(|e| ApplicationError::RenderingFailed {
            artifact: kind,
            reason: e.to_string(),
        })?;
    Ok(Artifact::new(kind, content))
}
