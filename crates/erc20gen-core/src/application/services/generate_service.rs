//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate and normalize the token configuration
//! 2. Render every requested artifact
//! 3. Write artifacts into the Hardhat-style output layout
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{ArtifactRenderer, Filesystem},
    domain::{ArtifactKind, TokenConfig},
    error::{Erc20genError, Erc20genResult},
};

/// One rendered artifact, ready to be written or printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub content: String,
}

/// Where each artifact kind lands on disk.
///
/// The contract goes into the chosen output directory; the deploy script and
/// the test skeleton go into `scripts/` and `test/` siblings of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    contracts_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(contracts_dir: impl Into<PathBuf>) -> Self {
        Self {
            contracts_dir: contracts_dir.into(),
        }
    }

    pub fn contracts_dir(&self) -> &Path {
        &self.contracts_dir
    }

    /// Directory an artifact of `kind` is written to.
    pub fn dir_for(&self, kind: ArtifactKind) -> PathBuf {
        match kind {
            ArtifactKind::Contract => self.contracts_dir.clone(),
            ArtifactKind::DeployScript => self.contracts_dir.join("..").join("scripts"),
            ArtifactKind::TestSkeleton => self.contracts_dir.join("..").join("test"),
        }
    }

    pub fn path_for(&self, artifact: &RenderedArtifact) -> PathBuf {
        self.dir_for(artifact.kind).join(&artifact.file_name)
    }
}

/// Outcome of a full generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// The normalized configuration that was rendered.
    pub config: TokenConfig,
    /// Written files in generation order.
    pub written: Vec<(ArtifactKind, PathBuf)>,
}

/// Main generation service.
///
/// Owns no state besides its adapters, so one instance can serve any number
/// of configurations.
pub struct GenerateService {
    renderer: Box<dyn ArtifactRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use erc20gen_core::application::{GenerateService, ports::*};
    ///
    /// let service = GenerateService::new(
    ///     renderer,   // impl ArtifactRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(renderer: Box<dyn ArtifactRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Validate a configuration, returning its normalized form.
    pub fn prepare(&self, mut config: TokenConfig) -> Erc20genResult<TokenConfig> {
        config.validate().map_err(Erc20genError::Domain)?;
        debug!(
            symbol = %config.symbol,
            access = %config.access_control,
            features = ?config.features(),
            "Configuration validated"
        );
        Ok(config)
    }

    /// Render a single artifact from an already validated configuration.
    pub fn render(
        &self,
        kind: ArtifactKind,
        config: &TokenConfig,
    ) -> Erc20genResult<RenderedArtifact> {
        let content = self.renderer.render(kind, config)?;
        debug!(artifact = %kind, bytes = content.len(), "Artifact rendered");
        Ok(RenderedArtifact {
            kind,
            file_name: config.file_name(kind),
            content,
        })
    }

    /// Render every artifact the configuration requests, contract first.
    pub fn render_all(&self, config: &TokenConfig) -> Erc20genResult<Vec<RenderedArtifact>> {
        config
            .requested_artifacts()
            .into_iter()
            .map(|kind| self.render(kind, config))
            .collect()
    }

    /// Write one artifact into the layout, creating its directory as needed.
    pub fn write(
        &self,
        artifact: &RenderedArtifact,
        layout: &OutputLayout,
    ) -> Erc20genResult<PathBuf> {
        let dir = layout.dir_for(artifact.kind);
        self.filesystem.create_dir_all(&dir)?;

        let path = layout.path_for(artifact);
        if self.filesystem.exists(&path) {
            debug!(path = %path.display(), "Overwriting existing file");
        }
        self.filesystem.write_file(&path, &artifact.content)?;

        info!(artifact = %artifact.kind, path = %path.display(), "Artifact written");
        Ok(path)
    }

    /// Generate a token end to end.
    ///
    /// Every artifact is rendered before anything is written, so a render
    /// failure leaves the output directory untouched.
    #[instrument(
        skip_all,
        fields(
            token = %config.name,
            out = %layout.contracts_dir().display()
        )
    )]
    pub fn generate(
        &self,
        config: TokenConfig,
        layout: &OutputLayout,
    ) -> Erc20genResult<GenerationReport> {
        let config = self.prepare(config)?;
        info!(
            "Generating {} ({}) with {} artifact(s)",
            config.name,
            config.symbol,
            config.requested_artifacts().len()
        );

        let artifacts = self.render_all(&config)?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            let path = self.write(artifact, layout)?;
            written.push((artifact.kind, path));
        }

        info!("Generation completed successfully");
        Ok(GenerationReport { config, written })
    }
}
