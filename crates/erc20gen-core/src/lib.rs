//! erc20gen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the erc20gen
//! token generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           erc20gen-cli (CLI)            │
//! │     (flags, prompts, config file)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (ArtifactRenderer, Filesystem)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    erc20gen-adapters (Infrastructure)   │
//! │   (TeraRenderer, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (TokenConfig, validation, composition) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use erc20gen_core::{
//!     application::{GenerateService, OutputLayout},
//!     domain::{Feature, TokenConfig},
//! };
//!
//! // 1. Describe the token
//! let config = TokenConfig::new("My Token", "MTK")
//!     .with_initial_supply("1000000")
//!     .with_feature(Feature::Mintable);
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(renderer, filesystem);
//! service.generate(config, &OutputLayout::new("./contracts")).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationReport, OutputLayout, RenderedArtifact,
        ports::{ArtifactRenderer, Filesystem},
    };
    pub use crate::domain::{
        AccessControl, ArtifactKind, Feature, TokenConfig, security_checklist, validate,
    };
    pub use crate::error::{Erc20genError, Erc20genResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
