//! Sola Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sola
//! project forging tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             sola-cli (CLI)              │
//! │     (auth / init / build commands)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (CredentialResolver, TemplateService,  │
//! │   ScaffoldService, GenerateService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │  (Filesystem, TemplateStore, Credential │
//! │   Source/Store, CompletionClient)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      sola-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sola_core::application::{ScaffoldService, ports::{Filesystem, TemplateStore}};
//!
//! # fn run(store: Box<dyn TemplateStore>, fs: Arc<dyn Filesystem>) -> sola_core::error::SolaResult<()> {
//! let service = ScaffoldService::new(store, fs);
//! let report = service.scaffold("my-project", ".")?;
//! println!("{} files rendered", report.rendered.len());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CredentialResolver, GenerateService, GenerationSettings, ScaffoldReport, ScaffoldService,
        StandardsSource, TemplateService,
        ports::{CompletionClient, CredentialSource, CredentialStore, Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        CompletionRequest, Credential, ProjectLayout, RenderContext, Standards,
    };
    pub use crate::error::{ErrorCategory, SolaError, SolaResult};
}
