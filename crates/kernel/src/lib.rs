//! Shared configuration for biblio services.

pub mod settings;

pub use settings::{Environment, LogFormat, ServerSettings, Settings, TelemetrySettings};
