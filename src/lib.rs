//! Language Detection Service
//!
//! A small HTTP service that identifies the natural language of a text
//! snippet two ways: whatlang's trigram profiles ("traditional") and
//! lingua's pre-trained n-gram models ("pretrained").

#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod language_detection;
pub mod logging;
pub mod server;
pub mod types;

pub use error::{Error, Result};
pub use language_detection::{MultiDetector, PretrainedClassifier, TraditionalClassifier};
pub use types::{DetectionMethod, DetectionResponse, Strategy};
