//! jzer-core - Core library for the Salon JZER site
//!
//! This crate contains the video model, the object-storage collaborator and
//! its backends, and the UI-independent controllers (library reader, upload,
//! delete confirmation, active nav section) used by the desktop shell.

pub mod config;
pub mod delete;
pub mod error;
pub mod library;
pub mod models;
pub mod nav;
pub mod storage;
pub mod upload;
pub mod util;

pub use error::{Error, Result};
pub use models::{SelectedFile, StoredObject, VideoAsset};
pub use storage::VideoStorage;
