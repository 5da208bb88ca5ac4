//! Utility modules for image fetching
//!
//! This module contains the leaf helpers the fetch loop calls:
//! - `files`: Output directory setup, filename derivation and saving
//! - `images`: Content-type checks, extension guessing and content hashing
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;
pub mod images;
