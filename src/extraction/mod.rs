// SPDX-License-Identifier: MPL-2.0
//! Client side of the metadata-extraction service boundary.
//!
//! The extraction service is an external HTTP collaborator: it receives one
//! image as a multipart upload and answers with a single metadata record.
//! This module owns the wire types ([`record::MetadataRecord`]) and the
//! upload call ([`client::upload_image`]). How the service actually parses
//! images is none of our business.

pub mod client;
pub mod record;

pub use client::upload_image;
pub use record::MetadataRecord;
