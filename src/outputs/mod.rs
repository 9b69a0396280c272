//! Output generation for the JSON digest and the SMS-style text file.
//!
//! Both writers receive the same final sorted entry slice, so the two files
//! always describe the same run even when one write fails.
//!
//! # Submodules
//!
//! - [`json`]: serializes the full [`crate::models::Digest`] to `latest.json`
//! - [`sms`]: renders the top entries as pipe-separated lines in `latest.txt`

pub mod json;
pub mod sms;
