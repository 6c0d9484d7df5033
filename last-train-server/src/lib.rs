//! Last-train-home web server.
//!
//! A small server-rendered app: pick two stations (or two numbers),
//! submit the form, and the answer is stashed in your session and shown
//! once on the next page load. The station picker is fed from a bundled
//! extract of the CORPUS rail reference dataset, filtered down to
//! public passenger stations.

pub mod catalog;
pub mod domain;
pub mod session;
pub mod web;
