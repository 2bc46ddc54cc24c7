//! The schedule resolution module.
//!
//! Staged pipeline: the week-window calculator (in `weekboard-core`) fixes
//! the Monday–Sunday bounds, [`repository`] fetches the template/exception
//! slices overlapping them, [`resolver`] expands templates into baseline
//! occurrences and overlays exceptions, and [`service`] packages the sorted
//! result with navigation anchors.

pub mod model;
pub mod repository;
pub mod resolver;
pub mod service;
