//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from application logic:
//! - Resolving the active theme's color palette
//! - Assigning accent colors to navigation tiles

pub mod color_mapping;
