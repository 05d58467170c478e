//! Core of the yacht marketplace search: the Trip Search Widget state
//! (modes, fields, panels, calendar), the query/route contract it navigates
//! with, and the listing view-models the result pages render.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fields;
pub mod listing;
pub mod mode;
pub mod panel;
pub mod platform;
pub mod query;
pub mod route;
pub mod widget;

pub use error::{Error, Result};
