//! Core utilities shared by every pricing component

pub mod coerce;
