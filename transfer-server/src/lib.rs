//! Station transfer guide server.
//!
//! Turns the walking route between two tracks of a station, as delivered
//! by the journey-maps transfer API, into plain-language turn-by-turn
//! instructions.

pub mod cache;
pub mod domain;
pub mod features;
pub mod geometry;
pub mod instructions;
pub mod journey_maps;
pub mod stations;
pub mod walkable;
pub mod web;
