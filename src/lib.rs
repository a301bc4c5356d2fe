#![deny(clippy::all, nonstandard_style, rust_2018_idioms)]

//! Data shapes of the fan art community pages: leaderboard rows, hall of
//! fame entries, artist profiles with their artworks, and the closed set of
//! badges.

#[macro_use]
extern crate eyre;

#[macro_use]
extern crate tracing;

pub use self::{
    document::{Document, Summary},
    shape::Shape,
};

pub mod model;

mod document;
mod shape;
