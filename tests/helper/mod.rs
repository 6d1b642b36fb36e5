//! Shared test utilities

#![allow(dead_code)]

mod fakes;

pub use fakes::*;
