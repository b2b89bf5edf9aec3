//! Background search control: start, observe, cancel.

mod controller;

pub use controller::{Controller, SearchJob};
