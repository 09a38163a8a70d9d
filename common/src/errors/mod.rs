mod rest;

pub use rest::*;
