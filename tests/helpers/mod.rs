// Not every test binary touches every fixture handle.
#![allow(dead_code)]

pub mod fixtures;
