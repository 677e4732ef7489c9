//! Six classical grid searches and a weighted ranking of their efficiency.

pub mod algorithms;
pub mod maze;
pub mod ranking;

#[cfg(test)]
mod test_utils;
