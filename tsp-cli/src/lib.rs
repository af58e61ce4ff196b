//! A crate which contains extensions used by TSP command line interface: solver configuration
//! reading and result formatting.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod extensions;
