//! Client for the public Reddit listing API, `rising` sort only.

pub mod index;
