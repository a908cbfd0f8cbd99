//! Daily Puzzle - puzzle-of-the-day API and image proxy.
//!
//! Serves today's puzzle (rounds of shuffled image links, with the answer
//! flag stripped) and streams the images themselves out of object storage so
//! clients never see storage URLs.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
