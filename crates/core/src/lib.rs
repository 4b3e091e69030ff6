#![forbid(unsafe_code)]

pub mod catalogs;
pub mod error;
pub mod locator;
pub mod model;
pub mod scoring;
pub mod time;

pub use error::Error;
pub use locator::{Location, locate};
pub use model::{restart, submit};
pub use scoring::{Recommendation, Tier, TopicScore, TopicScores, recommend, score};
pub use time::Clock;
