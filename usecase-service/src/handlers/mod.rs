//! HTTP handlers for usecase-service.

pub mod health;
pub mod usecases;

pub use health::{health_check, readiness_check};
pub use usecases::{get_options, recommend_usecases};
