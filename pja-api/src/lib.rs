//! Async boundary to the youth panel's data service.
//!
//! All heavy aggregation happens server-side; this crate only issues plain
//! GETs and deserializes the JSON/GeoJSON payloads. Payloads are transient:
//! each refresh replaces the previous one wholesale, nothing is merged.

pub mod client;
pub mod models;

pub use client::{ApiClient, FetchError};
pub use models::{
    DashboardStats, Feature, FeatureCollection, RaceDistribution, Ranking, RankingEntry,
};
