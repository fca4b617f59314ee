//! Data layer: loading, group extraction, cleaning and statistics.
//!
//! Architecture:
//! ```text
//!  .xlsx / .csv / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Table
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  groups   │  fixed column ranges → 4 raw sequences
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  clean    │  drop empty / NaN / ±inf
//!   └──────────┘
//!        │
//!        ├──────────────────┐
//!        ▼                  ▼
//!   ┌──────────────┐  ┌──────────┐
//!   │ distribution  │  │ compare   │  histogram + KDE / long table + boxes
//!   └──────────────┘  └──────────┘
//! ```
//!
//! `pipeline` chains the stages into one fallible call.

pub mod clean;
pub mod compare;
pub mod distribution;
pub mod export;
pub mod groups;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod stats;
