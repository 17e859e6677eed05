//! Core library for the Studioplan strategic planning application.
//!
//! This crate holds everything behind the planning wizard's interface: the
//! plan data model, the plan store with its remote and on-device backends,
//! the report generation capability, and the paginated document export.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the plan being edited and its saved snapshots
//! - **Store** ([`backend`], [`planner`]): one backend chosen at build time,
//!   reached through the [`Planner`] facade
//! - **Report** ([`report`]): narrative text through a [`report::ReportGenerator`]
//! - **Export** ([`export`]): a rendered surface sliced into A4 PDF pages
//! - **Display** ([`display`]): markdown output for the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use studioplan_core::{
//!     export::{ExportOptions, Exporter, PngSurface},
//!     models::StrategicPlan,
//!     params::CreatePlan,
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("plans.db"))
//!     .build()
//!     .await?;
//!
//! let mut plan_data = StrategicPlan::for_current_year();
//! plan_data.studio_name = "Ana Pilates".to_string();
//! let saved = planner
//!     .create_plan(&CreatePlan {
//!         plan_data,
//!         report: "# Strategic Plan".to_string(),
//!     })
//!     .await?;
//! println!("{saved}");
//!
//! let exporter = Exporter::new(ExportOptions::default().with_output_dir("exports"));
//! exporter
//!     .export(
//!         &PngSurface::new("rendered.png"),
//!         &saved.plan_data.studio_name,
//!         &saved.plan_data.planning_year,
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod db;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod params;
pub mod planner;
pub mod report;

// Re-export commonly used types
pub use backend::{BackendKind, PlanBackend};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, LocalDateTime, OperationStatus, UpdateResult};
pub use error::{PlanError, Result};
pub use export::{ExportOptions, ExportOutcome, Exporter};
pub use models::{PlanList, SavedPlan, StrategicPlan};
pub use params::{CreatePlan, Id, SavePlan};
pub use planner::{Planner, PlannerBuilder};
