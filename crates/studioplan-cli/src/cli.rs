//! Plan subcommands and their handlers.
//!
//! Argument structs carry the clap attributes and convert into the core's
//! parameter types, so core params stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use studioplan_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    export::{ExportOptions, Exporter, PngSurface},
    models::{SavedPlan, StrategicPlan},
    params::Id,
    report::StaticGenerator,
    Planner,
};

use crate::renderer::TerminalRenderer;

/// Show details of a saved plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    pub id: String,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Save a new plan from a plan file and its report
#[derive(Args)]
pub struct CreatePlanArgs {
    /// JSON file with the plan data (see `sp plan template`)
    #[arg(long)]
    pub plan_file: PathBuf,
    /// Markdown file with the generated report
    #[arg(long)]
    pub report_file: PathBuf,
}

/// Replace the data or report of a saved plan
#[derive(Args)]
pub struct UpdatePlanArgs {
    /// ID of the plan to update
    pub id: String,
    /// JSON file with the new plan data
    #[arg(long)]
    pub plan_file: Option<PathBuf>,
    /// Markdown file with the new report
    #[arg(long)]
    pub report_file: Option<PathBuf>,
}

/// Delete a saved plan
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: String,
}

impl From<DeletePlanArgs> for Id {
    fn from(val: DeletePlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Export a saved plan as a paginated PDF
#[derive(Args)]
pub struct ExportPlanArgs {
    /// ID of the plan to export
    pub id: String,
    /// PNG rendering of the plan document
    #[arg(long)]
    pub surface: PathBuf,
    /// Directory to write the PDF to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
    /// Footer text shown on every page
    #[arg(long)]
    pub brand: Option<String>,
}

impl From<ExportPlanArgs> for ExportOptions {
    fn from(val: ExportPlanArgs) -> Self {
        ExportOptions::default()
            .with_output_dir(val.output_dir)
            .with_brand(val.brand)
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List saved plans, newest first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a saved plan and its report
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Print a blank plan file for the current year
    #[command(alias = "t")]
    Template,
    /// Save a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Update a saved plan
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Delete a saved plan
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
    /// Export a saved plan as PDF
    #[command(alias = "e")]
    Export(ExportPlanArgs),
}

/// Runs plan commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Template => self.print_template(),
            PlanCommands::Create(args) => self.create_plan(args).await,
            PlanCommands::Update(args) => self.update_plan(args).await,
            PlanCommands::Delete(args) => self.delete_plan(&args.into()).await,
            PlanCommands::Export(args) => self.export_plan(args).await,
        }
    }

    pub async fn list_plans(&self) -> Result<()> {
        let plans = self
            .planner
            .load_plan_list()
            .await
            .context("Failed to list plans")?;

        self.renderer.render(&format!("# Saved Plans\n\n{plans}"))
    }

    async fn show_plan(&self, params: &Id) -> Result<()> {
        let plan = self.require_plan(params).await?;
        self.renderer.render(&plan.to_string())
    }

    /// Prints raw JSON so it can be redirected into a plan file.
    fn print_template(&self) -> Result<()> {
        let template = serde_json::to_string_pretty(&StrategicPlan::for_current_year())
            .context("Failed to serialize plan template")?;
        println!("{template}");
        Ok(())
    }

    async fn create_plan(&self, args: CreatePlanArgs) -> Result<()> {
        let plan = read_plan_file(&args.plan_file)?;
        let generator = StaticGenerator::new(read_report_file(&args.report_file)?);

        let saved = self
            .planner
            .generate_and_create(&generator, &plan)
            .await
            .context("Failed to create plan")?;

        self.renderer.render(&CreateResult::new(saved).to_string())
    }

    async fn update_plan(&self, args: UpdatePlanArgs) -> Result<()> {
        if args.plan_file.is_none() && args.report_file.is_none() {
            return Err(anyhow!("Nothing to update: pass --plan-file or --report-file"));
        }

        let mut plan = self.require_plan(&Id { id: args.id }).await?;
        let mut changes = Vec::new();

        if let Some(path) = &args.plan_file {
            plan.plan_data = read_plan_file(path)?;
            changes.push(format!("Replaced plan data from {}", path.display()));
        }
        if let Some(path) = &args.report_file {
            plan.report = read_report_file(path)?;
            changes.push(format!("Replaced report from {}", path.display()));
        }

        let updated = self
            .planner
            .update_plan(&plan)
            .await
            .with_context(|| format!("Failed to update plan {}", plan.id))?;

        self.renderer
            .render(&UpdateResult::with_changes(updated, changes).to_string())
    }

    async fn delete_plan(&self, params: &Id) -> Result<()> {
        let mut view = self
            .planner
            .load_plan_list()
            .await
            .context("Failed to list plans")?;
        let existing = view.find(&params.id).cloned();

        self.planner
            .delete_plan_optimistic(&mut view, params)
            .await
            .with_context(|| format!("Failed to delete plan {}", params.id))?;

        let output = match existing {
            Some(plan) => DeleteResult::new(plan).to_string(),
            None => {
                debug!("Plan {} was not in the store", params.id);
                OperationStatus::success(format!("No plan with ID {}; nothing to delete", params.id))
                    .to_string()
            }
        };
        self.renderer.render(&output)
    }

    async fn export_plan(&self, args: ExportPlanArgs) -> Result<()> {
        let plan = self.require_plan(&Id { id: args.id.clone() }).await?;
        let surface = PngSurface::new(&args.surface);
        let exporter = Exporter::new(args.into());

        let outcome = exporter
            .export(
                &surface,
                &plan.plan_data.studio_name,
                &plan.plan_data.planning_year,
            )
            .await
            .with_context(|| format!("Failed to export plan {}", plan.id))?;

        self.renderer
            .render(&OperationStatus::from(&outcome).to_string())
    }

    async fn require_plan(&self, params: &Id) -> Result<SavedPlan> {
        self.planner
            .get_plan(params)
            .await
            .context("Failed to load plan")?
            .ok_or_else(|| anyhow!("Plan with ID {} not found", params.id))
    }
}

fn read_plan_file(path: &Path) -> Result<StrategicPlan> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Plan file {} is not a valid plan", path.display()))
}

fn read_report_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read report file {}", path.display()))
}
