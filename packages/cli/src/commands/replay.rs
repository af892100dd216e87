use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Deserialize;
use sitebuilder_editor::{
    ClickTarget, DragPayload, DropTarget, EditSession, EditorConfig, HtmlOptions,
    Mutation, Outcome,
};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON script: an array of steps
    pub script: PathBuf,

    /// Output format for the final document
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Start from an empty canvas instead of the starter document
    #[arg(long)]
    pub empty: bool,

    /// Print the outcome of every step
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

/// One line of a replay script
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ScriptStep {
    /// Dispatch a mutation as-is
    Mutation(Mutation),
    /// Run a UI gesture through the session
    Gesture(Gesture),
}

/// Gestures a script can perform
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Gesture {
    DragEnter { id: String },
    DragLeave { id: String },
    Drop { payload: DragPayload, target: DropTarget },
    Click { target: ClickTarget },
    /// Delete with the confirmation prompt answered
    Delete { id: String, confirm: bool },
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Step {step}: reference {reference} is out of range (canvas has {len} components)")]
    BadReference {
        step: usize,
        reference: String,
        len: usize,
    },
}

pub fn replay(args: ReplayArgs, cwd: &str) -> Result<()> {
    let mut config = EditorConfig::load(cwd)?;
    if args.empty {
        config.seed_document = false;
    }

    let source = fs::read_to_string(&args.script)
        .with_context(|| format!("Cannot read script {}", args.script.display()))?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&source)
        .with_context(|| format!("Invalid script {}", args.script.display()))?;

    let mut session = EditSession::new(config);
    info!(steps = steps.len(), "Replaying script");

    for (index, step) in steps.into_iter().enumerate() {
        let step = resolve_step(step, index, &session)?;
        let label = step_label(&step);
        let outcome = run_step(&mut session, step);

        if args.verbose {
            match outcome {
                Outcome::Applied => eprintln!("  {} {}", "✓".green(), label),
                Outcome::Unchanged(reason) => {
                    eprintln!("  {} {} ({:?})", "·".dimmed(), label, reason)
                }
            }
        }
    }

    let output = match args.format {
        OutputFormat::Html => session.render().to_html(&HtmlOptions::default()),
        OutputFormat::Json => serde_json::to_string_pretty(session.document())?,
    };
    println!("{}", output);

    Ok(())
}

pub fn run_step(session: &mut EditSession, step: ScriptStep) -> Outcome {
    match step {
        ScriptStep::Mutation(mutation) => session.dispatch(mutation),
        ScriptStep::Gesture(gesture) => match gesture {
            Gesture::DragEnter { id } => {
                session.drag_enter(&id);
                Outcome::Applied
            }
            Gesture::DragLeave { id } => {
                session.drag_leave(&id);
                Outcome::Applied
            }
            Gesture::Drop { payload, target } => session.drop(&payload, &target),
            Gesture::Click { target } => session.click(&target),
            Gesture::Delete { id, confirm } => session.request_delete(&id, |_| confirm),
        },
    }
}

fn step_label(step: &ScriptStep) -> String {
    match step {
        ScriptStep::Mutation(mutation) => format!("mutation {}", mutation.name()),
        ScriptStep::Gesture(gesture) => match gesture {
            Gesture::DragEnter { id } => format!("drag enter {}", id),
            Gesture::DragLeave { id } => format!("drag leave {}", id),
            Gesture::Drop { payload, .. } => match payload {
                DragPayload::PaletteKind(kind) => format!("drop {} from palette", kind),
                DragPayload::Instance(id) => format!("drop {}", id),
            },
            Gesture::Click { target } => match target {
                ClickTarget::Instance(id) => format!("click {}", id),
                ClickTarget::CanvasBackground => "click canvas".to_string(),
            },
            Gesture::Delete { id, .. } => format!("delete {}", id),
        },
    }
}

/// Ids written as `#N` refer to the component at canvas position N when the
/// step runs, so scripts need not know generated ids.
fn resolve_ref(reference: String, step: usize, session: &EditSession) -> Result<String, ReplayError> {
    let Some(position) = reference.strip_prefix('#') else {
        return Ok(reference);
    };

    let doc = session.document();
    position
        .parse::<usize>()
        .ok()
        .and_then(|i| doc.sequence().get(i))
        .map(|c| c.id().to_string())
        .ok_or(ReplayError::BadReference {
            step,
            reference: reference.clone(),
            len: doc.len(),
        })
}

fn resolve_step(step: ScriptStep, index: usize, session: &EditSession) -> Result<ScriptStep, ReplayError> {
    let r = |reference: String| resolve_ref(reference, index, session);

    let step = match step {
        ScriptStep::Mutation(mutation) => ScriptStep::Mutation(match mutation {
            Mutation::Move { drag_id, drop_id } => Mutation::Move {
                drag_id: r(drag_id)?,
                drop_id: r(drop_id)?,
            },
            Mutation::UpdateProps { id, props } => Mutation::UpdateProps { id: r(id)?, props },
            Mutation::Select { id } => Mutation::Select {
                id: id.map(r).transpose()?,
            },
            Mutation::Delete { id } => Mutation::Delete { id: r(id)? },
            add @ Mutation::Add { .. } => add,
        }),
        ScriptStep::Gesture(gesture) => ScriptStep::Gesture(match gesture {
            Gesture::DragEnter { id } => Gesture::DragEnter { id: r(id)? },
            Gesture::DragLeave { id } => Gesture::DragLeave { id: r(id)? },
            Gesture::Drop { payload, target } => Gesture::Drop {
                payload: match payload {
                    DragPayload::Instance(id) => DragPayload::Instance(r(id)?),
                    palette => palette,
                },
                target: match target {
                    DropTarget::Instance(id) => DropTarget::Instance(r(id)?),
                    other => other,
                },
            },
            Gesture::Click { target } => Gesture::Click {
                target: match target {
                    ClickTarget::Instance(id) => ClickTarget::Instance(r(id)?),
                    other => other,
                },
            },
            Gesture::Delete { id, confirm } => Gesture::Delete { id: r(id)?, confirm },
        }),
    };

    Ok(step)
}
