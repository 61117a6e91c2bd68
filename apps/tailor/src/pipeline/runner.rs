//! Pipeline Runner — executes the analysis steps strictly in order.
//!
//! Flow: resume analysis → job analysis → suggestions. Each prompt is its step's
//! template with earlier outputs substituted verbatim, so a step cannot start
//! until everything it names has been produced.

use std::collections::HashMap;
use std::time::Instant;

use anyhow::anyhow;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::prompts::{EXPECTED_OUTPUT_PREFIX, PLAIN_TEXT_INSTRUCTION};
use crate::llm_client::LanguageModel;
use crate::pipeline::prompts::AGENT_SYSTEM_TEMPLATE;
use crate::pipeline::steps::{AgentProfile, PipelineStep, StepId, StepInput, PIPELINE};

/// Outputs of one full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub resume_analysis: String,
    pub job_analysis: String,
    pub suggestions: String,
}

/// Runs the three tailoring steps against `model` and returns every step's output.
pub async fn run_pipeline(
    model: &dyn LanguageModel,
    job_description: &str,
    resume_text: &str,
) -> Result<PipelineOutput, AppError> {
    let mut outputs = run_steps(model, &PIPELINE, job_description, resume_text).await?;

    let mut take = |id: StepId| {
        outputs
            .remove(&id)
            .ok_or_else(|| AppError::Internal(anyhow!("pipeline produced no output for {id:?}")))
    };

    Ok(PipelineOutput {
        resume_analysis: take(StepId::ResumeAnalysis)?,
        job_analysis: take(StepId::JobAnalysis)?,
        suggestions: take(StepId::Suggestions)?,
    })
}

/// Executes `steps` in slice order. Stops at the first failed model call.
pub(crate) async fn run_steps(
    model: &dyn LanguageModel,
    steps: &[PipelineStep],
    job_description: &str,
    resume_text: &str,
) -> Result<HashMap<StepId, String>, AppError> {
    let mut outputs: HashMap<StepId, String> = HashMap::with_capacity(steps.len());

    for (index, step) in steps.iter().enumerate() {
        let mut vars: Vec<(&'static str, &str)> = Vec::with_capacity(step.inputs.len());
        for input in step.inputs {
            let value = match input {
                StepInput::ResumeText => resume_text,
                StepInput::JobDescription => job_description,
                StepInput::Output(dep) => outputs.get(dep).map(String::as_str).ok_or_else(|| {
                    AppError::Internal(anyhow!(
                        "step {:?} needs the output of {:?}, which has not run",
                        step.id,
                        dep
                    ))
                })?,
            };
            vars.push((input.key(), value));
        }

        let prompt = build_task_prompt(step, &vars);
        let system = build_system_prompt(&step.agent);

        info!(
            "Step {}/{} ({}) starting, prompt {} chars",
            index + 1,
            steps.len(),
            step.agent.role,
            prompt.chars().count()
        );
        let started = Instant::now();

        let output = model
            .complete(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("{} step failed: {e}", step.agent.role)))?;

        info!(
            "Step {}/{} ({}) finished in {}ms, output {} chars",
            index + 1,
            steps.len(),
            step.agent.role,
            started.elapsed().as_millis(),
            output.chars().count()
        );
        debug!("{} output:\n{}", step.agent.role, output);

        outputs.insert(step.id, output);
    }

    Ok(outputs)
}

pub(crate) fn build_task_prompt(step: &PipelineStep, vars: &[(&str, &str)]) -> String {
    format!(
        "{}\n\n{} {}",
        fill_template(step.template, vars),
        EXPECTED_OUTPUT_PREFIX,
        step.expected_output
    )
}

pub(crate) fn build_system_prompt(agent: &AgentProfile) -> String {
    fill_template(
        AGENT_SYSTEM_TEMPLATE,
        &[
            ("role", agent.role),
            ("backstory", agent.backstory),
            ("goal", agent.goal),
            ("format", PLAIN_TEXT_INSTRUCTION),
        ],
    )
}

/// Replaces `{name}` placeholders in a single pass.
///
/// Substituted values are never rescanned, so braces inside a resume or a model
/// answer come through untouched. Unknown placeholders are left as written.
pub(crate) fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
