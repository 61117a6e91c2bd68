//! The three analysis steps as plain records.
//!
//! A step names the agent it speaks as, the instruction template it fills, the
//! expected-output criteria appended to the prompt, and the inputs it needs.
//! Order in [`PIPELINE`] is execution order.

use crate::pipeline::prompts::{
    JOB_ANALYSIS_EXPECTED, JOB_ANALYSIS_TEMPLATE, RESUME_ANALYSIS_EXPECTED,
    RESUME_ANALYSIS_TEMPLATE, SUGGESTIONS_EXPECTED, SUGGESTIONS_TEMPLATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    ResumeAnalysis,
    JobAnalysis,
    Suggestions,
}

impl StepId {
    /// Template placeholder under which this step's output is exposed to later steps.
    pub fn output_key(self) -> &'static str {
        match self {
            StepId::ResumeAnalysis => "resume_analysis",
            StepId::JobAnalysis => "job_analysis",
            StepId::Suggestions => "suggestions",
        }
    }
}

/// Something a step's template consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepInput {
    ResumeText,
    JobDescription,
    Output(StepId),
}

impl StepInput {
    pub fn key(self) -> &'static str {
        match self {
            StepInput::ResumeText => "resume_text",
            StepInput::JobDescription => "job_description",
            StepInput::Output(id) => id.output_key(),
        }
    }
}

/// Framing for the system instruction. Does not change control flow.
#[derive(Debug, Clone, Copy)]
pub struct AgentProfile {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineStep {
    pub id: StepId,
    pub agent: AgentProfile,
    pub template: &'static str,
    pub expected_output: &'static str,
    pub inputs: &'static [StepInput],
}

pub const RESUME_ANALYZER: AgentProfile = AgentProfile {
    role: "Resume Analysis Expert",
    goal: "Thoroughly analyze the provided resume and identify its strengths and weaknesses.",
    backstory: "You are a seasoned resume analyst with years of experience in helping job \
        seekers optimize their resumes. You are adept at identifying key skills, experiences, \
        and formatting issues.",
};

pub const JOB_ANALYZER: AgentProfile = AgentProfile {
    role: "Job Description Expert",
    goal: "Analyze the job description and extract key requirements, skills, and keywords.",
    backstory: "You are a highly skilled job description analyst. You excel at identifying \
        the core requirements, desired skills, and important keywords from any job posting.",
};

pub const IMPROVEMENT_SUGGESTOR: AgentProfile = AgentProfile {
    role: "Resume Improvement Specialist",
    goal: "Provide specific, actionable suggestions to improve the resume based on the job \
        description.",
    backstory: "You are a master resume writer and career coach. You are known for your \
        ability to craft compelling resumes that highlight a candidate's strengths and align \
        them perfectly with job requirements. You provide concrete, easy-to-implement \
        suggestions.",
};

pub const PIPELINE: [PipelineStep; 3] = [
    PipelineStep {
        id: StepId::ResumeAnalysis,
        agent: RESUME_ANALYZER,
        template: RESUME_ANALYSIS_TEMPLATE,
        expected_output: RESUME_ANALYSIS_EXPECTED,
        inputs: &[StepInput::ResumeText],
    },
    PipelineStep {
        id: StepId::JobAnalysis,
        agent: JOB_ANALYZER,
        template: JOB_ANALYSIS_TEMPLATE,
        expected_output: JOB_ANALYSIS_EXPECTED,
        inputs: &[StepInput::JobDescription],
    },
    PipelineStep {
        id: StepId::Suggestions,
        agent: IMPROVEMENT_SUGGESTOR,
        template: SUGGESTIONS_TEMPLATE,
        expected_output: SUGGESTIONS_EXPECTED,
        inputs: &[
            StepInput::Output(StepId::ResumeAnalysis),
            StepInput::Output(StepId::JobAnalysis),
        ],
    },
];
