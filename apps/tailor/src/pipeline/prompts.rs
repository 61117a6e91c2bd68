// Prompt templates for the tailoring pipeline.
// Placeholders are replaced verbatim by the runner before sending.

/// Step 1 — resume analysis. Replace `{resume_text}`.
pub const RESUME_ANALYSIS_TEMPLATE: &str = r#"Analyze the following resume content and identify key skills, experiences,
and potential areas for improvement. Focus on the overall structure, clarity,
and impact of the resume. Output should be a structured report, not just raw thoughts.
Resume:
--------------
{resume_text}
--------------"#;

pub const RESUME_ANALYSIS_EXPECTED: &str = "A structured report summarizing the resume's strengths, \
    weaknesses, key skills, and areas for improvement.";

/// Step 2 — job description analysis. Replace `{job_description}`.
pub const JOB_ANALYSIS_TEMPLATE: &str = r#"Analyze the following job description and extract the key requirements,
desired skills, preferred qualifications, and any important keywords.
Be specific and comprehensive in your analysis. Output a structured summary.
Job Description:
--------------
{job_description}
--------------"#;

pub const JOB_ANALYSIS_EXPECTED: &str = "A structured summary of the job description, including key \
    requirements, desired skills, qualifications, and important keywords.";

/// Step 3 — suggestion synthesis. Replace `{resume_analysis}` and `{job_analysis}`.
pub const SUGGESTIONS_TEMPLATE: &str = r#"Based on the analysis of the resume and the job description,
provide specific and actionable suggestions to improve the resume. Address:
1.  **Content:**  Suggest additions, deletions, or modifications to the resume content to better match the job requirements.
2.  **Keywords:** Identify keywords from the job description that should be incorporated into the resume.
3.  **Formatting:**  Suggest any formatting changes to improve readability and impact.
4.  **Overall Strategy:**  Provide an overall strategy for tailoring the resume to the specific job.

The resume analysis is: {resume_analysis}
The job description analysis is: {job_analysis}"#;

pub const SUGGESTIONS_EXPECTED: &str = "A list of specific, actionable suggestions for improving the \
    resume, covering content, keywords, formatting, and overall strategy, tailored to the job description.";

/// System instruction template. Replace `{role}`, `{backstory}`, `{goal}`, `{format}`.
pub const AGENT_SYSTEM_TEMPLATE: &str = r#"You are {role}. {backstory}

Your personal goal is: {goal}

{format}"#;
