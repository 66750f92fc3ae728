// All LLM prompt templates for resume analysis.
// Placeholders are filled in a single pass by `prompt_builder::fill_template`.
// The instruction text is fixed; only the interpolated content varies.

/// Quick Scan template. Placeholders: {resume_text}, {job_description}
pub const QUICK_SCAN_TEMPLATE: &str = r#"You are ResumeChecker, an expert in resume analysis. Provide a quick scan of the following resume:

1. Start with the overall ATS score out of 100 (display as "ATS Score: XX/100").
2. Identify the most suitable profession for this resume.
3. List 3 key strengths of the resume.
4. Suggest 2 quick improvements.

Resume text: {resume_text}
Job description (if provided): {job_description}"#;

/// Detailed Analysis template. Placeholders: {resume_text}, {job_description}
pub const DETAILED_ANALYSIS_TEMPLATE: &str = r#"You are ResumeChecker, an expert in resume analysis. Provide a detailed analysis of the following resume:

1. Start with the overall ATS score out of 100 (display as "ATS Score: XX/100").
2. Identify the most suitable profession for this resume.
3. List 5 strengths of the resume.
4. Suggest 3-5 areas for improvement with specific recommendations.
5. Rate the following aspects out of 10: Impact, Brevity, Style, Structure, Skills.
6. Provide a brief review of each major section (e.g., Summary, Experience, Education).

Resume text: {resume_text}
Job description (if provided): {job_description}"#;

/// ATS Optimization template. Placeholders: {resume_text}, {job_description}
///
/// Asks for "ATS Compatibility Score" rather than "ATS Score".
pub const ATS_OPTIMIZATION_TEMPLATE: &str = r#"You are ResumeChecker, an expert in ATS optimization. Analyze the following resume and provide optimization suggestions:

1. Start with the ATS compatibility score out of 100 (display as "ATS Compatibility Score: XX/100").
2. Identify keywords from the job description that should be included in the resume.
3. Suggest reformatting or restructuring to improve ATS readability.
4. Recommend changes to improve keyword density without keyword stuffing.
5. Provide 3-5 bullet points on how to tailor this resume for the specific job description.
6. Explain how to improve the score.

Resume text: {resume_text}
Job description: {job_description}"#;

/// Follow-up question template.
/// Placeholders: {question}, {resume_text}, {previous_response}
pub const FOLLOW_UP_TEMPLATE: &str = r#"Based on the resume and analysis above, answer the following question:
{question}

Resume text: {resume_text}
Previous analysis: {previous_response}"#;
