//! Prompt templates for AI extraction. Templates carry a single
//! `{raw_text}` placeholder; keys mirror the serialized record shapes.

/// System prompt that enforces JSON-only output.
pub const EXTRACTION_SYSTEM: &str = "You are a precise document-extraction assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Copy values from the document verbatim; never invent data. \
    Use an empty string, empty list or null for anything the document does not state.";

pub const RESUME_EXTRACTION_TEMPLATE: &str = r#"Extract structured information from this resume.

RESUME TEXT:
{raw_text}

Return JSON in exactly this shape:
{
  "contact": {
    "name": "<full name>",
    "email": "<email>",
    "phone": "<phone>",
    "location": "<city, state/country or null>",
    "linkedin": "<linkedin url or null>",
    "github": "<github url or null>",
    "portfolio": "<portfolio url or null>"
  },
  "summary": "<professional summary or null>",
  "skills": ["<skill>"],
  "experience": [
    {
      "company": "<company name>",
      "position": "<job title>",
      "location": "<location or null>",
      "start_date": "<start date as written>",
      "end_date": "<end date as written, or Present>",
      "current": <true if this is the current job>,
      "description": ["<bullet point>"]
    }
  ],
  "education": [
    {
      "institution": "<school name>",
      "degree": "<degree>",
      "field": "<field of study>",
      "start_date": "<start date>",
      "end_date": "<end date>",
      "gpa": "<gpa or null>"
    }
  ],
  "projects": [
    {
      "name": "<project name>",
      "description": "<one-line description>",
      "technologies": ["<technology>"],
      "url": "<url or null>",
      "github": "<github url or null>"
    }
  ],
  "certifications": [
    { "name": "<certification>", "issuer": "<issuer>", "date": "<date>" }
  ],
  "languages": ["<spoken language>"]
}"#;

pub const JOB_EXTRACTION_TEMPLATE: &str = r#"Extract structured information from this job description.

JOB DESCRIPTION:
{raw_text}

Return JSON in exactly this shape:
{
  "title": "<job title>",
  "company": "<company name or null>",
  "location": "<location or null>",
  "employment_type": "<full-time|part-time|contract|remote, or null>",
  "required_skills": [
    { "skill": "<skill name>", "level": "required", "years": <minimum years or null> }
  ],
  "preferred_skills": [
    { "skill": "<skill name>", "level": "preferred", "years": null }
  ],
  "responsibilities": ["<responsibility>"],
  "qualifications": ["<qualification>"],
  "experience": { "min": <minimum years, 0 if unstated>, "max": <maximum years or null> },
  "salary": { "min": <annual minimum or null>, "max": <annual maximum or null>, "currency": "<ISO code or null>" },
  "keywords": ["<important keyword>"]
}

Distinguish required skills from preferred ones. Express salaries as whole annual amounts (120000, not 120k)."#;

/// Fills a template's `{raw_text}` placeholder.
pub fn render(template: &str, raw_text: &str) -> String {
    template.replace("{raw_text}", raw_text)
}
