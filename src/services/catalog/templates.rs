//! Built-in Templates
//!
//! Full-form presets. Each carries only the fields it cares about; loading one
//! resets everything else to defaults.

use easy_prompt_core::{EnabledSectionsPatch, Example, Template, TemplateData};

/// All built-in templates, in display order.
pub fn builtin_templates() -> Vec<Template> {
    vec![code_review(), summarization(), bug_fix(), data_extraction()]
}

fn example(id: &str, input: &str, output: &str) -> Example {
    Example {
        id: id.to_string(),
        input: input.to_string(),
        output: output.to_string(),
    }
}

fn code_review() -> Template {
    Template {
        id: "code-review".to_string(),
        name: "Code Review".to_string(),
        description: "Review a change for bugs, readability and risk".to_string(),
        data: TemplateData {
            role: Some("You are a meticulous senior engineer performing a code review.".to_string()),
            task: Some(
                "Review the code in the input. Identify bugs, unclear logic, missing error handling and missing tests."
                    .to_string(),
            ),
            constraints: Some(
                "Only comment on issues you can point to in the code.\nDo not rewrite the whole file.".to_string(),
            ),
            format: Some(
                "A list of findings. Each finding has: location, severity (high/medium/low), problem, suggested fix."
                    .to_string(),
            ),
            success_criteria: Some("Every high-severity issue is reported with a concrete fix.".to_string()),
            enabled_sections: Some(EnabledSectionsPatch {
                examples: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

fn summarization() -> Template {
    Template {
        id: "summarization".to_string(),
        name: "Summarization".to_string(),
        description: "Condense a document into a short summary".to_string(),
        data: TemplateData {
            task: Some("Summarize the input for a busy reader.".to_string()),
            constraints: Some("At most 3 sentences. No information that is not in the input.".to_string()),
            format: Some("Plain prose, no headings.".to_string()),
            enabled_sections: Some(EnabledSectionsPatch {
                role: Some(false),
                examples: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

fn bug_fix() -> Template {
    Template {
        id: "bug-fix".to_string(),
        name: "Bug Fix".to_string(),
        description: "Diagnose a failure and propose a minimal fix".to_string(),
        data: TemplateData {
            role: Some("You are an experienced debugger who reasons from evidence.".to_string()),
            context: Some(
                "Describe the system, what you expected to happen and what happened instead.".to_string(),
            ),
            task: Some(
                "Find the root cause of the failure described in the input and propose the smallest change that fixes it."
                    .to_string(),
            ),
            format: Some("1. Root cause\n2. Fix (code)\n3. How to verify".to_string()),
            success_criteria: Some("The fix addresses the root cause, not only the symptom.".to_string()),
            ..Default::default()
        },
    }
}

fn data_extraction() -> Template {
    Template {
        id: "data-extraction".to_string(),
        name: "Data Extraction".to_string(),
        description: "Pull structured fields out of free text".to_string(),
        data: TemplateData {
            task: Some("Extract the person's name, email and company from the input.".to_string()),
            constraints: Some("Use null for any field that is not present. Do not guess.".to_string()),
            format: Some(r#"JSON object: {"name": string|null, "email": string|null, "company": string|null}"#.to_string()),
            examples: Some(vec![example(
                "data-extraction-1",
                "Hi, I'm Dana Lee from Acme. Reach me at dana@acme.io.",
                r#"{"name": "Dana Lee", "email": "dana@acme.io", "company": "Acme"}"#,
            )]),
            enabled_sections: Some(EnabledSectionsPatch {
                role: Some(false),
                context: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}
