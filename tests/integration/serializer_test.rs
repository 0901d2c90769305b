//! Serializer Integration Tests
//!
//! Document-level properties of the tagged prompt output.

use easy_prompt_core::{
    serialize, section_count, EnabledSectionsPatch, Example, PromptRecord, PromptStats,
    ScalarField, Section, TemplateData,
};

fn example(id: &str, input: &str, output: &str) -> Example {
    Example {
        id: id.to_string(),
        input: input.to_string(),
        output: output.to_string(),
    }
}

fn tag_positions(text: &str) -> Vec<usize> {
    Section::ORDER
        .iter()
        .filter_map(|s| text.find(&format!("<{}>", s.tag())))
        .collect()
}

#[test]
fn test_all_empty_record_is_empty_document() {
    let record = PromptRecord::default();
    assert_eq!(serialize(&record), "");
    assert_eq!(section_count(&record), 0);
}

#[test]
fn test_order_independent_of_population_order() {
    let mut forward = PromptRecord::default();
    let mut backward = PromptRecord::default();
    let values = [
        (ScalarField::Role, "expert"),
        (ScalarField::Context, "bg"),
        (ScalarField::Task, "do"),
        (ScalarField::Constraints, "short"),
        (ScalarField::Format, "list"),
        (ScalarField::SuccessCriteria, "right"),
        (ScalarField::Input, "data"),
    ];
    for (field, value) in values {
        forward.set_field(field, value.to_string());
    }
    for (field, value) in values.iter().rev() {
        backward.set_field(*field, value.to_string());
    }

    let output = serialize(&forward);
    assert_eq!(output, serialize(&backward));
    let positions = tag_positions(&output);
    assert_eq!(positions.len(), 7);
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_serialize_is_idempotent() {
    let record = PromptRecord {
        task: "Translate <this> & that".to_string(),
        examples: vec![example("a", "hi", "hola")],
        ..Default::default()
    };
    assert_eq!(serialize(&record), serialize(&record));
}

#[test]
fn test_script_tag_is_escaped_once() {
    let record = PromptRecord {
        task: "<script>&\"</script>".to_string(),
        ..Default::default()
    };
    assert_eq!(
        serialize(&record),
        "<task>\n&lt;script&gt;&amp;\"&lt;/script&gt;\n</task>"
    );
}

#[test]
fn test_empty_example_filtered_output_only_example_kept() {
    let record = PromptRecord {
        task: "T".to_string(),
        examples: vec![example("a", "", ""), example("b", "", "only output")],
        ..Default::default()
    };
    let output = serialize(&record);
    assert_eq!(output.matches("<example>").count(), 1);
    assert!(output.contains("Input: \nOutput: only output"));
    assert_eq!(record.examples.len(), 2);
}

#[test]
fn test_disabled_constraints_excluded_and_retained() {
    let mut record = PromptRecord {
        task: "T".to_string(),
        constraints: "Be brief".to_string(),
        ..Default::default()
    };
    record.enabled_sections.set(Section::Constraints, false);
    assert!(!serialize(&record).contains("<constraints>"));
    assert_eq!(record.constraints, "Be brief");
    assert_eq!(section_count(&record), 1);

    record.enabled_sections.toggle(Section::Constraints);
    assert!(serialize(&record).contains("<constraints>\nBe brief\n</constraints>"));
}

#[test]
fn test_template_merge_disables_only_examples() {
    let data = TemplateData {
        task: Some("T".to_string()),
        enabled_sections: Some(EnabledSectionsPatch {
            examples: Some(false),
            ..Default::default()
        }),
        ..Default::default()
    };
    let record = PromptRecord::from_template(&data);
    for section in Section::ORDER {
        assert_eq!(
            record.enabled_sections.is_enabled(section),
            section != Section::Examples,
            "{}",
            section
        );
    }
}

#[test]
fn test_task_and_constraints_end_to_end() {
    let record = PromptRecord {
        task: "Summarize this.".to_string(),
        constraints: "Max 3 sentences.".to_string(),
        ..Default::default()
    };
    let text = serialize(&record);
    assert_eq!(
        text,
        "<task>\nSummarize this.\n</task>\n\n<constraints>\nMax 3 sentences.\n</constraints>"
    );

    let stats = PromptStats::compute(&text, &record);
    assert_eq!(stats.sections, 2);
    assert_eq!(stats.characters, text.encode_utf16().count());
    assert_eq!(stats.token_estimate, stats.characters.div_ceil(4));
    assert_eq!(stats.words, text.split_whitespace().count());
}

#[test]
fn test_record_json_uses_camel_case_keys() {
    let json = r#"{"task": "T", "successCriteria": "done", "enabledSections": {"successCriteria": false}}"#;
    let record: PromptRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.success_criteria, "done");
    assert!(!record.enabled_sections.is_enabled(Section::SuccessCriteria));
    // Missing keys take defaults
    assert!(record.enabled_sections.is_enabled(Section::Role));
    assert!(record.examples.is_empty());
}
