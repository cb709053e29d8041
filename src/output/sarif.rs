use crate::finding::LintReport;
use crate::rules;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::HashMap;

pub fn format(report: &LintReport) -> String {
    // Every registered rule is described, so rule indices stay stable across runs.
    let registry = rules::all_rules();

    let rule_index: HashMap<&str, i64> = registry
        .iter()
        .enumerate()
        .map(|(i, rule)| (rule.id, i as i64))
        .collect();

    let descriptors: Vec<ReportingDescriptor> = registry
        .iter()
        .map(|rule| {
            let mut descriptor = ReportingDescriptor::builder().id(rule.id.to_string()).build();
            descriptor.short_description = Some(
                MultiformatMessageString::builder()
                    .text(rule.message.to_string())
                    .build(),
            );
            descriptor.help = Some(
                MultiformatMessageString::builder()
                    .text(rule.remediation.to_string())
                    .build(),
            );
            descriptor
        })
        .collect();

    let results: Vec<SarifResult> = report
        .findings
        .iter()
        .map(|f| {
            let mut result = SarifResult::builder()
                .message(Message::builder().text(f.message.clone()).build())
                .build();

            result.rule_id = Some(f.rule_id.clone());
            result.level = Some(ResultLevel::Error);
            result.rule_index = rule_index.get(f.rule_id.as_str()).copied();

            if let Some(ref file) = f.file {
                let uri = file.to_string_lossy().replace('\\', "/");

                let mut location = Location::builder().build();
                let mut physical = PhysicalLocation::builder().build();
                physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
                location.physical_location = Some(physical);

                result.locations = Some(vec![location]);
            }

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("pipeline-lint")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(descriptors)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
