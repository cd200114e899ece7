//! Integration tests for the technical parameter table.

use argo_model::TemplateMatch;
use argo_standards::{
    NamePattern, ReferenceData, ReferenceTables, StandardsError, TechParamSpec, TechParamTable,
};
use proptest::prelude::*;

fn sensor_table() -> TechParamTable {
    TechParamTable::builder()
        .active_names(["NUMBER_<short_sensor_name>Resets", "CLOCK_<N>Offset"])
        .deprecated_names(["CLOCK_<N>Offset", "OLD_<N>Offset"])
        .value_pattern("N", "[0-9]{1,3}")
        .active_units(["COUNT", "seconds"])
        .build()
        .expect("build table")
}

#[test]
fn first_active_pattern_wins_over_deprecated_duplicate() {
    let table = sensor_table();
    assert_eq!(table.resolve_param("CLOCK_12Offset"), Some(TemplateMatch::active()));
    assert_eq!(
        table.resolve_param("OLD_1234Offset"),
        Some(TemplateMatch::deprecated().with_failed("N", "1234"))
    );
}

#[test]
fn captured_short_sensor_names_are_left_to_the_vocabulary() {
    let table = sensor_table();
    let reference = ReferenceTables::argo_default();

    let matched = table.resolve_param("NUMBER_FOOResets").expect("pattern match");
    let value = matched
        .unmatched_templates
        .get("short_sensor_name")
        .expect("captured value");
    assert_eq!(value, "FOO");
    assert!(!reference.is_short_sensor_name(value));
}

#[test]
fn default_table_is_empty() {
    let table = TechParamTable::default();
    assert_eq!(table.resolve_param("CLOCK_Offset"), None);
    assert!(!table.is_active_unit("dbar"));
}

proptest! {
    #[test]
    fn placeholder_captures_any_alphanumeric_run(value in "[A-Za-z0-9]{1,12}") {
        let pattern = NamePattern::compile("NUMBER_<short_sensor_name>Resets").expect("compile");
        let name = format!("NUMBER_{value}Resets");
        let captures = pattern.captures(&name).expect("full match");
        prop_assert_eq!(captures, vec![("short_sensor_name", value)]);
    }

    #[test]
    fn placeholder_never_spans_an_underscore(left in "[A-Z]{1,6}", right in "[A-Z]{1,6}") {
        let pattern = NamePattern::compile("X_<t>Y").expect("compile");
        let name = format!("X_{left}_{right}Y");
        prop_assert!(pattern.captures(&name).is_none());
    }
}

#[test]
fn repeated_placeholder_fails_build() {
    let result = TechParamTable::builder()
        .active_names(["PRES_<N>Offset<N>"])
        .value_pattern("N", "[0-9]+")
        .build();
    assert!(matches!(
        result,
        Err(StandardsError::InvalidTemplatePattern { .. })
    ));
}
