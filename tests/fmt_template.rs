use pipelog::fmt::{Field, FieldTemplate, FieldValues, FormatSegment, RECORD_FIELDS, TRNS_FIELDS};

#[test]
fn from_fields_interleaves_pipes() {
    let template = FieldTemplate::from_fields(&[Field::Date, Field::Level, Field::Msg]);

    assert_eq!(
        template.segments(),
        &[
            FormatSegment::Field(Field::Date),
            FormatSegment::Literal("|".to_string()),
            FormatSegment::Field(Field::Level),
            FormatSegment::Literal("|".to_string()),
            FormatSegment::Field(Field::Msg),
        ]
    );
}

#[test]
fn compile_binds_supplied_values_and_leaves_the_rest_open() {
    let template = FieldTemplate::compile(
        RECORD_FIELDS,
        &FieldValues::new().with(Field::SourceSystem, "EVOUCHER"),
    );

    assert!(
        template
            .segments()
            .contains(&FormatSegment::Literal("EVOUCHER".to_string()))
    );
    assert_eq!(
        template.open_fields(),
        vec![
            Field::Date,
            Field::Level,
            Field::SessionId,
            Field::TrnsId,
            Field::Subrnumb,
            Field::Msg,
        ]
    );
}

#[test]
fn render_defaults_open_fields_to_empty() {
    let template = FieldTemplate::from_fields(RECORD_FIELDS);

    assert_eq!(template.render(&FieldValues::new()), "||||||");
}

#[test]
fn render_substitutes_open_fields() {
    let template = FieldTemplate::compile(
        RECORD_FIELDS,
        &FieldValues::new()
            .with(Field::SourceSystem, "EVOUCHER")
            .with(Field::SessionId, "s1")
            .with(Field::TrnsId, "t1")
            .with(Field::Subrnumb, "r1"),
    );

    let line = template.render(
        &FieldValues::new()
            .with(Field::Date, "2018-01-18T09:30:00")
            .with(Field::Level, "INFO")
            .with(Field::Msg, "hello"),
    );

    assert_eq!(line, "2018-01-18T09:30:00|INFO|EVOUCHER|s1|t1|r1|hello");
}

#[test]
fn bind_is_pure() {
    let init = FieldTemplate::from_fields(RECORD_FIELDS);
    let bound = init.bind(&FieldValues::new().with(Field::SessionId, "s1"));

    assert_eq!(init.open_fields().len(), RECORD_FIELDS.len());
    assert_eq!(bound.open_fields().len(), RECORD_FIELDS.len() - 1);
}

#[test]
fn rebinding_from_the_same_lineage_is_last_write_wins() {
    let init = FieldTemplate::compile(
        RECORD_FIELDS,
        &FieldValues::new().with(Field::SourceSystem, "EVOUCHER"),
    );

    let first = init.bind(&FieldValues::new().with(Field::Subrnumb, "111"));
    let second = init.bind(&FieldValues::new().with(Field::Subrnumb, "222"));

    let values = FieldValues::new().with(Field::Level, "INFO");
    assert_eq!(first.render(&values), "|INFO|EVOUCHER|||111|");
    assert_eq!(second.render(&values), "|INFO|EVOUCHER|||222|");
}

#[test]
fn bound_slots_ignore_later_values() {
    let template = FieldTemplate::compile(
        &[Field::Level, Field::Msg],
        &FieldValues::new().with(Field::Level, "INFO"),
    );

    let line = template.render(
        &FieldValues::new()
            .with(Field::Level, "ERROR")
            .with(Field::Msg, "m"),
    );

    assert_eq!(line, "INFO|m");
}

#[test]
fn merge_overlays_incoming_values() {
    let merged = FieldValues::new()
        .with(Field::Msg, "old")
        .with(Field::Level, "INFO")
        .merge(&FieldValues::new().with(Field::Msg, "new"));

    assert_eq!(merged.get(Field::Msg), Some("new"));
    assert_eq!(merged.get(Field::Level), Some("INFO"));
    assert_eq!(merged.get(Field::Date), None);
}

#[test]
fn field_tokens_are_stable() {
    assert_eq!(Field::Date.as_str(), "date");
    assert_eq!(Field::SourceSystem.as_str(), "source_system");
    assert_eq!(Field::EndpointErrCode.as_str(), "endpoint_err_code");
    assert_eq!(Field::ALL.len(), Field::COUNT);
}

#[test]
fn set_and_with_are_equivalent() {
    let mut looped = FieldValues::new();
    looped.set(Field::Level, "INFO");
    looped.set(Field::Msg, "m");

    let chained = FieldValues::new()
        .with(Field::Level, "INFO")
        .with(Field::Msg, "m");

    let template = FieldTemplate::from_fields(&[Field::Level, Field::Msg]);
    assert_eq!(template.render(&looped), template.render(&chained));
}

#[test]
fn trns_catalog_renders_fourteen_fields() {
    let line = FieldTemplate::from_fields(TRNS_FIELDS).render(&FieldValues::new());

    assert_eq!(line.matches('|').count(), TRNS_FIELDS.len() - 1);
}
