use super::*;

#[test]
fn settings_json_fills_defaults() {
    let s = RenderSettings::from_json(r#"{"outline_width": 2.5}"#).unwrap();
    assert_eq!(s.outline_width, 2.5);
    assert_eq!(s.clear, None);

    let s = RenderSettings::from_json(r#"{"clear": {"r": 1, "g": 2, "b": 3, "a": 4}}"#).unwrap();
    assert_eq!(s.clear, Some(Color::rgba(1, 2, 3, 4)));
    assert_eq!(s.outline_width, 1.0);
}

#[test]
fn settings_reject_bad_values() {
    assert!(matches!(
        RenderSettings::from_json(r#"{"outline_width": 0}"#),
        Err(PicturaError::Validation(_))
    ));
    assert!(matches!(
        RenderSettings::from_json("{not json"),
        Err(PicturaError::Validation(_))
    ));
}
