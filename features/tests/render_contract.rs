//! End-to-end contract of the features section: overrides in, markup and
//! navigation out.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use features_section::{
    ContentError, ContentOverrides, FEATURE_COUNT, FeatureContent, FeaturePart, FeatureSlot, Field, Navigator,
    build_feature_list, render_document, render_section,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn recording_navigator() -> (Navigator, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let navigator = Navigator::new(move |to| log.lock().unwrap().push(to.to_owned()));
    (navigator, seen)
}

#[test]
fn fixture_overrides_flow_into_markup() {
    let overrides = ContentOverrides::from_json_file(fixture("contact_overrides.json")).unwrap();
    // heroTitle is not a recognised field
    assert_eq!(overrides.len(), 5);

    let html = render_section(&overrides, true);
    assert!(html.contains(r#"data-editable="badge">Field Robotics<"#));
    assert!(html.contains(r#"data-editable="feature3Title">Custom Title<"#));
    assert!(html.contains(r#"src="https://cdn.example.com/robots/vault.jpg""#));
    assert!(html.contains(r#"data-href="/contact""#));
    assert!(html.contains(r##"data-href="#features""##));
    assert!(!html.contains("not a features field"));
}

#[test]
fn empty_input_keeps_every_default() {
    let content = FeatureContent::resolve(&ContentOverrides::from_json_str("{}").unwrap());
    let defaults = FeatureContent::default();

    assert_eq!(content, defaults);
    assert_eq!(content.header.badge, "Robotic Solutions");

    let images: Vec<String> = build_feature_list(&content)
        .iter()
        .map(|item| item.image.clone())
        .collect();
    let expected: Vec<String> = FeatureSlot::all()
        .map(|slot| defaults.get(Field::Feature(slot, FeaturePart::Image)).to_owned())
        .collect();
    assert_eq!(images.len(), FEATURE_COUNT);
    assert_eq!(images, expected);
    assert!(images[0].starts_with("https://images.unsplash.com/photo-1485827404703-89b55fcc595e"));
}

#[test]
fn primary_button_dispatches_configured_href() {
    let overrides = ContentOverrides::from_json_str(r#"{"primaryCTAHref": "/contact"}"#).unwrap();
    let content = FeatureContent::resolve(&overrides);
    let (navigator, seen) = recording_navigator();

    content.cta.primary.activate(&navigator);
    assert_eq!(*seen.lock().unwrap(), ["/contact"]);

    content.cta.secondary.activate(&navigator);
    assert_eq!(*seen.lock().unwrap(), ["/contact", "/"]);
}

#[test]
fn override_of_each_field_is_isolated() {
    let defaults = FeatureContent::default();
    for target in Field::all() {
        let json = format!(r#"{{"{target}": ""}}"#);
        let merged = FeatureContent::resolve(&ContentOverrides::from_json_str(&json).unwrap());

        for field in Field::all() {
            let expected = if field == target { "" } else { defaults.get(field) };
            assert_eq!(merged.get(field), expected, "{field} after clearing {target}");
        }
    }
}

#[test]
fn malformed_overrides_are_reported() {
    let err = ContentOverrides::from_json_str(r#"{"feature1Title": ["not", "a", "string"]}"#).unwrap_err();
    assert!(matches!(err, ContentError::Json(_)));
    assert!(err.to_string().starts_with("invalid content overrides JSON"));
}

#[test]
fn static_document_is_self_contained() {
    let overrides = ContentOverrides::from_json_file(fixture("contact_overrides.json")).unwrap();
    let html = render_document(&overrides, false);

    assert!(html.starts_with("<!DOCTYPE html>\n<html"));
    assert!(html.contains(".features-grid"));
    assert!(html.contains(r#"data-reveal="hidden""#));
}
