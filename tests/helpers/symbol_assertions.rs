//! Assertions over definition results.

use svindex::Span;
use svindex::ide::Location;

/// Assert exactly one definition, in file `file_name`, at `span`.
pub fn assert_definition(locations: &[Location], file_name: &str, span: Span) {
    assert_eq!(
        locations.len(),
        1,
        "expected one definition, got {}: {:?}",
        locations.len(),
        locations
    );
    let location = &locations[0];
    assert!(
        location.path.ends_with(file_name),
        "definition in {}, expected {}",
        location.path.display(),
        file_name
    );
    assert_eq!(location.span, span, "wrong span for {}", location.name);
}

/// Assert no definition was found.
pub fn assert_no_definition(locations: &[Location]) {
    assert!(
        locations.is_empty(),
        "expected no definition, got {:?}",
        locations
    );
}
