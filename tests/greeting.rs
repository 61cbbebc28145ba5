use greeter_bridge::{Greeting, GreetingError};
use std::ffi::CString;

#[test]
fn test_display() {
    let greeting = Greeting::new(&b"Hello \xC3 from \xE2\x82 C!"[..]);

    assert_eq!(format!("{}", greeting), "Hello \u{fffd} from \u{fffd} C!");
    assert_eq!(greeting.to_string_lossy(), "Hello \u{fffd} from \u{fffd} C!");
}

#[test]
fn test_debug() {
    let greeting = Greeting::new(&b"\"Hello\" from C's \xFF side\n"[..]);

    assert_eq!(
        format!("{:?}", greeting),
        r#""\"Hello\" from C's \xff side\n""#,
    );
}

#[test]
fn test_from_c_str() {
    let c = CString::new("Hello from C!").unwrap();
    let greeting = Greeting::from(c.as_c_str());

    assert_eq!(b"Hello from C!", greeting.as_bytes());
    assert_eq!(13, greeting.len());
    assert!(!greeting.is_empty());
    assert_eq!(Greeting::from("Hello from C!"), greeting);
}

#[test]
fn test_error_display() {
    assert_eq!(
        "C-function gave back null!",
        GreetingError::NativeGreetingUnavailable.to_string(),
    );
}
