use pretty_assertions::assert_eq;
use ttyclock::{ClockError, Mode, Time};

fn parse(s: &str) -> Time {
    Time::parse_partial(s).unwrap()
}

#[test]
fn single_field_is_seconds() {
    let t = parse("5");
    assert_eq!((t.hours(), t.minutes(), t.seconds()), (0, 0, 5));
    assert_eq!(t.mode, Mode::Countdown);
}

#[test]
fn two_fields_are_minutes_and_seconds() {
    assert_eq!(parse("1:30").to_string(), "00:01:30");
}

#[test]
fn full_and_short_three_field_forms() {
    assert_eq!(parse("12:30:45").to_string(), "12:30:45");
    assert_eq!(parse("1:2:3").to_string(), "01:02:03");
    assert_eq!(parse("::7").to_string(), "00:00:07");
    assert_eq!(parse("1::").to_string(), "01:00:00");
}

#[test]
fn empty_input_is_zero() {
    assert!(parse("").is_zero());
}

#[test]
fn third_digit_in_a_field_is_rejected() {
    match Time::parse_partial("12:345") {
        Err(ClockError::TooManyDigits { field }) => assert_eq!(field, 2),
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        Time::parse_partial("123"),
        Err(ClockError::TooManyDigits { field: 1 })
    ));
}

#[test]
fn invalid_characters_are_rejected() {
    match Time::parse_partial("1a:30") {
        Err(ClockError::InvalidCharacter { ch, position }) => {
            assert_eq!(ch, 'a');
            assert_eq!(position, 1);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        Time::parse_partial("1:2:3:4"),
        Err(ClockError::InvalidCharacter { ch: ':', position: 5 })
    ));
    assert!(matches!(
        Time::parse_partial("-5"),
        Err(ClockError::InvalidCharacter { ch: '-', .. })
    ));
}

#[test]
fn canonical_string_parses_back() {
    for s in ["00:00:00", "00:00:05", "01:02:03", "23:59:59", "99:00:01"] {
        let t = parse(s);
        assert_eq!(t.to_string(), s);
        assert_eq!(parse(&t.to_string()), t);
    }
}

#[test]
fn from_str_matches_parse_partial() {
    let t: Time = "1:30".parse().unwrap();
    assert_eq!(t, parse("1:30"));
}
