use super::*;

#[test]
fn parses_long_hex_forms() {
    assert_eq!(parse_color("#ff0000").unwrap(), Rgba8::RED);
    assert_eq!(parse_color("00FF00").unwrap(), Rgba8::rgb(0, 255, 0));
    assert_eq!(
        parse_color("#0000ff80").unwrap(),
        Rgba8::rgb(0, 0, 255).with_alpha(0x80)
    );
}

#[test]
fn parses_short_hex_forms() {
    assert_eq!(parse_color("#f00").unwrap(), Rgba8::RED);
    assert_eq!(
        parse_color("#0f08").unwrap(),
        Rgba8::rgb(0, 255, 0).with_alpha(0x88)
    );
}

#[test]
fn parses_keywords_case_insensitively() {
    assert_eq!(parse_color("Black").unwrap(), Rgba8::BLACK);
    assert_eq!(parse_color(" orange ").unwrap(), Rgba8::rgb(255, 165, 0));
}

#[test]
fn rejects_garbage() {
    assert!(parse_color("").is_err());
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("#gg0000").is_err());
    assert!(parse_color("rebeccapurple").is_err());
    assert!(parse_color("#ééé").is_err());
}
