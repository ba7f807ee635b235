use anyhow::Result;
use assert_matches::assert_matches;
use serde_json::json;
use sheets_batch_kit::{Color, ColorError, parse_color};

#[test]
fn hex_with_hash_normalizes_channels() -> Result<()> {
    let color = parse_color("#4285f4")?;
    assert_eq!(color.red, 0x42 as f64 / 255.0);
    assert_eq!(color.green, 0x85 as f64 / 255.0);
    assert_eq!(color.blue, 0xf4 as f64 / 255.0);
    assert_eq!(color.alpha, 1.0);
    Ok(())
}

#[test]
fn hex_without_hash_and_mixed_case_is_accepted() -> Result<()> {
    assert_eq!(parse_color("4285F4")?, parse_color("#4285f4")?);
    Ok(())
}

#[test]
fn named_colors_are_case_insensitive() -> Result<()> {
    let orange = parse_color("orange")?;
    assert_eq!(
        orange,
        Color {
            red: 1.0,
            green: 0.65,
            blue: 0.0,
            alpha: 1.0
        }
    );
    assert_eq!(parse_color("ORANGE")?, orange);
    assert_eq!(parse_color("Orange")?, orange);
    Ok(())
}

#[test]
fn every_named_color_parses() -> Result<()> {
    for name in [
        "red",
        "green",
        "blue",
        "yellow",
        "orange",
        "purple",
        "pink",
        "white",
        "black",
        "gray",
        "lightgray",
        "darkgray",
    ] {
        let color = parse_color(name)?;
        assert_eq!(color.alpha, 1.0, "{name}");
    }
    Ok(())
}

#[test]
fn unknown_token_fails_with_hint() {
    let err = parse_color("notacolor").unwrap_err();
    assert_matches!(&err, ColorError::InvalidToken(raw) if raw == "notacolor");
    let message = err.to_string();
    assert!(message.contains("notacolor"));
    assert!(message.contains("hex"));
    assert!(message.contains("orange"));
}

#[test]
fn short_and_long_hex_are_rejected() {
    assert_matches!(parse_color("#fff"), Err(ColorError::InvalidToken(_)));
    assert_matches!(parse_color("#12345678"), Err(ColorError::InvalidToken(_)));
}

#[test]
fn to_hex_round_trips() -> Result<()> {
    assert_eq!(parse_color("#4285f4")?.to_hex(), "#4285f4");
    assert_eq!(Color::BLACK.to_hex(), "#000000");
    assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    Ok(())
}

#[test]
fn deserializes_from_token_string() -> Result<()> {
    let color: Color = serde_json::from_value(json!("orange"))?;
    assert_eq!(color, parse_color("orange")?);

    let color: Color = serde_json::from_value(json!("#4285f4"))?;
    assert_eq!(color, parse_color("#4285f4")?);
    Ok(())
}

#[test]
fn deserializes_from_channel_object_with_default_alpha() -> Result<()> {
    let color: Color = serde_json::from_value(json!({"red": 1.0, "green": 0.65, "blue": 0.0}))?;
    assert_eq!(color, parse_color("orange")?);

    let color: Color = serde_json::from_value(json!({"red": 0.5, "alpha": 0.25}))?;
    assert_eq!(color.green, 0.0);
    assert_eq!(color.alpha, 0.25);
    Ok(())
}

#[test]
fn bad_token_fails_deserialization() {
    let result: Result<Color, _> = serde_json::from_value(json!("notacolor"));
    assert!(result.is_err());
}

#[test]
fn serializes_as_channel_object() -> Result<()> {
    let value = serde_json::to_value(parse_color("orange")?)?;
    assert_eq!(
        value,
        json!({"red": 1.0, "green": 0.65, "blue": 0.0, "alpha": 1.0})
    );
    Ok(())
}

#[test]
fn out_of_range_channels_are_clamped() {
    let color = Color::new(1.5, -0.5, 0.5, 2.0);
    assert_eq!(color.red, 1.0);
    assert_eq!(color.green, 0.0);
    assert_eq!(color.alpha, 1.0);
}
