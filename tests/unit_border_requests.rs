use anyhow::Result;
use serde_json::json;
use sheets_batch_kit::model::{BorderEdgeSpec, BorderStyle};
use sheets_batch_kit::{BorderSpec, parse_color, request_from_borders, resolve_range};
use std::collections::HashMap;

fn any_range() -> sheets_batch_kit::RangeReference {
    resolve_range("A1:B2", &HashMap::<String, i64>::new()).expect("range")
}

#[test]
fn missing_edge_color_defaults_to_opaque_black() -> Result<()> {
    let spec = BorderSpec {
        top: Some(BorderEdgeSpec {
            style: BorderStyle::Solid,
            color: None,
        }),
        ..Default::default()
    };

    let request = request_from_borders(&any_range(), &spec);
    assert_eq!(
        serde_json::to_value(&request)?,
        json!({
            "updateBorders": {
                "range": {
                    "sheetId": 0,
                    "startRowIndex": 0,
                    "endRowIndex": 2,
                    "startColumnIndex": 0,
                    "endColumnIndex": 2
                },
                "top": {
                    "style": "SOLID",
                    "color": {"red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0}
                }
            }
        })
    );
    Ok(())
}

#[test]
fn absent_edges_are_omitted_not_cleared() -> Result<()> {
    let spec = BorderSpec {
        top: Some(BorderEdgeSpec {
            style: BorderStyle::Solid,
            color: None,
        }),
        ..Default::default()
    };

    let value = serde_json::to_value(request_from_borders(&any_range(), &spec))?;
    let body = value["updateBorders"].as_object().expect("object");
    assert!(body.contains_key("top"));
    assert!(!body.contains_key("bottom"));
    assert!(!body.contains_key("left"));
    assert!(!body.contains_key("right"));
    Ok(())
}

#[test]
fn explicit_edge_colors_and_styles_pass_through() -> Result<()> {
    let spec = BorderSpec {
        bottom: Some(BorderEdgeSpec {
            style: BorderStyle::SolidMedium,
            color: Some(parse_color("#4285f4")?),
        }),
        left: Some(BorderEdgeSpec {
            style: BorderStyle::Double,
            color: None,
        }),
        ..Default::default()
    };

    let value = serde_json::to_value(request_from_borders(&any_range(), &spec))?;
    assert_eq!(value["updateBorders"]["bottom"]["style"], json!("SOLID_MEDIUM"));
    assert_eq!(
        value["updateBorders"]["bottom"]["color"]["blue"],
        json!(0xf4 as f64 / 255.0)
    );
    assert_eq!(value["updateBorders"]["left"]["style"], json!("DOUBLE"));
    Ok(())
}

#[test]
fn border_spec_deserializes_with_lenient_style_casing() -> Result<()> {
    let spec: BorderSpec = serde_json::from_value(json!({
        "top": {"style": "solid_thick"},
        "right": {"style": "dotted", "color": "gray"}
    }))?;
    assert_eq!(
        spec.top.as_ref().map(|edge| edge.style),
        Some(BorderStyle::SolidThick)
    );
    assert_eq!(
        spec.right.as_ref().and_then(|edge| edge.color),
        Some(parse_color("gray")?)
    );
    assert!(spec.bottom.is_none());
    Ok(())
}

#[test]
fn empty_border_spec_emits_range_only_request() -> Result<()> {
    let spec = BorderSpec::default();
    assert!(spec.is_empty());

    let value = serde_json::to_value(request_from_borders(&any_range(), &spec))?;
    let body = value["updateBorders"].as_object().expect("object");
    assert_eq!(body.len(), 1);
    assert!(body.contains_key("range"));
    Ok(())
}
