use clap::Parser;
use forecourt::Error;
use forecourt::cli::{self, Args};
use forecourt::common::RGBColor;
use forecourt::common::xml::is_forbidden_xml_char;
use forecourt::input::{load_listing, parse_listing};
use forecourt::listing::{VehicleListing, VehicleOverrides, merge};
use forecourt::ooxml::pptx::{ShapeSummary, inspect_pptx, inspect_pptx_file};
use forecourt::render::builder::render_listing;
use serde_json::json;
use std::io::{Cursor, Read};
use std::path::Path;
use std::process::Command;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn write_json(dir: &Path, value: serde_json::Value) -> std::io::Result<std::path::PathBuf> {
    let path = dir.join("vehicle.json");
    std::fs::write(&path, serde_json::to_string_pretty(&value)?)?;
    Ok(path)
}

#[test]
fn test_default_listing_slide() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pres = render_listing(&VehicleListing::from_map(None)?)?;
    let slides = inspect_pptx(&pres.to_bytes()?)?;
    assert_eq!(slides.len(), 1);

    let shapes = &slides[0].shapes;
    assert_eq!(shapes.len(), 5);
    assert_eq!(shapes[0].text(), Some("Your Dealership"));
    assert!(matches!(
        &shapes[1],
        ShapeSummary::AutoShape { text, fill: Some(fill), .. }
            if text == "Price on enquiry" && *fill == RGBColor::from_u32(0xF70000)
    ));
    assert_eq!(shapes[2].text(), Some("Vehicle Title"));

    let table = slides[0].tables().next().ok_or("no table")?;
    assert_eq!(table.len(), 10);
    assert!(table.iter().all(|row| row.len() == 2));
    assert_eq!(table[2][0].text, "Gearbox");
    assert_eq!(table[2][1].text, "Automatic");
    assert_eq!(table[2][0].fill, Some(RGBColor::from_u32(0x003864)));
    assert_eq!(table[2][1].fill, Some(RGBColor::from_u32(0xECECEC)));

    assert_eq!(
        shapes[4].text(),
        Some("Call: 0000 000 0000  |  Email: sales@example.com  |  Web: www.example.com")
    );
    Ok(())
}

#[test]
fn test_json_then_overrides() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir()?;
    let input = write_json(
        dir.path(),
        json!({
            "title": "2019 Ford Focus",
            "price": "£9,995",
            "gearbox": "manual",
            "specs": ["Sat Nav", "Heated Seats"],
            "dealer": {"name": "Acme Motors", "phone": "01632 960000"},
            "colour": "Red"
        }),
    )?;

    let base = load_listing(Some(&input))?;
    let overrides = VehicleOverrides {
        price: Some("£8,995".into()),
        ..Default::default()
    };
    let listing = merge(&base, &overrides)?;

    let output = dir.path().join("focus.pptx");
    render_listing(&listing)?.save(&output)?;

    let slides = inspect_pptx_file(&output)?;
    let texts = slides[0].texts();
    assert_eq!(texts[0], "Acme Motors");
    assert_eq!(texts[1], "£8,995");
    assert_eq!(texts[2], "2019 Ford Focus");
    assert_eq!(
        texts[3],
        "Call: 01632 960000  |  Email: sales@example.com  |  Web: www.example.com"
    );

    let table = slides[0].tables().next().ok_or("no table")?;
    assert_eq!(table[2][1].text, "Manual");
    assert_eq!(table[9][0].text, "Specs");
    assert_eq!(table[9][1].text, "Sat Nav, Heated Seats");
    Ok(())
}

fn package_parts(bytes: &[u8]) -> Result<Vec<(String, String)>, Box<dyn std::error::Error>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut parts = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        let mut xml = String::new();
        file.read_to_string(&mut xml)?;
        parts.push((file.name().to_string(), xml));
    }
    Ok(parts)
}

#[test]
fn test_control_characters_never_reach_the_package() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("vehicle.json");
    std::fs::write(
        &input,
        r#"{"title": "Ford\u000bFocus", "price": "\u0001", "mileage": "12\u001f000"}"#,
    )?;
    let output = dir.path().join("vehicle.pptx");

    let args = Args::try_parse_from([
        "generate-ppt",
        "--input",
        input.to_str().ok_or("path")?,
        "--output",
        output.to_str().ok_or("path")?,
    ])?;
    cli::run(&args)?;

    let bytes = std::fs::read(&output)?;
    for (name, xml) in package_parts(&bytes)? {
        assert!(!xml.contains(is_forbidden_xml_char), "{name} carries a control character");
        let mut reader = quick_xml::Reader::from_str(&xml);
        loop {
            if matches!(reader.read_event()?, quick_xml::events::Event::Eof) {
                break;
            }
        }
    }

    let slides = inspect_pptx(&bytes)?;
    let texts = slides[0].texts();
    assert_eq!(texts[1], "");
    assert_eq!(texts[2], "Ford\u{B}Focus");
    let table = slides[0].tables().next().ok_or("no table")?;
    assert_eq!(table[6][1].text, "12000");

    let (_, core) = package_parts(&bytes)?
        .into_iter()
        .find(|(name, _)| name == "docProps/core.xml")
        .ok_or("no core properties")?;
    assert!(core.contains("<dc:title>FordFocus</dc:title>"));
    Ok(())
}

#[test]
fn test_listing_text_keeps_control_characters() -> TestResult {
    let listing = parse_listing(r#"{"title": "Ford\u000bFocus", "price": "\u0001"}"#)?;
    assert_eq!(listing.title(), "Ford\u{B}Focus");
    assert_eq!(listing.price(), "\u{1}");
    Ok(())
}

#[test]
fn test_equal_listings_produce_identical_packages() -> TestResult {
    let a = VehicleListing::with_defaults();
    let b = VehicleListing::from_map(json!({}).as_object())?;
    assert_eq!(render_listing(&a)?.to_bytes()?, render_listing(&b)?.to_bytes()?);
    Ok(())
}

#[test]
fn test_run_reports_missing_input() -> TestResult {
    let dir = tempfile::tempdir()?;
    let args = Args::try_parse_from([
        "generate-ppt",
        "--input",
        dir.path().join("absent.json").to_str().ok_or("path")?,
        "--output",
        dir.path().join("out.pptx").to_str().ok_or("path")?,
    ])?;

    let err = cli::run(&args).unwrap_err();
    assert!(matches!(err, Error::InputNotFound(_)));
    assert!(err.is_validation());
    assert!(!dir.path().join("out.pptx").exists());
    Ok(())
}

#[test]
fn test_binary_accepts_lowercase_choices() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = write_json(
        dir.path(),
        json!({
            "title": "Integration Test",
            "price": "£1,234",
            "registration": "AB12 XYZ",
            "year": "2024",
            "gearbox": "manual",
            "engine_size": "1.5 L",
            "fuel_type": "diesel",
            "mileage": "1,000",
            "ulez": "no",
            "mot_expiry": "2030-01-01",
            "owners": "1",
            "specs": ["Test Feature"]
        }),
    )?;
    let output = dir.path().join("vehicle.pptx");

    let status = Command::new(env!("CARGO_BIN_EXE_generate-ppt"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .status()?;
    assert!(status.success());

    let slides = inspect_pptx_file(&output)?;
    let table = slides[0].tables().next().ok_or("no table")?;
    assert_eq!(table[7][1].text, "No");
    assert_eq!(table[9][1].text, "Test Feature");
    Ok(())
}

#[test]
fn test_binary_exit_code_for_invalid_choice() -> TestResult {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("vehicle.pptx");

    let result = Command::new(env!("CARGO_BIN_EXE_generate-ppt"))
        .args(["--gearbox", "CVT", "--output"])
        .arg(&output)
        .output()?;

    assert_eq!(result.status.code(), Some(2));
    let stderr = String::from_utf8(result.stderr)?;
    assert!(stderr.contains(
        "Validation error: Invalid Gearbox value: 'CVT'. Must be one of: Automatic, Manual"
    ));
    assert!(!output.exists());
    Ok(())
}
