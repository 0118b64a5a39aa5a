use assert_cmd::prelude::*;
use std::process::Command;
type STDRESULT = Result<(), Box<dyn std::error::Error>>;

fn bits_to_bytes(bits: &str) -> Vec<u8> {
    let mut out = Vec::new();
    let mut acc = 0u8;
    let mut count = 0u32;
    for c in bits.chars() {
        acc = (acc << 1) | if c == '1' { 1 } else { 0 };
        count += 1;
        if count == 8 {
            out.push(acc);
            acc = 0;
            count = 0;
        }
    }
    if count > 0 {
        acc <<= 8 - count;
        out.push(acc);
    }
    out
}

fn header_bytes(width: u16, height: u16, flags: u8) -> Vec<u8> {
    let mut v = Vec::from(*b"NYA!");
    v.extend_from_slice(&width.to_le_bytes());
    v.extend_from_slice(&height.to_le_bytes());
    v.push(flags);
    v
}

/// A 1x1 RGB image, no filter, holding a single literal pixel 0xFFFFFFFF
/// (alpha forced opaque by the reader). Same shape as the decoder's own
/// `s1_single_pixel_literal` unit test, built fresh here since integration
/// tests can't reach a sibling module's private helpers.
fn single_pixel_fixture() -> Vec<u8> {
    let mut stream = header_bytes(1, 1, 0);
    let bits = "1".to_string()
        + "000000000000000000000000" // unused single-leaf tree
        + "00" // tag: LiteralSingle
        + "111111111111111111111111";
    stream.extend(bits_to_bytes(&bits));
    stream
}

#[test]
fn info_reports_header_fields() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let in_path = dir.path().join("pixel.nya");
    std::fs::write(&in_path, single_pixel_fixture())?;

    Command::cargo_bin("nyadecode")?
        .arg("info")
        .arg("-i").arg(&in_path)
        .assert()
        .success()
        .stdout(predicates::str::contains("width:       1"))
        .stdout(predicates::str::contains("height:      1"))
        .stdout(predicates::str::contains("color depth: 24"))
        .stdout(predicates::str::contains("filter:      None"));
    Ok(())
}

#[test]
fn decode_writes_raw_rgba_bytes() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let in_path = dir.path().join("pixel.nya");
    let out_path = dir.path().join("pixel.raw");
    std::fs::write(&in_path, single_pixel_fixture())?;

    Command::cargo_bin("nyadecode")?
        .arg("decode")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&out_path)
        .arg("-f").arg("raw")
        .assert()
        .success();

    let bytes = std::fs::read(&out_path)?;
    assert_eq!(bytes, vec![0xFF, 0xFF, 0xFF, 0xFF]);
    Ok(())
}

#[test]
fn decode_writes_ppm_with_alpha_dropped() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let in_path = dir.path().join("pixel.nya");
    let out_path = dir.path().join("pixel.ppm");
    std::fs::write(&in_path, single_pixel_fixture())?;

    Command::cargo_bin("nyadecode")?
        .arg("decode")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&out_path)
        .arg("-f").arg("ppm")
        .assert()
        .success();

    let bytes = std::fs::read(&out_path)?;
    let mut expected = b"P6\n1 1\n255\n".to_vec();
    expected.extend_from_slice(&[0xFF, 0xFF, 0xFF]);
    assert_eq!(bytes, expected);
    Ok(())
}

#[test]
fn decode_rejects_non_nya_extension() -> STDRESULT {
    let dir = tempfile::tempdir()?;
    let in_path = dir.path().join("pixel.png");
    std::fs::write(&in_path, single_pixel_fixture())?;

    Command::cargo_bin("nyadecode")?
        .arg("info")
        .arg("-i").arg(&in_path)
        .assert()
        .failure();
    Ok(())
}
