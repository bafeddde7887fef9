use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::optics::curve::DispersionCurve;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write curves to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – long format, one row per point: `material,wavelength_um,n`
/// * `.json` – `[{ "material": ..., "wavelength_um": [...], "n": [...] }, ...]`
///
/// Non-finite indices become empty CSV cells / JSON `null`.
pub fn export_file(path: &Path, curves: &[DispersionCurve]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = || {
        std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))
    };

    match ext.as_str() {
        "csv" => write_csv(file()?, curves),
        "json" => write_json(file()?, curves),
        other => bail!("Unsupported export extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CsvRow<'a> {
    material: &'a str,
    wavelength_um: f64,
    n: Option<f64>,
}

pub fn write_csv<W: Write>(writer: W, curves: &[DispersionCurve]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for curve in curves {
        for [w, n] in curve.points() {
            wtr.serialize(CsvRow {
                material: &curve.material,
                wavelength_um: w,
                n: finite(n),
            })
            .with_context(|| format!("writing CSV row for {}", curve.material))?;
        }
    }
    if curves.iter().all(DispersionCurve::is_empty) {
        // serialize() only emits the header with the first row.
        wtr.write_record(["material", "wavelength_um", "n"])
            .context("writing CSV header")?;
    }
    wtr.flush().context("flushing CSV")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct JsonCurve<'a> {
    material: &'a str,
    wavelength_um: &'a [f64],
    n: Vec<Option<f64>>,
}

pub fn write_json<W: Write>(writer: W, curves: &[DispersionCurve]) -> Result<()> {
    let records: Vec<JsonCurve> = curves
        .iter()
        .map(|c| JsonCurve {
            material: &c.material,
            wavelength_um: &c.wavelength_um,
            n: c.n.iter().copied().map(finite).collect(),
        })
        .collect();
    serde_json::to_writer_pretty(writer, &records).context("writing JSON")?;
    Ok(())
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_curves() -> Vec<DispersionCurve> {
        vec![
            DispersionCurve {
                material: "BK7 Glass".into(),
                wavelength_um: vec![0.5, 1.0],
                n: vec![1.5, 1.25],
            },
            DispersionCurve {
                material: "Water".into(),
                wavelength_um: vec![0.5],
                n: vec![f64::NAN],
            },
        ]
    }

    #[test]
    fn csv_long_format() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample_curves()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "material,wavelength_um,n",
                "BK7 Glass,0.5,1.5",
                "BK7 Glass,1.0,1.25",
                "Water,0.5,",
            ]
        );
    }

    #[test]
    fn csv_without_points_still_has_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "material,wavelength_um,n\n");
    }

    #[test]
    fn json_uses_null_for_nan() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample_curves()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["material"], "BK7 Glass");
        assert_eq!(arr[0]["n"][1], 1.25);
        assert!(arr[1]["n"][0].is_null());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = export_file(Path::new("curves.xlsx"), &sample_curves()).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
