//! Report renderers: human-readable text, JSON and CSV.
//!
//! Each renderer writes to any `io::Write` so the scan command can target
//! stdout while tests capture into a buffer.

use crate::OutputFormat;
use anyhow::Result;
use chrome_usage_core::units::is_large;
use chrome_usage_core::Report;
use console::{Style, style};
use std::io::Write;

pub const CSV_HEADER: [&str; 6] = [
    "profile_name",
    "profile_dir",
    "profile_size_mb",
    "extension_name",
    "extension_dir",
    "extension_size_mb",
];

pub fn render<W: Write>(report: &Report, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => render_json(report, out),
        OutputFormat::Csv => render_csv(report, out),
        OutputFormat::Pretty => render_pretty(report, out),
    }
}

/// Red and bold for items of 1 GB or more.
fn size_style(size_mb: f64) -> Style {
    if is_large(size_mb) {
        Style::new().red().bold()
    } else {
        Style::new()
    }
}

/// `12.34 MB`, styled by [`size_style`].
fn size_label(size_mb: f64) -> String {
    size_style(size_mb)
        .apply_to(format!("{size_mb:.2} MB"))
        .to_string()
}

pub fn render_pretty<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    if report.is_empty() {
        writeln!(out, "No profiles found or none above the specified threshold.")?;
        return Ok(());
    }

    writeln!(
        out,
        "\n{}",
        style("=== Chrome Profiles (sorted by size) ===").bold().cyan()
    )?;

    for profile in &report.profiles {
        writeln!(
            out,
            "- {} [{}] : {}",
            style(&profile.name).bold(),
            profile.directory.display(),
            size_label(profile.size_mb)
        )?;

        if profile.extensions.is_empty() {
            writeln!(out, "  {}\n", style("(No Extensions or all under threshold)").dim())?;
            continue;
        }

        writeln!(out, "  Extensions (sorted by size):")?;
        for extension in &profile.extensions {
            writeln!(
                out,
                "    • {}: {} => {}",
                extension.name,
                size_label(extension.size_mb),
                extension.directory.display()
            )?;
        }
        writeln!(out)?;
    }

    let summary = &report.summary;
    writeln!(out, "Total profiles displayed: {}", summary.profile_count)?;
    writeln!(
        out,
        "Total disk usage (above threshold): {}",
        size_label(summary.total_size_mb())
    )?;

    if !summary.top_extensions.is_empty() {
        writeln!(
            out,
            "\n{}",
            style(format!(
                "Top {} Largest Extensions (global):",
                summary.top_extensions.len()
            ))
            .bold()
        )?;
        for top in &summary.top_extensions {
            writeln!(
                out,
                "  • {}: {} (Profile: {})",
                top.name,
                size_label(top.size_mb),
                top.profile_name
            )?;
        }
    }
    writeln!(out)?;

    Ok(())
}

pub fn render_json<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    writeln!(out, "{}", report.to_json()?)?;
    Ok(())
}

/// One row per listed extension; a profile without any gets a single row
/// with the extension columns left empty.
pub fn render_csv<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;

    for profile in &report.profiles {
        let profile_dir = profile.directory.display().to_string();
        let profile_mb = format!("{:.2}", profile.size_mb);

        if profile.extensions.is_empty() {
            writer.write_record([profile.name.as_str(), &profile_dir, &profile_mb, "", "", ""])?;
            continue;
        }

        for extension in &profile.extensions {
            writer.write_record([
                profile.name.as_str(),
                &profile_dir,
                &profile_mb,
                &extension.name,
                &extension.directory.display().to_string(),
                &format!("{:.2}", extension.size_mb),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrome_usage_core::units::BYTES_PER_MB;
    use chrome_usage_core::{Extension, Profile, build_report};

    const MB: u64 = BYTES_PER_MB;

    fn report(min_size_mb: f64) -> Report {
        let profiles = vec![
            Profile::new(
                "Work",
                "/data/Default",
                2048 * MB,
                vec![
                    Extension::new("Docs, Offline", "/data/Default/Extensions/aaa", 60 * MB, "Work"),
                    Extension::new("Tiny", "/data/Default/Extensions/bbb", MB, "Work"),
                ],
            ),
            Profile::new("Personal", "/data/Profile 1", 70 * MB, vec![]),
        ];
        build_report(&profiles, min_size_mb).unwrap()
    }

    fn render_to_string(report: &Report, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        render(report, format, &mut buffer).unwrap();
        console::strip_ansi_codes(&String::from_utf8(buffer).unwrap()).to_string()
    }

    #[test]
    fn test_pretty_lists_profiles_extensions_and_summary() {
        let output = render_to_string(&report(50.0), OutputFormat::Pretty);

        assert!(output.contains("=== Chrome Profiles (sorted by size) ==="));
        assert!(output.contains("- Work [/data/Default] : 2048.00 MB"));
        assert!(output.contains("    • Docs, Offline: 60.00 MB => /data/Default/Extensions/aaa"));
        assert!(!output.contains("    • Tiny:"));
        assert!(output.contains("- Personal [/data/Profile 1] : 70.00 MB"));
        assert!(output.contains("(No Extensions or all under threshold)"));
        assert!(output.contains("Total profiles displayed: 2"));
        assert!(output.contains("Total disk usage (above threshold): 2118.00 MB"));
        assert!(output.contains("Top 2 Largest Extensions (global):"));
        assert!(output.contains("  • Tiny: 1.00 MB (Profile: Work)"));

        let work = output.find("- Work").unwrap();
        let personal = output.find("- Personal").unwrap();
        assert!(work < personal);
    }

    #[test]
    fn test_pretty_flags_large_items() {
        assert_eq!(console::strip_ansi_codes(&size_label(2048.0)), "2048.00 MB");

        let large = size_style(1024.0).force_styling(true).apply_to("x").to_string();
        assert_ne!(large, "x");
        assert_eq!(console::strip_ansi_codes(&large), "x");

        let small = size_style(1023.99).force_styling(true).apply_to("x").to_string();
        assert_eq!(small, "x");
    }

    #[test]
    fn test_pretty_empty_report() {
        let output = render_to_string(&report(10_000.0), OutputFormat::Pretty);

        assert_eq!(
            output.trim(),
            "No profiles found or none above the specified threshold."
        );
    }

    #[test]
    fn test_json_output_is_profile_array() {
        let output = render_to_string(&report(50.0), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let profiles = value.as_array().unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0]["profile_name"], "Work");
        assert_eq!(profiles[0]["profile_size_bytes"], 2048 * MB);
        assert_eq!(profiles[0]["extensions"][0]["extension_name"], "Docs, Offline");
        assert_eq!(profiles[0]["extensions"][0]["profile_name"], "Work");
        assert_eq!(profiles[1]["extensions"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_csv_rows() {
        let output = render_to_string(&report(50.0), OutputFormat::Csv);
        let mut reader = csv::Reader::from_reader(output.as_bytes());

        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, CSV_HEADER);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);

        assert_eq!(&rows[0][0], "Work");
        assert_eq!(&rows[0][2], "2048.00");
        assert_eq!(&rows[0][3], "Docs, Offline");
        assert_eq!(&rows[0][5], "60.00");
    }

    #[test]
    fn test_csv_profile_without_extensions_is_one_empty_row() {
        let output = render_to_string(&report(50.0), OutputFormat::Csv);
        let mut reader = csv::Reader::from_reader(output.as_bytes());

        let personal: Vec<csv::StringRecord> = reader
            .records()
            .map(|r| r.unwrap())
            .filter(|r| &r[0] == "Personal")
            .collect();

        assert_eq!(personal.len(), 1);
        assert_eq!(&personal[0][1], "/data/Profile 1");
        assert_eq!(&personal[0][2], "70.00");
        assert_eq!(&personal[0][3], "");
        assert_eq!(&personal[0][4], "");
        assert_eq!(&personal[0][5], "");
    }

    #[test]
    fn test_csv_empty_report_has_header_only() {
        let output = render_to_string(&report(10_000.0), OutputFormat::Csv);

        assert_eq!(output.trim(), CSV_HEADER.join(","));
    }
}
