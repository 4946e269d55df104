//! Report export to Excel and JSON.

use std::path::{Path, PathBuf};

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use serde::Serialize;

use crate::error::Result;
use crate::models::{AnalysisModule, CompanyMetricsBundle, Competitor, ModuleId};
use crate::report::AnalysisReport;

/// Output format chosen from the export menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Json => "json",
        }
    }

    fn filter_name(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel Files",
            ExportFormat::Json => "JSON Files",
        }
    }
}

/// JSON document layout.
#[derive(Serialize)]
struct ReportDocument<'a> {
    generated_at: String,
    companies: &'a [Competitor],
    modules: Vec<ModuleId>,
    report: &'a AnalysisReport,
}

/// Write the report and company list as pretty-printed JSON.
pub fn export_report_to_json(
    report: &AnalysisReport,
    companies: &[Competitor],
    modules: &[AnalysisModule],
    path: &Path,
) -> Result<()> {
    let doc = ReportDocument {
        generated_at: Local::now().to_rfc3339(),
        companies,
        modules: modules.iter().map(|m| m.id).collect(),
        report,
    };
    let content = serde_json::to_string_pretty(&doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Write an Overview sheet plus one sheet per enabled module.
pub fn export_report_to_excel(
    report: &AnalysisReport,
    companies: &[Competitor],
    modules: &[AnalysisModule],
    path: &Path,
) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    let overview = workbook.add_worksheet();
    overview.set_name("Overview")?;
    write_rows(
        overview,
        &header_format,
        &["Company", "URL", "Domain Authority", "Monthly Visits", "Features", "Positive Reviews %"],
        companies,
        report,
        |b| {
            vec![
                Cell::Num(f64::from(b.seo.domain_authority)),
                Cell::Num(f64::from(b.traffic.monthly_visits)),
                Cell::Num(b.features.len() as f64),
                Cell::Num(f64::from(b.reputation.positive)),
            ]
        },
    )?;

    for module in modules {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name(module.id))?;
        write_module_sheet(worksheet, &header_format, module.id, companies, report)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// One spreadsheet cell after the company columns.
enum Cell {
    Num(f64),
    Text(String),
}

fn write_module_sheet(
    worksheet: &mut Worksheet,
    header_format: &Format,
    module: ModuleId,
    companies: &[Competitor],
    report: &AnalysisReport,
) -> std::result::Result<(), XlsxError> {
    match module {
        ModuleId::Seo => write_rows(
            worksheet,
            header_format,
            &["Company", "URL", "Domain Authority", "Organic Keywords", "Backlinks"],
            companies,
            report,
            |b| {
                vec![
                    Cell::Num(f64::from(b.seo.domain_authority)),
                    Cell::Num(f64::from(b.seo.keywords)),
                    Cell::Num(f64::from(b.seo.backlinks)),
                ]
            },
        ),
        ModuleId::Traffic => write_rows(
            worksheet,
            header_format,
            &["Company", "URL", "Monthly Visits", "Bounce Rate %", "Avg. Stay (min)", "Sources"],
            companies,
            report,
            |b| {
                let sources = b
                    .traffic
                    .sources
                    .iter()
                    .map(|s| format!("{} {}%", s.name, s.value))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![
                    Cell::Num(f64::from(b.traffic.monthly_visits)),
                    Cell::Num(f64::from(b.traffic.bounce_rate)),
                    Cell::Num(b.traffic.avg_stay),
                    Cell::Text(sources),
                ]
            },
        ),
        ModuleId::Features => write_rows(
            worksheet,
            header_format,
            &["Company", "URL", "Features", "Pricing"],
            companies,
            report,
            |b| {
                let pricing = b
                    .pricing
                    .iter()
                    .map(|t| format!("{}: {}", t.name, t.price))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![Cell::Text(b.features.join(", ")), Cell::Text(pricing)]
            },
        ),
        ModuleId::Social => write_rows(
            worksheet,
            header_format,
            &["Company", "URL", "Platform Followers", "Engagement %"],
            companies,
            report,
            |b| {
                let followers = b
                    .social
                    .iter()
                    .map(|s| format!("{} {}", s.platform, s.followers))
                    .collect::<Vec<_>>()
                    .join(", ");
                let engagement = b
                    .social
                    .iter()
                    .map(|s| format!("{} {:.2}", s.platform, s.engagement_rate))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![Cell::Text(followers), Cell::Text(engagement)]
            },
        ),
        ModuleId::Reputation => write_rows(
            worksheet,
            header_format,
            &["Company", "URL", "Positive", "Neutral", "Negative"],
            companies,
            report,
            |b| {
                vec![
                    Cell::Num(f64::from(b.reputation.positive)),
                    Cell::Num(f64::from(b.reputation.neutral)),
                    Cell::Num(f64::from(b.reputation.negative)),
                ]
            },
        ),
        ModuleId::TechStack => write_rows(
            worksheet,
            header_format,
            &["Company", "URL", "Frontend", "Backend", "Analytics"],
            companies,
            report,
            |b| {
                vec![
                    Cell::Text(b.tech_stack.frontend.join(", ")),
                    Cell::Text(b.tech_stack.backend.join(", ")),
                    Cell::Text(b.tech_stack.analytics.join(", ")),
                ]
            },
        ),
        ModuleId::Advertising => write_rows(
            worksheet,
            header_format,
            &["Company", "URL", "Monthly Ad Spend (USD)", "Top Keywords"],
            companies,
            report,
            |b| {
                vec![
                    Cell::Num(f64::from(b.advertising.monthly_ad_spend)),
                    Cell::Text(b.advertising.top_keywords.join(", ")),
                ]
            },
        ),
        ModuleId::Hiring => write_rows(
            worksheet,
            header_format,
            &["Company", "URL", "Open Roles", "Focus Areas"],
            companies,
            report,
            |b| {
                vec![
                    Cell::Num(f64::from(b.hiring.open_roles)),
                    Cell::Text(b.hiring.focus_areas.join(", ")),
                ]
            },
        ),
        ModuleId::Content => write_rows(
            worksheet,
            header_format,
            &["Company", "URL", "Blog Frequency", "Top Topics"],
            companies,
            report,
            |b| {
                vec![
                    Cell::Text(b.content.blog_frequency.clone()),
                    Cell::Text(b.content.top_topics.join(", ")),
                ]
            },
        ),
    }
}

/// Header row, one row per company, column widths, autofilter and frozen header.
fn write_rows<F>(
    worksheet: &mut Worksheet,
    header_format: &Format,
    headers: &[&str],
    companies: &[Competitor],
    report: &AnalysisReport,
    cells: F,
) -> std::result::Result<(), XlsxError>
where
    F: Fn(&CompanyMetricsBundle) -> Vec<Cell>,
{
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
        worksheet.set_column_width(col as u16, if col < 2 { 25 } else { 20 })?;
    }

    for (idx, company) in companies.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_string(row, 0, &company.name)?;
        worksheet.write_string(row, 1, &company.url)?;

        let Some(bundle) = report.get(&company.id) else {
            continue;
        };
        for (offset, cell) in cells(bundle).into_iter().enumerate() {
            let col = (offset + 2) as u16;
            match cell {
                Cell::Num(n) => worksheet.write_number(row, col, n)?,
                Cell::Text(s) => worksheet.write_string(row, col, s)?,
            };
        }
    }

    // Autofilter
    if !companies.is_empty() {
        worksheet.autofilter(0, 0, companies.len() as u32, (headers.len() - 1) as u16)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Worksheet name for a module (max 31 chars, no special characters).
fn sheet_name(module: ModuleId) -> &'static str {
    match module {
        ModuleId::Seo => "SEO",
        ModuleId::Traffic => "Traffic",
        ModuleId::Features => "Features & Pricing",
        ModuleId::Social => "Social",
        ModuleId::Reputation => "Reputation",
        ModuleId::TechStack => "Tech Stack",
        ModuleId::Advertising => "Advertising",
        ModuleId::Hiring => "Hiring",
        ModuleId::Content => "Content",
    }
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str, format: ExportFormat, directory: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter(format.filter_name(), &[format.extension()]);
    if let Some(dir) = directory {
        dialog = dialog.set_directory(dir);
    }
    dialog.save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str, format: ExportFormat) -> String {
    let now = Local::now();
    format!(
        "{prefix}_{ts}.{ext}",
        ts = now.format("%Y%m%d_%H%M%S"),
        ext = format.extension()
    )
}

/// Write the report in the chosen format.
pub fn export_report(
    format: ExportFormat,
    report: &AnalysisReport,
    companies: &[Competitor],
    modules: &[AnalysisModule],
    path: &Path,
) -> Result<()> {
    match format {
        ExportFormat::Excel => export_report_to_excel(report, companies, modules, path)?,
        ExportFormat::Json => export_report_to_json(report, companies, modules, path)?,
    }
    tracing::info!("Exported report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ALL_MODULES;

    fn fixture() -> (AnalysisReport, Vec<Competitor>) {
        let mut companies = vec![Competitor::user_company("mycorp.com")];
        companies.extend(Competitor::seed_list().into_iter().take(2));
        let report = AnalysisReport::for_companies(&companies);
        (report, companies)
    }

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("competitor_report", ExportFormat::Excel);
        assert!(name.starts_with("competitor_report_"));
        assert!(name.ends_with(".xlsx"));
        // prefix + '_' + YYYYmmdd_HHMMSS + ".xlsx"
        assert_eq!(name.len(), "competitor_report_".len() + 15 + 5);
    }

    #[test]
    fn test_json_export_contains_every_company() {
        let (report, companies) = fixture();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        export_report(ExportFormat::Json, &report, &companies, &ALL_MODULES[..2], &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let bundles = &value["report"]["bundles"];
        for company in &companies {
            assert!(bundles.get(&company.id).is_some(), "{}", company.id);
        }
        assert_eq!(value["modules"], serde_json::json!(["seo", "traffic"]));
    }

    #[test]
    fn test_excel_export_writes_file() {
        let (report, companies) = fixture();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        export_report(ExportFormat::Excel, &report, &companies, &ALL_MODULES, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
