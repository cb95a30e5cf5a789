//! Inspect command implementation

use console::Style;
use serde::Serialize;

use crate::cli::InspectArgs;
use chartloader::{Chart, ChartError, LoadOptions, Metadata, Result};

/// Serializable view of a loaded chart
#[derive(Serialize)]
struct ChartSummary<'a> {
    metadata: &'a Metadata,
    has_values: bool,
    templates: Vec<&'a str>,
    files: Vec<&'a str>,
    dependencies: Vec<ChartSummary<'a>>,
}

impl<'a> ChartSummary<'a> {
    fn from_chart(chart: &'a Chart) -> Self {
        Self {
            metadata: &chart.metadata,
            has_values: chart.values.is_some(),
            templates: chart.templates.iter().map(|t| t.name.as_str()).collect(),
            files: chart.files.iter().map(|f| f.name.as_str()).collect(),
            dependencies: chart.dependencies.iter().map(Self::from_chart).collect(),
        }
    }
}

pub fn run(args: InspectArgs) -> Result<()> {
    let options = LoadOptions::new()
        .with_max_depth(args.max_depth)
        .with_ignore_file(args.ignore_file);
    let chart = chartloader::load(&args.path, &options)?;

    if args.json {
        println!("{}", render_json(&chart)?);
    } else {
        print!("{}", render_tree(&chart));
    }
    Ok(())
}

fn render_json(chart: &Chart) -> Result<String> {
    serde_json::to_string_pretty(&ChartSummary::from_chart(chart)).map_err(|e| {
        ChartError::Format {
            message: format!("failed to serialize chart summary: {e}"),
        }
    })
}

fn render_tree(chart: &Chart) -> String {
    let mut out = String::new();
    render_chart(chart, 0, &mut out);
    out
}

fn render_chart(chart: &Chart, level: usize, out: &mut String) {
    let indent = "  ".repeat(level);
    let name = Style::new().bold().green();
    let label = Style::new().cyan();

    let version = chart.metadata.version.as_deref().unwrap_or("-");
    out.push_str(&format!("{indent}{} {version}\n", name.apply_to(chart.name())));
    if let Some(description) = &chart.metadata.description {
        out.push_str(&format!("{indent}  {description}\n"));
    }
    out.push_str(&format!(
        "{indent}  {} {}\n",
        label.apply_to("values:"),
        if chart.values.is_some() { "yes" } else { "no" }
    ));

    out.push_str(&format!(
        "{indent}  {} {}\n",
        label.apply_to("templates:"),
        chart.templates.len()
    ));
    for template in &chart.templates {
        out.push_str(&format!("{indent}    {}\n", template.name));
    }

    out.push_str(&format!(
        "{indent}  {} {}\n",
        label.apply_to("files:"),
        chart.files.len()
    ));
    for file in &chart.files {
        out.push_str(&format!("{indent}    {}\n", file.name));
    }

    if !chart.dependencies.is_empty() {
        out.push_str(&format!(
            "{indent}  {} {}\n",
            label.apply_to("dependencies:"),
            chart.dependencies.len()
        ));
        for dependency in &chart.dependencies {
            render_chart(dependency, level + 2, out);
        }
    }
}
