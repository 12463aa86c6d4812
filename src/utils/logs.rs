use console::{measure_text_width, Style};

use crate::assessment::RiskResult;
use crate::scoring::{ContributingFactor, RiskLevel};

pub const TREE_BRANCH: char = '\u{251C}';
pub const TREE_END: char = '\u{2514}';
pub const TREE_HORIZ: char = '\u{2500}';
pub const TREE_VERT: char = '\u{2502}';
pub const BAR_FULL: char = '\u{2588}';
pub const BAR_EMPTY: char = '\u{2591}';

const TREE_PREFIX_WIDTH: usize = 4;
const VALUE_COLUMN: usize = 25;
const BAR_WIDTH: usize = 20;
const WRAP_WIDTH: usize = 76;

pub const DISCLAIMER: &str = "This tool is for illustrative and educational purposes only. \
The predictions are based on simulated data and a simplified model. It is NOT a substitute for \
professional medical advice, diagnosis, or treatment. Always seek the advice of your physician \
or other qualified health provider with any questions you may have regarding a medical condition.";

fn tree_branch() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_BRANCH, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn tree_end() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_END, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn tree_indent() -> String {
    dim().apply_to(format!("{}   ", TREE_VERT)).to_string()
}

fn tree_blank() -> String {
    " ".repeat(TREE_PREFIX_WIDTH)
}

pub fn dim() -> Style {
    Style::new().dim()
}

fn blue() -> Style {
    Style::new().blue()
}

fn cyan() -> Style {
    Style::new().cyan()
}

fn green() -> Style {
    Style::new().green()
}

fn red() -> Style {
    Style::new().red()
}

fn yellow() -> Style {
    Style::new().yellow()
}

fn bold() -> Style {
    Style::new().bold()
}

fn init_prefix() -> String {
    blue().apply_to("[INIT]").to_string()
}

pub fn level_style(level: RiskLevel) -> Style {
    match level {
        RiskLevel::Low => green(),
        RiskLevel::Moderate => yellow(),
        RiskLevel::High => Style::new().color256(208),
        RiskLevel::VeryHigh => red(),
    }
}

pub fn pad_label(label: &str, depth: usize) -> String {
    let prefix_width = depth * TREE_PREFIX_WIDTH;
    let target_width = VALUE_COLUMN.saturating_sub(prefix_width);
    let current_width = measure_text_width(label);
    if current_width < target_width {
        format!("{}{}", label, " ".repeat(target_width - current_width))
    } else {
        format!("{} ", label)
    }
}

/// Horizontal bar for an impact score out of 10.
pub fn impact_bar(impact: u8) -> String {
    let filled = (usize::from(impact.min(10)) * BAR_WIDTH) / 10;
    format!(
        "{}{}",
        String::from(BAR_FULL).repeat(filled),
        String::from(BAR_EMPTY).repeat(BAR_WIDTH - filled)
    )
}

pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Greedy word wrap, keeping existing line breaks.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() && measure_text_width(&line) + 1 + measure_text_width(word) > width
            {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}

pub fn log_init(model: Option<&str>) {
    let status = match model {
        Some(model) => format!(
            "{} ({})",
            green().apply_to("enabled"),
            cyan().apply_to(model)
        ),
        None => format!(
            "{} (no API key, using fallback text)",
            yellow().apply_to("disabled")
        ),
    };
    println!("{} AI recommendations are {}.", init_prefix(), status);
}

pub fn log_scoring() {
    println!("{} scoring assessment...", init_prefix());
}

pub fn log_error_banner(message: &str) {
    let prefix = red().bold().apply_to("[ERROR]");
    eprintln!("{} {}", prefix, red().apply_to("prediction failed"));
    eprintln!("{}{}", tree_end(), message);
}

fn factor_lines(factors: &[ContributingFactor]) -> Vec<String> {
    if factors.is_empty() {
        return vec![format!("{}{}", tree_end(), dim().apply_to("none"))];
    }

    let count = factors.len();
    let mut lines = Vec::new();
    for (i, factor) in factors.iter().enumerate() {
        let is_last = i == count - 1;
        let (branch, indent) = if is_last {
            (tree_end(), tree_blank())
        } else {
            (tree_branch(), tree_indent())
        };

        lines.push(format!(
            "{}{} {} {}",
            branch,
            pad_label(&factor.name, 1),
            cyan().apply_to(impact_bar(factor.impact_score)),
            bold().apply_to(format!("{:>2}/10", factor.impact_score))
        ));
        lines.push(format!(
            "{}{}",
            indent,
            dim().apply_to(&factor.description)
        ));
    }
    lines
}

fn paragraph_lines(text: &str) -> Vec<String> {
    wrap(text, WRAP_WIDTH)
        .into_iter()
        .map(|line| format!("{}{}", tree_blank(), line))
        .collect()
}

pub fn render_result(result: &RiskResult) -> String {
    let mut lines: Vec<String> = Vec::new();
    let style = level_style(result.level);

    lines.push(format!(
        "{}",
        bold().apply_to("NEONATAL EPILEPSY RISK ASSESSMENT")
    ));
    lines.push(String::new());

    lines.push(format!("{}", bold().apply_to("RESULT")));
    lines.push(format!(
        "{}{} {}",
        tree_branch(),
        pad_label("risk score", 1),
        bold().apply_to(format!("{}%", result.overall_score))
    ));
    lines.push(format!(
        "{}{} {}",
        tree_branch(),
        pad_label("risk level", 1),
        style.bold().apply_to(format!("[{}]", result.level))
    ));
    lines.push(format!(
        "{}{} {}",
        tree_end(),
        pad_label("confidence", 1),
        format_percent(result.confidence)
    ));

    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("CONTRIBUTING FACTORS")));
    lines.extend(factor_lines(&result.factors));

    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("SUMMARY")));
    lines.extend(paragraph_lines(&result.summary));

    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("RECOMMENDATIONS")));
    lines.extend(paragraph_lines(&result.recommendations));

    lines.join("\n")
}

pub fn print_result(result: &RiskResult) {
    println!("\n{}\n", render_result(result));
}

pub fn print_disclaimer() {
    println!("{}", yellow().bold().apply_to("IMPORTANT DISCLAIMER"));
    for line in wrap(DISCLAIMER, WRAP_WIDTH) {
        println!("{}{}", tree_blank(), yellow().apply_to(line));
    }
}
