//! Report rendering — plain-text table and LaTeX table.
//!
//! Both views list provinces in descending population order with a
//! grand-total row. Column widths in the plain-text table are computed
//! from the data: digit count of the grand total plus an allowance for
//! thousands separators.

use crate::figure::{format_grouped, ThousandsSeparator};
use crate::province::Province;

const HEADINGS: [&str; 3] = ["Province", "Population", "Capital City and Population"];
const TOTAL_LABEL: &str = "TOTAL";
const MISSING: &str = "unknown";

/// Width needed for a right-aligned, comma-grouped rendering of `n`,
/// with one column of slack. Floor of log10 gives the digit count less
/// one; a third of that again covers the separators.
fn numeric_field_width(n: u64) -> usize {
    let d = n.max(1).to_string().len() - 1;
    d + d / 3 + 2
}

fn sorted_by_population_desc(provinces: &[Province]) -> Vec<&Province> {
    let mut rows: Vec<&Province> = provinces.iter().collect();
    rows.sort_by(|a, b| {
        b.population
            .cmp(&a.population)
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

fn grand_total(provinces: &[Province]) -> u64 {
    provinces.iter().map(|p| p.population.get()).sum()
}

pub struct PlainTextReport {
    lines: Vec<String>,
}

impl PlainTextReport {
    pub fn new(provinces: &[Province]) -> Self {
        let rows = sorted_by_population_desc(provinces);
        let total = grand_total(provinces);
        let total_str = format_grouped(total, ThousandsSeparator::Comma);

        let w = Self::column_widths(&rows, total);
        let rule_len = w.iter().sum::<usize>() + 6;
        let rule: String = "-".repeat(rule_len);

        let mut lines = Vec::with_capacity(rows.len() + 6);
        lines.push(rule.clone());
        lines.push(format!(
            "{:<w0$}{:>w1$}   {:<w2$}",
            HEADINGS[0],
            HEADINGS[1],
            HEADINGS[2],
            w0 = w[0],
            w1 = w[1],
            w2 = w[2]
        ));
        lines.push(rule.clone());
        for province in &rows {
            lines.push(format!(
                "{:<w0$}{:>w1$}   {:<w2$} {:>w3$}",
                province.name,
                province.population.formatted(ThousandsSeparator::Comma),
                province.capital.name,
                province.capital.population_string(),
                w0 = w[0],
                w1 = w[1],
                w2 = w[2],
                w3 = w[3]
            ));
        }
        lines.push(String::new());
        lines.push(format!(
            "{:<w0$}{:>w1$}",
            TOTAL_LABEL,
            total_str,
            w0 = w[0],
            w1 = w[1]
        ));
        lines.push(rule);

        Self { lines }
    }

    /// Widths for: province name, population, capital name, capital
    /// population.
    fn column_widths(rows: &[&Province], total: u64) -> [usize; 4] {
        let name_w = rows
            .iter()
            .map(|p| p.name.len())
            .max()
            .unwrap_or(0)
            .max(HEADINGS[0].len())
            + 1;
        let population_w = numeric_field_width(total).max(HEADINGS[1].len());
        let capital_w = rows
            .iter()
            .map(|p| p.capital.name.len())
            .max()
            .unwrap_or(0)
            + 1;
        let max_capital_pop = rows
            .iter()
            .filter_map(|p| p.capital.population)
            .map(|p| p.get())
            .max();
        let any_unknown = rows.iter().any(|p| p.capital.population.is_none());
        let mut capital_pop_w = max_capital_pop.map(numeric_field_width).unwrap_or(0);
        if any_unknown {
            capital_pop_w = capital_pop_w.max(MISSING.len());
        }
        [name_w, population_w, capital_w, capital_pop_w]
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// LaTeX `table`/`tabular` rendering of the same data.
pub struct LatexTable {
    rows: Vec<(String, String, String)>,
    total: u64,
}

impl LatexTable {
    pub fn new(provinces: &[Province]) -> Self {
        let rows = sorted_by_population_desc(provinces)
            .into_iter()
            .map(|p| {
                (
                    p.name.clone(),
                    p.capital.name.clone(),
                    p.population.formatted(ThousandsSeparator::LatexHalfSpace),
                )
            })
            .collect();
        Self {
            rows,
            total: grand_total(provinces),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("\\begin{table}\n");
        out.push_str("\\centering\n");
        out.push_str("\\caption{Population Figures for the Western Provinces} \\vspace{1ex}\n");
        out.push_str("\\label{tab:population}\n");
        out.push_str("\\begin{tabular}{|l|l|r|}\n");
        out.push_str("\\hline\n");
        out.push_str(&self.headings());
        out.push_str("\\hline\n");
        for (name, capital, population) in &self.rows {
            out.push_str(&format!("{name} & {capital} & {population}\\\\\n"));
        }
        out.push_str(&self.total_line());
        out.push_str("\\hline\n");
        out.push_str("\\end{tabular}\n");
        out.push_str("\\end{table}");
        out
    }

    fn headings(&self) -> String {
        let cells: Vec<String> = ["Province", "Capital City", "Population"]
            .iter()
            .map(|h| format!("\\textbf{{{h}}}"))
            .collect();
        format!("{}\\\\[1pt]\n", cells.join(" & "))
    }

    fn total_line(&self) -> String {
        let total = format_grouped(self.total, ThousandsSeparator::LatexHalfSpace);
        format!("&&\\\\\n{TOTAL_LABEL} && {total}\\\\\n")
    }
}
