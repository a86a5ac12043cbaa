//! `revtrack report` subcommand: one-shot revenue table to stdout

use clap::Args;
use serde_json::json;

use crate::services::{format_revenue, Aggregator, FetchService};
use crate::types::AggregatedProduct;

/// Print the aggregated revenue table
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Only include products whose name starts with this prefix
    #[arg(long, value_name = "PREFIX", default_value = "")]
    pub filter: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ReportArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let products = match FetchService::new().fetch_all() {
            Ok(records) => Aggregator::merge_sorted(&records),
            Err(e) => {
                // Same contract as the TUI: a failed fetch becomes an empty table
                eprintln!("[revtrack] Warning: fetch failed: {}", e);
                Vec::new()
            }
        };

        let rows = Aggregator::filter_by_prefix(&products, &self.filter);
        let total = Aggregator::total_revenue(&rows);

        if self.json {
            println!("{}", render_json(&rows, total));
        } else {
            print!("{}", render_text(&rows, total));
        }

        Ok(())
    }
}

fn render_json(rows: &[&AggregatedProduct], total: f64) -> String {
    let doc = json!({
        "products": rows,
        "totalRevenue": total,
    });
    serde_json::to_string_pretty(&doc).unwrap_or_else(|_| "{}".to_string())
}

fn render_text(rows: &[&AggregatedProduct], total: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<32}{:>16}\n", "Product Name", "Total Revenue"));
    out.push_str(&format!("{}\n", "─".repeat(48)));

    for product in rows {
        out.push_str(&format!(
            "{:<32}{:>16}\n",
            product.name,
            format_revenue(product.revenue)
        ));
    }

    out.push_str(&format!("{}\n", "─".repeat(48)));
    out.push_str(&format!(
        "{:<32}{:>16}\n",
        "Total Revenue",
        format_revenue(total)
    ));
    out
}
