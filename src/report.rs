//! Human-readable presentation of pricing results.
use crate::pricing::{
    ClientPrice, ENTERPRISE_SHARE, INNOVATION_SHARE, PROFIT_SHARE, PeriodPrice, ProposalResult,
};
use crate::units::{Dimensionless, Money};
use std::fmt::Write;

/// Width of the label column in the report
const LABEL_WIDTH: usize = 44;

/// Width of the amount column in the report
const AMOUNT_WIDTH: usize = 16;

/// Format an amount of money as US dollars, e.g. `$1,234.50` or `-$5.00`
pub fn format_currency(amount: Money) -> String {
    let value = amount.value();
    let digits = format!("{:.2}", value.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    // Insert thousands separators
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Don't print "-$0.00" for tiny negative values
    let sign = if value < 0.0 && digits.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    format!("{sign}${grouped}.{fraction}")
}

/// Format a share as a whole-number percentage, e.g. `30%`
fn format_percent(share: Dimensionless) -> String {
    format!("{}%", (share.value() * 100.0).round())
}

/// Write a line with a label on the left and an amount on the right
fn write_row(out: &mut String, indent: usize, label: &str, amount: &str) {
    let label_width = LABEL_WIDTH.saturating_sub(indent);
    let amount_width = AMOUNT_WIDTH;
    writeln!(
        out,
        "{:indent$}{label:<label_width$}{amount:>amount_width$}",
        ""
    )
    .unwrap();
}

/// Write the client price block for a single period
fn write_period(out: &mut String, period: &PeriodPrice) {
    write_row(
        out,
        2,
        &period.label.to_uppercase(),
        &format!("Total: {}", format_currency(period.revenue_with_tax)),
    );

    match &period.price {
        ClientPrice::Hourly(rates) => {
            writeln!(out, "    Client Hourly Rates (Loaded)").unwrap();
            for rate in rates {
                write_row(
                    out,
                    4,
                    &format!("{}x {}", rate.quantity, rate.role),
                    &format!("{}/hr", format_currency(Money(rate.rate.value()))),
                );
            }
            writeln!(out, "    Includes materials & overheads").unwrap();
        }
        ClientPrice::PerParticipant(rate) => {
            write_row(
                out,
                4,
                "Price Per Pax",
                &format_currency(Money(rate.value())),
            );
            writeln!(out, "    based on {} pax", period.participants).unwrap();
        }
        ClientPrice::LumpSum(amount) => {
            write_row(out, 4, "Lump Sum Package", &format_currency(*amount));
        }
        ClientPrice::Unpriced(reason) => {
            writeln!(out, "    {reason}").unwrap();
        }
    }
}

/// Render the results of pricing a proposal as plain text
pub fn render_report(result: &ProposalResult) -> String {
    let mut out = String::new();

    let tax_note = if result.tax_rate.is_positive() {
        format!("(Includes {} tax)", format_percent(result.tax_rate))
    } else {
        "(No tax applied)".to_string()
    };
    write_row(
        &mut out,
        0,
        "Total Proposal Value",
        &format_currency(result.total),
    );
    writeln!(out, "{tax_note}").unwrap();
    write_row(
        &mut out,
        0,
        "Project Cost",
        &format_currency(result.project_cost),
    );

    writeln!(out, "\nINTERNAL COSTS").unwrap();
    write_row(
        &mut out,
        2,
        "Manpower",
        &format_currency(result.manpower_cost),
    );
    for line in &result.manpower_lines {
        write_row(
            &mut out,
            4,
            &format!(
                "{}x {} @ {}/hr",
                line.quantity,
                line.role,
                format_currency(Money(line.hourly_rate.value()))
            ),
            &format_currency(line.total_cost),
        );
    }
    writeln!(out, "    Total Hours: {} hrs", result.total_hours).unwrap();

    write_row(
        &mut out,
        2,
        "Materials",
        &format_currency(result.material_cost),
    );
    if result.material_lines.is_empty() {
        writeln!(out, "    No material data").unwrap();
    } else {
        for line in &result.material_lines {
            write_row(
                &mut out,
                4,
                &format!(
                    "{}x {} @ {}",
                    line.quantity,
                    line.name,
                    format_currency(line.unit_cost)
                ),
                &format_currency(line.total_cost),
            );
        }
        writeln!(
            out,
            "    Applied across {} period(s)",
            result.period_count
        )
        .unwrap();
    }

    writeln!(out, "\nBREAKDOWN").unwrap();
    for (name, share, amount) in [
        ("Enterprise", ENTERPRISE_SHARE, result.breakdown.enterprise),
        ("Innovation", INNOVATION_SHARE, result.breakdown.innovation),
        ("Profit", PROFIT_SHARE, result.breakdown.profit),
    ] {
        write_row(
            &mut out,
            2,
            &format!("{name} ({})", format_percent(share)),
            &format_currency(amount),
        );
    }

    writeln!(out, "\nCLIENT QUOTATION ({})", result.pricing_unit).unwrap();
    for period in &result.periods {
        write_period(&mut out, period);
    }

    out
}
