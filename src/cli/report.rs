//! Terminal rendering of a [`PeriodSummary`].

use rust_decimal::Decimal;

use payday_domain::{Amounted, NamedEntity, PeriodSummary};

use crate::cli::{
    output::{balance, label_value, money, section, separator},
    ui::table_renderer::{Alignment, Table, TableColumn},
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const ROW_DATE_FORMAT: &str = "%a, %b %d";

/// A period summary together with the income it is measured against.
pub struct PeriodReport<'a> {
    pub net_income: Decimal,
    pub summary: &'a PeriodSummary,
}

impl<'a> PeriodReport<'a> {
    pub fn new(net_income: Decimal, summary: &'a PeriodSummary) -> Self {
        Self {
            net_income,
            summary,
        }
    }

    pub fn remaining(&self) -> Decimal {
        self.summary.remaining(self.net_income)
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new(vec![
            TableColumn::new("Name", Alignment::Left),
            TableColumn::new("Code", Alignment::Left),
            TableColumn::new("Date", Alignment::Left),
            TableColumn::new("Amount", Alignment::Right),
        ]);
        for occurrence in &self.summary.occurrences {
            table.push_row(vec![
                occurrence.name().to_string(),
                occurrence.code().to_string(),
                occurrence.date.format(ROW_DATE_FORMAT).to_string(),
                money(occurrence.amount()),
            ]);
        }
        table
    }

    pub fn render(&self) -> String {
        let period = &self.summary.period;
        let mut lines = vec![
            section("PAY PERIOD"),
            String::new(),
            label_value("Starting", period.start_date.format(DATE_FORMAT)),
            label_value("Ending", period.end_date.format(DATE_FORMAT)),
            label_value("Payday", period.payday.format(DATE_FORMAT)),
            String::new(),
            label_value("Net Income", money(self.net_income)),
            label_value("Total Outgoings", money(self.summary.total)),
            label_value("Remaining", balance(self.remaining())),
            String::new(),
            separator(),
            String::new(),
        ];
        if self.summary.occurrences.is_empty() {
            lines.push("No payments due this period.".to_string());
        } else {
            lines.push(self.table().render());
        }
        lines.join("\n")
    }
}
