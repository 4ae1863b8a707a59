//! Usage Report
//!
//! Per-appliance and total energy usage and cost at a given rate.

use crate::calculator;
use crate::models::{Appliance, Rate};

/// Usage figures for one appliance
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceUsage {
    /// Appliance name
    pub name: String,
    /// Power draw in watts
    pub watts: f64,
    /// Hours of use per day
    pub hours_per_day: f64,
    /// Energy per day
    pub daily_kwh: f64,
    /// Energy per month
    pub monthly_kwh: f64,
    /// Hours of use per month
    pub monthly_hours: f64,
    /// Cost per day
    pub daily_cost: f64,
    /// Cost per month
    pub monthly_cost: f64,
}

impl ApplianceUsage {
    /// Compute usage for a single appliance
    pub fn for_appliance(appliance: &Appliance, rate: Rate) -> Self {
        Self {
            name: appliance.name.clone(),
            watts: appliance.watts,
            hours_per_day: appliance.hours_per_day,
            daily_kwh: calculator::daily_kwh(appliance),
            monthly_kwh: calculator::monthly_kwh(appliance),
            monthly_hours: calculator::monthly_hours(appliance),
            daily_cost: calculator::daily_cost(appliance, rate),
            monthly_cost: calculator::monthly_cost(appliance, rate),
        }
    }

    /// Format a single appliance's usage
    pub fn format_details(&self, currency: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", self.name));
        output.push_str(&format!("  Power:          {}W\n", self.watts));
        output.push_str(&format!("  Use per day:    {}h\n", self.hours_per_day));
        output.push_str(&format!("  Daily usage:    {:.2} kWh\n", self.daily_kwh));
        output.push_str(&format!("  Monthly usage:  {:.2} kWh\n", self.monthly_kwh));
        output.push_str(&format!("  Monthly hours:  {:.1} h\n", self.monthly_hours));
        output.push_str(&format!(
            "  Daily cost:     {}{:.2}\n",
            currency, self.daily_cost
        ));
        output.push_str(&format!(
            "  Monthly cost:   {}{:.2}\n",
            currency, self.monthly_cost
        ));
        output
    }
}

/// Usage report across every appliance
#[derive(Debug, Clone)]
pub struct UsageReport {
    /// Rate the costs were computed at
    pub rate: Rate,
    /// One row per appliance, in store order
    pub rows: Vec<ApplianceUsage>,
    /// Sum of daily kWh
    pub total_daily_kwh: f64,
    /// Sum of monthly kWh
    pub total_monthly_kwh: f64,
    /// Sum of daily cost
    pub total_daily_cost: f64,
    /// Sum of monthly cost
    pub total_monthly_cost: f64,
}

impl UsageReport {
    /// Generate a usage report for a list of appliances
    pub fn generate(appliances: &[Appliance], rate: Rate) -> Self {
        let rows: Vec<ApplianceUsage> = appliances
            .iter()
            .map(|a| ApplianceUsage::for_appliance(a, rate))
            .collect();

        Self {
            rate,
            total_daily_kwh: rows.iter().map(|r| r.daily_kwh).sum(),
            total_monthly_kwh: rows.iter().map(|r| r.monthly_kwh).sum(),
            total_daily_cost: rows.iter().map(|r| r.daily_cost).sum(),
            total_monthly_cost: rows.iter().map(|r| r.monthly_cost).sum(),
            rows,
        }
    }

    /// Format the report for terminal output, rounded to two decimals
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.rows.is_empty() {
            return "No appliances added yet.\n".to_string();
        }

        let name_width = self
            .rows
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(9)
            .max(9);
        let line_width = name_width + 60;

        let mut output = String::new();
        output.push_str(&format!(
            "Usage Report at {}{:.4}/kWh\n",
            currency,
            self.rate.value()
        ));
        output.push_str(&"=".repeat(line_width));
        output.push('\n');

        output.push_str(&format!(
            "{:<name_width$}  {:>10}  {:>12}  {:>10}  {:>10}  {:>12}\n",
            "Appliance",
            "kWh/day",
            "kWh/month",
            "Hours/mo",
            "Cost/day",
            "Cost/month",
            name_width = name_width,
        ));
        output.push_str(&"-".repeat(line_width));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<name_width$}  {:>10.2}  {:>12.2}  {:>10.1}  {:>10}  {:>12}\n",
                row.name,
                row.daily_kwh,
                row.monthly_kwh,
                row.monthly_hours,
                format!("{}{:.2}", currency, row.daily_cost),
                format!("{}{:.2}", currency, row.monthly_cost),
                name_width = name_width,
            ));
        }

        output.push_str(&"-".repeat(line_width));
        output.push('\n');
        output.push_str(&format!(
            "{:<name_width$}  {:>10.2}  {:>12.2}  {:>10}  {:>10}  {:>12}\n",
            "TOTAL",
            self.total_daily_kwh,
            self.total_monthly_kwh,
            "",
            format!("{}{:.2}", currency, self.total_daily_cost),
            format!("{}{:.2}", currency, self.total_monthly_cost),
            name_width = name_width,
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn appliances() -> Vec<Appliance> {
        vec![
            Appliance::new("Bulb", 100.0, 10.0),
            Appliance::new("Lamp", 60.0, 5.0),
        ]
    }

    #[test]
    fn test_generate_totals() {
        let report = UsageReport::generate(&appliances(), Rate::new(0.2).unwrap());

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].name, "Bulb");
        assert!(approx_eq(report.total_daily_kwh, 1.3));
        assert!(approx_eq(report.total_monthly_kwh, 39.0));
        assert!(approx_eq(report.total_daily_cost, 0.26));
        assert!(approx_eq(report.total_monthly_cost, 7.8));
    }

    #[test]
    fn test_single_appliance_usage() {
        let usage =
            ApplianceUsage::for_appliance(&Appliance::new("Bulb", 100.0, 10.0), Rate::new(0.2).unwrap());

        assert_eq!(usage.daily_kwh, 1.0);
        assert_eq!(usage.monthly_kwh, 30.0);
        assert_eq!(usage.monthly_hours, 300.0);
        assert!(approx_eq(usage.monthly_cost, 6.0));

        let details = usage.format_details("$");
        assert!(details.contains("Monthly usage:  30.00 kWh"));
        assert!(details.contains("Monthly cost:   $6.00"));
    }

    #[test]
    fn test_format_terminal_rounds_for_display() {
        let report = UsageReport::generate(&appliances(), Rate::new(0.2).unwrap());
        let output = report.format_terminal("$");

        assert!(output.contains("Usage Report at $0.2000/kWh"));
        assert!(output.contains("Bulb"));
        assert!(output.contains("$6.00"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$7.80"));
    }

    #[test]
    fn test_empty_report() {
        let report = UsageReport::generate(&[], Rate::new(0.2).unwrap());
        assert_eq!(report.total_monthly_cost, 0.0);
        assert_eq!(report.format_terminal("$"), "No appliances added yet.\n");
    }
}
