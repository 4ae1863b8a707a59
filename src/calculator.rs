//! Energy and cost formulas
//!
//! Pure functions over a single appliance. Nothing here rounds; rounding is
//! left to whoever prints the numbers.

use crate::models::{Appliance, Rate};

/// Billing month length used for monthly figures
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Energy used per day in kWh
pub fn daily_kwh(appliance: &Appliance) -> f64 {
    appliance.watts * appliance.hours_per_day / 1000.0
}

/// Energy used per month in kWh
pub fn monthly_kwh(appliance: &Appliance) -> f64 {
    daily_kwh(appliance) * DAYS_PER_MONTH
}

/// Hours of use per month
pub fn monthly_hours(appliance: &Appliance) -> f64 {
    appliance.hours_per_day * DAYS_PER_MONTH
}

/// Cost per day at the given rate
pub fn daily_cost(appliance: &Appliance, rate: Rate) -> f64 {
    daily_kwh(appliance) * rate.value()
}

/// Cost per month at the given rate
pub fn monthly_cost(appliance: &Appliance, rate: Rate) -> f64 {
    monthly_kwh(appliance) * rate.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hundred_watts_for_ten_hours() {
        let bulb = Appliance::new("Bulb", 100.0, 10.0);
        let rate = Rate::new(0.2).unwrap();

        assert_eq!(daily_kwh(&bulb), 1.0);
        assert_eq!(monthly_kwh(&bulb), 30.0);
        assert!(approx_eq(daily_cost(&bulb, rate), 0.2));
        assert!(approx_eq(monthly_cost(&bulb, rate), 6.0));
    }

    #[test]
    fn test_fractional_usage() {
        let lamp = Appliance::new("Lamp", 100.0, 2.0);
        let rate = Rate::new(0.5).unwrap();

        assert!(approx_eq(daily_kwh(&lamp), 0.2));
        assert!(approx_eq(monthly_kwh(&lamp), 6.0));
        assert!(approx_eq(monthly_cost(&lamp, rate), 3.0));
        assert_eq!(monthly_hours(&lamp), 60.0);
    }

    #[test]
    fn test_zero_hours_and_zero_rate() {
        let idle = Appliance::new("Spare fridge", 150.0, 0.0);
        let free = Rate::new(0.0).unwrap();

        assert_eq!(daily_kwh(&idle), 0.0);
        assert_eq!(monthly_cost(&Appliance::new("Fan", 50.0, 8.0), free), 0.0);
    }

    #[test]
    fn test_results_are_unrounded() {
        let charger = Appliance::new("Charger", 5.0, 1.0 / 3.0);
        let expected = 5.0 * (1.0 / 3.0) / 1000.0;
        assert_eq!(daily_kwh(&charger), expected);
    }
}
