//! Appliance display formatting
//!
//! Formats appliances for terminal output in table and detail views.

use crate::models::Appliance;

/// Format a list of appliances as a numbered table
pub fn format_appliance_list(appliances: &[Appliance]) -> String {
    if appliances.is_empty() {
        return "No appliances added yet.\n".to_string();
    }

    let name_width = appliances
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:>10}  {:>10}\n",
        "#",
        "Name",
        "Watts",
        "Hours/day",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:->10}  {:->10}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (i, appliance) in appliances.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>10}  {:>10}\n",
            i + 1,
            appliance.name,
            appliance.watts,
            appliance.hours_per_day,
            name_width = name_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} appliances\n", appliances.len()));
    output
}

/// Format a numbered, name-only list for selection prompts
pub fn format_appliance_choices(appliances: &[Appliance]) -> String {
    appliances
        .iter()
        .enumerate()
        .map(|(i, a)| format!("{}. {}\n", i + 1, a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_appliance_list(&[]), "No appliances added yet.\n");
    }

    #[test]
    fn test_list_is_numbered_in_order() {
        let appliances = vec![
            Appliance::new("Lamp", 60.0, 5.0),
            Appliance::new("Television", 120.0, 4.5),
        ];
        let output = format_appliance_list(&appliances);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("Name"));
        assert!(lines[2].trim_start().starts_with("1  Lamp"));
        assert!(lines[3].trim_start().starts_with("2  Television"));
        assert!(lines[3].contains("4.5"));
        assert!(output.contains("Total: 2 appliances"));
    }

    #[test]
    fn test_choices() {
        let appliances = vec![Appliance::new("Lamp", 60.0, 5.0)];
        assert_eq!(
            format_appliance_choices(&appliances),
            "1. Lamp | 60W | 5h/day\n"
        );
    }
}
