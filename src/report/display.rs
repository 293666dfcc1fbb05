//! Console rendering of footprints, scenarios, hotspots and labels

use console::{style, StyledObject};

use crate::fmt::{
    format_co2e, format_optional, format_optional_pct, CHART, CHECKMARK, CROSSMARK, FIRE, LABEL,
    LEAF, TARGET, WARNING,
};
use crate::inventory::{ValidationResult, ValidationSeverity};
use crate::lca::{
    CarbonGrade, CarbonLabel, CategoryProjection, FootprintResult, FootprintStatus, Hotspot,
    HotspotPriority, ProjectedResult, Subsystem,
};

/// Status text colored green, yellow or red
pub fn styled_status(status: FootprintStatus) -> StyledObject<&'static str> {
    match status {
        FootprintStatus::Low => style(status.as_str()).green().bold(),
        FootprintStatus::Medium => style(status.as_str()).yellow().bold(),
        FootprintStatus::High => style(status.as_str()).red().bold(),
    }
}

fn styled_priority(priority: HotspotPriority) -> StyledObject<String> {
    let label = priority.to_string();
    match priority {
        HotspotPriority::Critical => style(label).red().bold(),
        HotspotPriority::High => style(label).red(),
        HotspotPriority::Medium => style(label).yellow(),
        HotspotPriority::Low => style(label).dim(),
    }
}

/// Print the subsystem breakdown of one batch
pub fn print_footprint(batch_id: &str, result: &FootprintResult) {
    println!(
        "\n{} Carbon footprint: {}",
        LEAF,
        style(batch_id).cyan().bold()
    );
    println!("   Functional unit: 1 kg frozen broiler carcass\n");

    for subtotal in result.subtotals() {
        let value = subtotal.subtotal();
        println!(
            "{:<22} {:>8.3}  {:>7}",
            style(subtotal.subsystem.display_name()).bold(),
            value,
            format_optional_pct(result.contribution(value))
        );
        for item in &subtotal.items {
            println!(
                "   {:<24} {:>10.4} {:<10} x {:>6}  = {:>8.4}  {:>7}",
                item.name,
                item.quantity,
                item.unit,
                format_optional(item.factor, 2),
                item.emission(),
                format_optional_pct(result.contribution(item.emission()))
            );
        }
    }

    let thresholds = result.thresholds();
    println!(
        "\n{} Total: {} ({})",
        CHART,
        style(format_co2e(result.total())).bold(),
        styled_status(result.status())
    );
    println!(
        "   Target {:.2} | Baseline {:.2} | Reduction from baseline {}",
        thresholds.target,
        thresholds.baseline,
        format_optional_pct(result.reduction_from_baseline_pct())
    );
    match result.distance_to_target() {
        Some(gap) => println!(
            "   {} {:.2} above target ({:.0}% of the way from baseline)",
            TARGET,
            gap,
            result.progress_to_target_pct()
        ),
        None => println!("   {} Target met", CHECKMARK),
    }
}

/// Print batches ranked by total, highest first
pub fn print_ranking(batches: &[(String, FootprintResult)]) {
    println!("\n{} Batch ranking", CHART);
    println!(
        "   {:<4} {:<18} {:>8} {:>8} {:>8} {:>8}  {}",
        "#", "Batch", "Feed", "Broiler", "RPA", "Total", "Status"
    );
    for (index, (batch_id, result)) in batches.iter().enumerate() {
        println!(
            "   {:<4} {:<18} {:>8.2} {:>8.2} {:>8.2} {:>8.2}  {}",
            index + 1,
            batch_id,
            result.subtotal_of(Subsystem::Feed),
            result.subtotal_of(Subsystem::Broiler),
            result.subtotal_of(Subsystem::Processing),
            result.total(),
            styled_status(result.status())
        );
    }
}

fn print_category(name: &str, category: &CategoryProjection) {
    println!(
        "   {:<14} {:>8.2} -> {:>8.2}  ({})",
        name,
        category.baseline,
        category.projected,
        style(format!("-{:.2}", category.reduction)).green()
    );
}

/// Print a mitigation scenario projection
pub fn print_scenario(result: &ProjectedResult) {
    let scenario = &result.scenario;
    println!("\n{} Mitigation scenario", TARGET);
    println!(
        "   Soybean substitution {:.0}% | Litter to biogas {:.0}% | Cooling reduction {:.0}%\n",
        scenario.soybean_substitution_pct(),
        scenario.litter_biogas_pct(),
        scenario.cooling_reduction_pct()
    );

    print_category("Soybean Meal", &result.soybean);
    print_category("Manure CH₄", &result.manure);
    print_category("Cooling", &result.cooling);
    print_category("Other", &result.other);

    println!(
        "\n   Baseline {}  ->  Projected {} ({})",
        format_co2e(result.baseline_total),
        style(format_co2e(result.total)).bold(),
        styled_status(result.status)
    );
    println!(
        "   Reduction {:.2} ({})",
        result.total_reduction,
        format_optional_pct(result.reduction_pct)
    );

    match result.gap_to_target {
        None => println!(
            "\n{} Target {:.2} achieved",
            CHECKMARK, result.target
        ),
        Some(gap) => println!(
            "\n{} Target {:.2} missed by {}",
            CROSSMARK,
            result.target,
            style(format!("{:.2}", gap)).red()
        ),
    }
}

/// Print ranked hotspots with mitigation guidance
pub fn print_hotspots(batch_id: &str, total: f64, hotspots: &[Hotspot]) {
    println!(
        "\n{} Emission hotspots: {} ({})",
        FIRE,
        style(batch_id).cyan().bold(),
        format_co2e(total)
    );

    if hotspots.is_empty() {
        println!("   No emitting sources");
        return;
    }

    for hotspot in hotspots {
        println!(
            "   {:>2}. {:<26} {:<12} {:>8.4} {:>6.1}%  {}",
            hotspot.rank,
            hotspot.source,
            hotspot.subsystem.category(),
            hotspot.emission,
            hotspot.share_pct,
            styled_priority(hotspot.priority)
        );
    }

    let advice: Vec<&Hotspot> = hotspots
        .iter()
        .filter(|h| h.is_advised() && h.recommendation().is_some())
        .collect();
    if !advice.is_empty() {
        println!("\n   Recommendations:");
        for hotspot in advice {
            if let Some(text) = hotspot.recommendation() {
                println!("   - {}: {}", style(&hotspot.source).bold(), text);
            }
        }
    }
}

/// Print a carbon label preview
pub fn print_label(label: &CarbonLabel) {
    let grade = match label.grade {
        CarbonGrade::A | CarbonGrade::BPlus => style(label.grade.as_str()).green().bold(),
        CarbonGrade::B | CarbonGrade::CPlus => style(label.grade.as_str()).yellow().bold(),
        CarbonGrade::C => style(label.grade.as_str()).red().bold(),
    };

    println!("\n{} Carbon label", LABEL);
    println!("   Batch:            {}", label.batch_id);
    println!("   Footprint:        {}", format_co2e(label.total));
    println!("   Grade:            {}", grade);
    println!("   Status:           {}", styled_status(label.status));
    println!("   Functional unit:  {}", label.functional_unit);
    println!("   System boundary:  {}", label.system_boundary);
    println!("   Scopes:           {}", label.scopes);
    println!("   Standard:         {}", label.standard);
}

/// Print validation issues, if any
pub fn print_validation(batch_id: &str, result: &ValidationResult) {
    for issue in &result.issues {
        let marker = match issue.severity {
            ValidationSeverity::Warning => style(format!("{} {}", WARNING, issue.severity)).yellow(),
            ValidationSeverity::Info => style(issue.severity.to_string()).dim(),
        };
        match &issue.suggestion {
            Some(suggestion) => println!(
                "   {} {} {}: {} ({})",
                marker, batch_id, issue.field, issue.message, suggestion
            ),
            None => println!("   {} {} {}: {}", marker, batch_id, issue.field, issue.message),
        }
    }
}
