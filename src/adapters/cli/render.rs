//! Text Renderer
//!
//! Plain-text rendering of the generated content. The content layer stays
//! render-agnostic; everything presentational (markers, indentation, layout)
//! is decided here.

use crate::content::{AccountSummary, PhaseOverview, QuickReference, RuleEntry};
use crate::domain::{usd, AccountConfig};

/// Render the account listing, one selector line per configuration.
pub fn render_accounts(configs: &[AccountConfig]) -> String {
    let mut out = String::new();
    for cfg in configs {
        out.push_str(&format!("{:<14} {}\n", cfg.id, cfg.display_label()));
    }
    out
}

/// Render a phase banner followed by its rule cards.
pub fn render_rules(overview: &PhaseOverview, rules: &[RuleEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n{}\n", overview.heading, overview.subtitle));
    for rule in rules {
        out.push('\n');
        out.push_str(&render_rule(rule));
    }
    out
}

fn render_rule(rule: &RuleEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!("## {} ({})\n", rule.title, rule.id));
    out.push_str(&format!("{}\n", rule.summary));
    for detail in &rule.details {
        out.push_str(&format!("  {}: {}\n", detail.label, detail.text));
    }
    if !rule.examples.is_empty() {
        out.push_str("  Examples:\n");
        for example in &rule.examples {
            out.push_str(&format!("    {} {}\n", example.kind.marker(), example.text));
        }
    }
    out
}

/// Render the header figures plus the quick-reference columns.
pub fn render_summary(summary: &AccountSummary, reference: &QuickReference) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", summary.label));
    out.push_str(&format!("  Size:        {}\n", usd(summary.size)));
    out.push_str(&format!("  Contracts:   {}\n", summary.max_contracts));
    out.push_str(&format!("  Drawdown:    {}\n", usd(summary.drawdown)));
    out.push_str(&format!("  Safety net:  {}\n", usd(summary.safety_net)));
    out.push_str(&format!("  Profit goal: {}\n", usd(summary.profit_goal)));
    out.push_str(&format!("  Monthly fee: {}\n", usd(summary.monthly_fee)));
    if let Some(note) = &summary.static_note {
        out.push_str(&format!("  [!] {note}\n"));
    }
    out.push_str(&format!("\nQuick reference - {}\n", reference.account));
    for phase in &reference.phases {
        out.push_str(&format!("  {}\n", phase.phase.label()));
        for bullet in &phase.bullets {
            out.push_str(&format!("    - {bullet}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{generate_rules, phase_overview, quick_reference, Phase};
    use crate::domain::{derive, lookup, ACCOUNT_CONFIGS};

    #[test]
    fn test_render_accounts_lists_all() {
        let text = render_accounts(ACCOUNT_CONFIGS);
        assert_eq!(text.lines().count(), 8);
        assert!(text.contains("100k-static"));
    }

    #[test]
    fn test_render_rules_includes_markers() {
        let cfg = lookup("100k").unwrap();
        let derived = derive(cfg);
        let overview = phase_overview(Phase::PerformanceAccount, cfg);
        let rules = generate_rules(Phase::PerformanceAccount, cfg, &derived);
        let text = render_rules(&overview, &rules);
        assert!(text.contains("=== Phase 2"));
        assert!(text.contains("[ok]"));
        assert!(text.contains("[x]"));
        assert!(text.contains("$103,100"));
    }

    #[test]
    fn test_render_summary_includes_static_note() {
        let cfg = lookup("100k-static").unwrap();
        let summary = AccountSummary::from_config(cfg);
        let reference = quick_reference(cfg, &derive(cfg));
        let text = render_summary(&summary, &reference);
        assert!(text.contains("[!] STATIC account"));
        assert!(text.contains("$102,600"));
    }
}
