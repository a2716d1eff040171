//! SBP advisories shown for integration terminals.

use crate::record::TerminalRecord;

const INTEGRATION_MARKER: &str = "интеграционный";

const ADVISORIES: &[(&str, &str)] = &[
    (
        "aisino v37",
        "Работаем с Эвотор. По другим кассам — в техподдержку производителя.",
    ),
    (
        "teplo p8",
        "Работаем с R-Keeper. По другим кассам — в техподдержку производителя.",
    ),
];

const DEFAULT_ADVISORY: &str =
    "Работаем с 1C, liko(Айка). По другим кассам — в техподдержку производителя.";

pub fn is_integration_terminal(record: &TerminalRecord) -> bool {
    record
        .terminal_type()
        .to_lowercase()
        .contains(INTEGRATION_MARKER)
}

/// Advisory text for `model`, matched exactly ignoring case.
pub fn advisory_for_model(model: &str) -> &'static str {
    let model = model.to_lowercase();
    ADVISORIES
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, text)| *text)
        .unwrap_or(DEFAULT_ADVISORY)
}

/// The advisory to append after the `sbp` field, if any.
pub fn sbp_advisory(record: &TerminalRecord) -> Option<&'static str> {
    is_integration_terminal(record).then(|| advisory_for_model(record.model()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, terminal_type: &str) -> TerminalRecord {
        TerminalRecord::from_fields([("model", model), ("terminal_type", terminal_type)]).unwrap()
    }

    #[test]
    fn special_cased_models() {
        assert!(advisory_for_model("AISINO V37").contains("Эвотор"));
        assert!(advisory_for_model("Teplo P8").contains("R-Keeper"));
    }

    #[test]
    fn match_is_exact_not_substring() {
        assert_eq!(advisory_for_model("Aisino V37 Pro"), DEFAULT_ADVISORY);
        assert_eq!(advisory_for_model(" teplo p8"), DEFAULT_ADVISORY);
    }

    #[test]
    fn only_integration_terminals_get_an_advisory() {
        assert!(sbp_advisory(&record("Aisino V37", "Интеграционный терминал")).is_some());
        assert!(sbp_advisory(&record("Aisino V37", "Обычный терминал")).is_none());
        assert_eq!(
            sbp_advisory(&record("Unknown X1", "ИНТЕГРАЦИОННЫЙ")),
            Some(DEFAULT_ADVISORY)
        );
    }
}
