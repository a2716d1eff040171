//! Human-readable labels for terminal record fields.

const LABELS: &[(&str, &str)] = &[
    ("vendor", "Производитель"),
    ("model", "Модель"),
    ("connection_type", "Тип связи"),
    ("terminal_type", "Тип терминала"),
    ("pinpad", "Пин-пад"),
    ("sbp", "СБП"),
    ("preauth", "Предавторизация"),
    ("no_cash", "Нет монет"),
    ("qr_on_pinpad", "QR на экране пин-пада"),
];

/// Label for `field`, or the field name itself when none is known.
pub fn label_for(field: &str) -> &str {
    LABELS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, label)| *label)
        .unwrap_or(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fields_have_labels() {
        assert_eq!(label_for("sbp"), "СБП");
        assert_eq!(label_for("qr_on_pinpad"), "QR на экране пин-пада");
    }

    #[test]
    fn unknown_field_falls_back_to_name() {
        assert_eq!(label_for("nfc"), "nfc");
    }
}
