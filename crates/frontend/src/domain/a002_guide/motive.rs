//! Motive checkboxes <-> the `motivo` string stored with a guide.
//!
//! Encoding joins the labels with ", "; "Outros" carries its free text as
//! "Outros: {detail}" and is dropped when the detail is empty. Decoding
//! matches each segment by substring, so a custom detail that contains
//! another label (e.g. "Outros: Calibração do sensor") is read back as that
//! label. Segments are split on ", " as well, so a detail containing that
//! separator (e.g. "Outros: leak, urgent") keeps only its first part
//! ("leak"). The stored strings are shared with other clients, so the
//! matching rule stays as is.

use std::collections::BTreeSet;

pub const SEPARATOR: &str = ", ";
const OTHER_PREFIX: &str = "Outros: ";
const OTHER_MARKER: &str = "Outros:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Motive {
    PreventiveMaintenance,
    RepairFix,
    Calibration,
    Other,
}

impl Motive {
    pub const ALL: [Motive; 4] = [
        Motive::PreventiveMaintenance,
        Motive::RepairFix,
        Motive::Calibration,
        Motive::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Motive::PreventiveMaintenance => "Manutenção Preventiva",
            Motive::RepairFix => "Conserto/Reparo",
            Motive::Calibration => "Calibração",
            Motive::Other => "Outros",
        }
    }

    /// DOM id of the checkbox
    pub fn input_id(&self) -> &'static str {
        match self {
            Motive::PreventiveMaintenance => "manutencao-preventiva",
            Motive::RepairFix => "conserto-reparo",
            Motive::Calibration => "calibracao",
            Motive::Other => "outros",
        }
    }
}

/// Checkbox state of the motive group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotiveSelection {
    pub selected: BTreeSet<Motive>,
    pub other_detail: String,
}

impl MotiveSelection {
    pub fn is_checked(&self, motive: Motive) -> bool {
        self.selected.contains(&motive)
    }

    pub fn set_checked(&mut self, motive: Motive, checked: bool) {
        if checked {
            self.selected.insert(motive);
        } else {
            self.selected.remove(&motive);
        }
    }

    pub fn encode(&self) -> String {
        encode_motives(&self.selected, &self.other_detail)
    }
}

pub fn encode_motives(selected: &BTreeSet<Motive>, other_detail: &str) -> String {
    selected
        .iter()
        .filter_map(|m| match m {
            Motive::Other if other_detail.is_empty() => None,
            Motive::Other => Some(format!("{}{}", OTHER_PREFIX, other_detail)),
            m => Some(m.label().to_string()),
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

pub fn decode_motives(encoded: &str) -> MotiveSelection {
    let mut out = MotiveSelection::default();
    if encoded.is_empty() {
        return out;
    }

    for segment in encoded.split(SEPARATOR) {
        if segment.contains(Motive::PreventiveMaintenance.label()) {
            out.selected.insert(Motive::PreventiveMaintenance);
        } else if segment.contains(Motive::RepairFix.label()) {
            out.selected.insert(Motive::RepairFix);
        } else if segment.contains(Motive::Calibration.label()) {
            out.selected.insert(Motive::Calibration);
        } else if segment.contains(OTHER_MARKER) {
            out.selected.insert(Motive::Other);
            out.other_detail = segment.replacen(OTHER_PREFIX, "", 1);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[Motive]) -> BTreeSet<Motive> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_encode_with_other_detail() {
        let encoded = encode_motives(&set(&[Motive::PreventiveMaintenance, Motive::Other]), "leak");
        assert_eq!(encoded, "Manutenção Preventiva, Outros: leak");
    }

    #[test]
    fn test_decode_recovers_selection() {
        let decoded = decode_motives("Manutenção Preventiva, Outros: leak");
        assert_eq!(decoded.selected, set(&[Motive::PreventiveMaintenance, Motive::Other]));
        assert_eq!(decoded.other_detail, "leak");
    }

    #[test]
    fn test_detail_with_separator_is_truncated() {
        let encoded = encode_motives(&set(&[Motive::RepairFix, Motive::Other]), "leak, urgent");
        assert_eq!(encoded, "Conserto/Reparo, Outros: leak, urgent");

        let decoded = decode_motives(&encoded);
        assert_eq!(decoded.selected, set(&[Motive::RepairFix, Motive::Other]));
        assert_eq!(decoded.other_detail, "leak");
    }

    #[test]
    fn test_other_without_detail_is_omitted() {
        let encoded = encode_motives(&set(&[Motive::Calibration, Motive::Other]), "");
        assert_eq!(encoded, "Calibração");
        assert_eq!(encode_motives(&set(&[Motive::Other]), ""), "");
    }

    #[test]
    fn test_encode_follows_enumeration_order() {
        let encoded = encode_motives(
            &set(&[Motive::Calibration, Motive::RepairFix, Motive::PreventiveMaintenance]),
            "",
        );
        assert_eq!(encoded, "Manutenção Preventiva, Conserto/Reparo, Calibração");
        assert_eq!(decode_motives(&encoded).selected.len(), 3);
    }

    #[test]
    fn test_decode_empty_and_unknown() {
        assert_eq!(decode_motives(""), MotiveSelection::default());
        assert_eq!(decode_motives("Garantia"), MotiveSelection::default());
    }

    #[test]
    fn test_substring_match_is_lossy() {
        // detail mentioning another label decodes as that label
        let encoded = encode_motives(&set(&[Motive::Other]), "Calibração do sensor");
        let decoded = decode_motives(&encoded);
        assert_eq!(decoded.selected, set(&[Motive::Calibration]));
        assert_eq!(decoded.other_detail, "");
    }

    #[test]
    fn test_selection_toggle() {
        let mut sel = MotiveSelection::default();
        sel.set_checked(Motive::RepairFix, true);
        sel.set_checked(Motive::Other, true);
        sel.other_detail = "troca de bateria".into();
        assert!(sel.is_checked(Motive::RepairFix));
        assert_eq!(sel.encode(), "Conserto/Reparo, Outros: troca de bateria");
        sel.set_checked(Motive::RepairFix, false);
        assert_eq!(sel.encode(), "Outros: troca de bateria");
    }
}
