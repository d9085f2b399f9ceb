//! Editable equipment rows of the guide form.
//!
//! Rows keep the raw input text; conversion to [`EquipmentLine`] happens in
//! [`EquipmentTable::to_payload`]. The table never has fewer than one row.

use crate::shared::error::{FormError, FormResult};
use contracts::domain::a002_guide::aggregate::{Equipment, EquipmentLine};

pub const MSG_AT_LEAST_ONE: &str = "É necessário pelo menos um equipamento";
pub const MSG_DESCRIPTION_REQUIRED: &str = "Descrição do equipamento é obrigatória";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentRow {
    /// Stable key for keyed rendering
    pub key: u64,
    pub quantity: String,
    pub description: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub value: String,
}

impl EquipmentRow {
    fn blank(key: u64) -> Self {
        Self {
            key,
            quantity: "1".to_string(),
            description: String::new(),
            serial_number: String::new(),
            asset_tag: String::new(),
            value: String::new(),
        }
    }

    fn to_line(&self) -> FormResult<EquipmentLine> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::validation(MSG_DESCRIPTION_REQUIRED));
        }
        Ok(EquipmentLine {
            quantity: parse_quantity(&self.quantity),
            description: description.to_string(),
            serial_number: self.serial_number.trim().to_string(),
            asset_tag: self.asset_tag.trim().to_string(),
            value: self.value.trim().to_string(),
        })
    }
}

/// Leading integer of the trimmed text ("2.5" -> 2, "3x" -> 3).
/// 1 when there is no leading digit or the value is 0.
pub fn parse_quantity(raw: &str) -> u32 {
    let raw = raw.trim();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end]
        .parse::<u32>()
        .ok()
        .filter(|q| *q > 0)
        .unwrap_or(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentField {
    Quantity,
    Description,
    SerialNumber,
    AssetTag,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentTable {
    rows: Vec<EquipmentRow>,
    next_key: u64,
}

impl Default for EquipmentTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EquipmentTable {
    /// One blank row
    pub fn new() -> Self {
        Self {
            rows: vec![EquipmentRow::blank(0)],
            next_key: 1,
        }
    }

    fn take_key(&mut self) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    pub fn rows(&self) -> &[EquipmentRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn index_of(&self, key: u64) -> Option<usize> {
        self.rows.iter().position(|r| r.key == key)
    }

    pub fn add_line(&mut self) {
        let key = self.take_key();
        self.rows.push(EquipmentRow::blank(key));
    }

    /// Rejected with a warning when only one row is left; out-of-range is a no-op.
    pub fn remove_line(&mut self, index: usize) -> FormResult<()> {
        if self.rows.len() <= 1 {
            return Err(FormError::validation(MSG_AT_LEAST_ONE));
        }
        if index < self.rows.len() {
            self.rows.remove(index);
        }
        Ok(())
    }

    pub fn set_field(&mut self, index: usize, field: EquipmentField, value: String) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        match field {
            EquipmentField::Quantity => row.quantity = value,
            EquipmentField::Description => row.description = value,
            EquipmentField::SerialNumber => row.serial_number = value,
            EquipmentField::AssetTag => row.asset_tag = value,
            EquipmentField::Value => row.value = value,
        }
    }

    /// All rows in order; stops at the first row without a description.
    pub fn to_payload(&self) -> FormResult<Vec<EquipmentLine>> {
        self.rows.iter().map(EquipmentRow::to_line).collect()
    }

    /// Replace every row with the persisted lines; empty input leaves one blank row.
    pub fn hydrate(&mut self, lines: &[Equipment]) {
        if lines.is_empty() {
            self.reset();
            return;
        }
        let rows: Vec<EquipmentRow> = lines
            .iter()
            .map(|eq| {
                let key = self.take_key();
                EquipmentRow {
                    key,
                    quantity: eq.quantity.to_string(),
                    description: eq.description.clone().unwrap_or_default(),
                    serial_number: eq.serial_number.clone().unwrap_or_default(),
                    asset_tag: eq.asset_tag.clone().unwrap_or_default(),
                    value: eq.value.clone().unwrap_or_default(),
                }
            })
            .collect();
        self.rows = rows;
    }

    /// Exactly one blank row
    pub fn reset(&mut self) {
        let key = self.take_key();
        self.rows = vec![EquipmentRow::blank(key)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted(quantity: u32, description: &str) -> Equipment {
        Equipment {
            id: Some(1),
            quantity,
            description: Some(description.into()),
            serial_number: Some("SN-1".into()),
            asset_tag: None,
            value: Some("R$ 1.500,00".into()),
        }
    }

    #[test]
    fn test_new_table_has_one_blank_row() {
        let table = EquipmentTable::new();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].quantity, "1");
        assert!(table.rows()[0].description.is_empty());
    }

    #[test]
    fn test_remove_last_row_is_rejected() {
        let mut table = EquipmentTable::new();
        let err = table.remove_line(0).unwrap_err();
        assert_eq!(err, FormError::validation(MSG_AT_LEAST_ONE));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut table = EquipmentTable::new();
        table.add_line();
        table.add_line();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            table.set_field(i, EquipmentField::Description, name.to_string());
        }
        table.remove_line(1).unwrap();
        let names: Vec<_> = table.rows().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names, ["a", "c"]);

        table.remove_line(7).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_row_keys_are_unique() {
        let mut table = EquipmentTable::new();
        table.add_line();
        table.add_line();
        table.remove_line(0).unwrap();
        table.add_line();
        let mut keys: Vec<_> = table.rows().iter().map(|r| r.key).collect();
        keys.dedup();
        assert_eq!(keys.len(), 3);
        assert_eq!(table.index_of(keys[1]), Some(1));
    }

    #[test]
    fn test_payload_fails_on_first_empty_description() {
        let mut table = EquipmentTable::new();
        table.add_line();
        table.set_field(0, EquipmentField::Description, "Monitor".into());
        table.set_field(1, EquipmentField::Description, "   ".into());
        assert_eq!(
            table.to_payload().unwrap_err(),
            FormError::validation(MSG_DESCRIPTION_REQUIRED)
        );
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-2"), 1);
    }

    #[test]
    fn test_quantity_takes_leading_integer() {
        assert_eq!(parse_quantity("2.5"), 2);
        assert_eq!(parse_quantity("3x"), 3);
        assert_eq!(parse_quantity("10 un"), 10);
        assert_eq!(parse_quantity("+4"), 4);
        assert_eq!(parse_quantity("0.9"), 1);
        assert_eq!(parse_quantity("x3"), 1);
    }

    #[test]
    fn test_payload_trims_text() {
        let mut table = EquipmentTable::new();
        table.set_field(0, EquipmentField::Quantity, "x".into());
        table.set_field(0, EquipmentField::Description, " Notebook Dell ".into());
        table.set_field(0, EquipmentField::AssetTag, " PAT-77 ".into());
        let lines = table.to_payload().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(lines[0].description, "Notebook Dell");
        assert_eq!(lines[0].asset_tag, "PAT-77");
        assert_eq!(lines[0].serial_number, "");
    }

    #[test]
    fn test_hydrate_then_payload_round_trip() {
        let mut table = EquipmentTable::new();
        table.hydrate(&[persisted(2, "Monitor"), persisted(1, "Teclado")]);
        assert_eq!(table.len(), 2);

        let lines = table.to_payload().unwrap();
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].description, "Monitor");
        assert_eq!(lines[0].serial_number, "SN-1");
        assert_eq!(lines[0].asset_tag, "");
        assert_eq!(lines[1].description, "Teclado");

        let again: Vec<Equipment> = lines.iter().map(Equipment::from).collect();
        let mut other = EquipmentTable::new();
        other.hydrate(&again);
        assert_eq!(other.to_payload().unwrap(), lines);
    }

    #[test]
    fn test_hydrate_empty_leaves_one_row() {
        let mut table = EquipmentTable::new();
        table.add_line();
        table.hydrate(&[]);
        assert_eq!(table.len(), 1);
        assert!(table.rows()[0].description.is_empty());
    }
}
