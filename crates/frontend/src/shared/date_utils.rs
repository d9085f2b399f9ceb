//! Date conversion between the transport format (`YYYY-MM-DD`) and the
//! Brazilian display format (`DD/MM/YYYY`).
//!
//! Both directions only re-order the three parts; anything that does not
//! split into exactly three parts is returned unchanged.

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn iso_to_display(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let parts: Vec<&str> = date_part.split('-').collect();
    if let [year, month, day] = parts.as_slice() {
        return format!("{}/{}/{}", day, month, year);
    }
    date_str.to_string()
}

/// "15/03/2024" -> "2024-03-15"
pub fn display_to_iso(date_str: &str) -> String {
    let parts: Vec<&str> = date_str.split('/').collect();
    if let [day, month, year] = parts.as_slice() {
        return format!("{}-{}-{}", year, month, day);
    }
    date_str.to_string()
}

/// History column: "-" when the server sent no date
pub fn history_date(date_str: Option<&str>) -> String {
    match date_str {
        Some(s) if !s.is_empty() => iso_to_display(s),
        _ => "-".to_string(),
    }
}

/// Today's local date as DD/MM/YYYY
pub fn today_display() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}
