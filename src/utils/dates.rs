use chrono::NaiveDate;

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Fecha de hoy (en WASM chrono usa el reloj del navegador)
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Valor de un `<input type="date">` ("" = sin fecha)
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, INPUT_FORMAT).ok()
}

pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}
