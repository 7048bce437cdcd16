//! Patient age strings (`070Y`, `18M`, `3W`, `10D`) as whole seconds.

const SECONDS_PER_DAY: i64 = 86_400;

fn days_per_unit(unit: char) -> Option<i64> {
    match unit.to_ascii_uppercase() {
        'D' => Some(1),
        'W' => Some(7),
        'M' => Some(30),
        'Y' => Some(365),
        _ => None,
    }
}

/// Parses a patient age into seconds.
///
/// A value without a unit suffix is taken as years. Unparseable, zero and
/// negative ages yield `None`.
pub fn parse_patient_age(age: &str) -> Option<i64> {
    let age = age.trim();
    if age.is_empty() || age == "None" {
        return None;
    }

    let (value, days) = match age.chars().last().and_then(days_per_unit) {
        Some(days) => (&age[..age.len() - 1], days),
        None => (age, 365),
    };

    let seconds = value
        .trim()
        .parse::<i64>()
        .ok()?
        .checked_mul(days)?
        .checked_mul(SECONDS_PER_DAY)?;
    (seconds > 0).then_some(seconds)
}
