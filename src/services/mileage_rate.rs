//! Estimación del kilometraje medio diario
//!
//! Trabaja sobre las lecturas que devuelve el repositorio (ventana de las
//! más recientes). No valida la calidad de los datos: un journal no
//! monótono produce un ritmo negativo y se devuelve tal cual.

use crate::models::mileage::MileageLogEntry;

/// Ritmo diario entre la lectura más antigua y la más reciente.
///
/// Devuelve 0 con menos de dos lecturas o si todas caen el mismo día.
pub fn estimate_daily_rate(entries: &[MileageLogEntry]) -> f64 {
    if entries.len() < 2 {
        return 0.0;
    }

    let mut chronological: Vec<&MileageLogEntry> = entries.iter().collect();
    chronological.sort_by_key(|entry| entry.date);

    let (first, last) = match (chronological.first(), chronological.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return 0.0,
    };

    let elapsed_days = (last.date - first.date).num_days();
    if elapsed_days == 0 {
        return 0.0;
    }

    let distance = last.mileage - first.mileage;
    distance as f64 / elapsed_days as f64
}
