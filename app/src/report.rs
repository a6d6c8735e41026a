//! FILENAME: app/src/report.rs
// PURPOSE: Builds and renders the numerology report.
// CONTEXT: Input validation happens here, before the engine is called. Errors
// leave this module as user-facing Spanish messages; the underlying cause is
// only logged.

use std::fmt::Write;

use engine::{compute_pinnacle_for, BirthDate, Pinnacle, PinnacleTable, PinnacleValue, Position, Track};
use parser::parse_birth_date;

use crate::api_types::{NumerologyReport, PositionGroup, ReportSummary};
use crate::config::OutputFormat;
use crate::{log_debug, log_enter, log_error, log_exit, log_warn};

pub const MSG_MISSING_INPUT: &str = "Por favor ingresa tu nombre completo y fecha de nacimiento";
pub const MSG_BAD_DATE: &str = "Por favor ingresa la fecha en formato DD/MM/YYYY (ejemplo: 06/05/1982)";
pub const MSG_CALCULATION_FAILED: &str =
    "Error al calcular tu mapa numerológico. Por favor intenta nuevamente.";

pub const PREVIEW_NAME: &str = "Carlos Carpio";
pub const PREVIEW_DATE: &str = "06/05/1982";

// ============================================================================
// CALCULATION
// ============================================================================

/// Validates the input, runs the engine and groups the result.
pub fn calculate_report(name: &str, birth_date: &str) -> Result<NumerologyReport, String> {
    log_enter!("CALC", "calculate_report", "date={:?}", birth_date);

    let name = name.trim();
    let birth_date = birth_date.trim();
    if name.is_empty() || birth_date.is_empty() {
        log_warn!("CALC", "rejected: missing name or date");
        return Err(MSG_MISSING_INPUT.to_string());
    }

    let parts = parse_birth_date(birth_date).map_err(|e| {
        log_warn!("CALC", "rejected date {:?}: {}", birth_date, e);
        MSG_BAD_DATE.to_string()
    })?;

    let pinnacle = compute_pinnacle_for(name, BirthDate::from(parts)).map_err(|e| {
        log_error!("CALC", "engine failure for {:?}: {}", birth_date, e);
        MSG_CALCULATION_FAILED.to_string()
    })?;

    let report = build_report(name, &pinnacle).map_err(|e| {
        log_error!("CALC", "incomplete table for {:?}: {}", birth_date, e);
        MSG_CALCULATION_FAILED.to_string()
    })?;

    log_exit!("CALC", "calculate_report", "masters={:?}", report.master_numbers);
    Ok(report)
}

/// The report for the canonical example person.
pub fn preview_report() -> Result<NumerologyReport, String> {
    log_debug!("CALC", "preview for {} {}", PREVIEW_NAME, PREVIEW_DATE);
    calculate_report(PREVIEW_NAME, PREVIEW_DATE)
}

/// Groups a computed Pinnacle the way the report panels show it.
pub fn build_report(name: &str, pinnacle: &Pinnacle) -> Result<NumerologyReport, String> {
    let table = &pinnacle.table;
    let energy = &pinnacle.name_energy;

    Ok(NumerologyReport {
        name: name.to_string(),
        birth_date: pinnacle.date.to_parts().to_dmy(),
        base_numbers: group(table, Track::Base)?,
        positive_numbers: group(table, Track::Positive)?,
        negative_numbers: group(table, Track::Negative)?,
        w: value(table, Position::W)?.clone(),
        t: value(table, Position::T)?.clone(),
        summary: ReportSummary {
            alma: energy.alma,
            personalidad: energy.personalidad,
            numero_personal: energy.numero_personal,
            esencia: scalar(table, Position::B)?,
            mision: scalar(table, Position::Y)?,
            regalo_divino: scalar(table, Position::Z)?,
        },
        master_numbers: pinnacle.master_positions.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

fn value(table: &PinnacleTable, position: Position) -> Result<&PinnacleValue, String> {
    table
        .get(position)
        .ok_or_else(|| format!("position {} was not computed", position))
}

fn scalar(table: &PinnacleTable, position: Position) -> Result<u32, String> {
    value(table, position)?
        .as_single()
        .ok_or_else(|| format!("position {} holds a list", position))
}

fn group(table: &PinnacleTable, track: Track) -> Result<PositionGroup, String> {
    track
        .positions()
        .into_iter()
        .map(|position| Ok((position, scalar(table, position)?)))
        .collect()
}

// ============================================================================
// RENDERING
// ============================================================================

/// Renders the report in the requested format.
pub fn render(report: &NumerologyReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("Failed to serialize report: {}", e)),
    }
}

/// Plain-text panels with position titles.
pub fn render_text(report: &NumerologyReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Mapa numerológico de {}", report.name);
    let _ = writeln!(out, "Fecha de nacimiento: {}", report.birth_date);

    write_panel(&mut out, "Números base", &report.base_numbers);
    write_panel(&mut out, "Números positivos", &report.positive_numbers);
    write_panel(&mut out, "Números negativos", &report.negative_numbers);

    let _ = writeln!(out);
    let _ = writeln!(out, "Especiales");
    write_line(&mut out, Position::W, &report.w.display_value());
    write_line(&mut out, Position::T, &report.t.display_value());

    let summary = &report.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "Resumen");
    let _ = writeln!(out, "  Alma: {}", summary.alma);
    let _ = writeln!(out, "  Personalidad: {}", summary.personalidad);
    let _ = writeln!(out, "  Número personal: {}", summary.numero_personal);
    let _ = writeln!(out, "  Esencia: {}", summary.esencia);
    let _ = writeln!(out, "  Misión: {}", summary.mision);
    let _ = writeln!(out, "  Regalo divino: {}", summary.regalo_divino);

    let masters: Vec<String> = report.master_numbers.iter().map(|p| p.to_string()).collect();
    let _ = writeln!(out);
    if masters.is_empty() {
        let _ = write!(out, "Números maestros: ninguno");
    } else {
        let _ = write!(out, "Números maestros: {}", masters.join(", "));
    }

    out
}

fn write_panel(out: &mut String, heading: &str, group: &PositionGroup) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heading);
    for (&position, value) in group {
        write_line(out, position, &value.to_string());
    }
}

fn write_line(out: &mut String, position: Position, value: &str) {
    let _ = writeln!(out, "  {} {}: {}", position, position.title(), value);
}
