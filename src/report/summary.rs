use crate::design::revision::RevisionComparison;
use crate::flight::simulator::SimulationResult;
use crate::stability::suggestions::Suggestion;
use crate::stability::StabilityAnalysis;

pub const MODEL_NOTE: &str = "* Barrowman-style approximation: nose + fins only, \
     body tube omitted, normal-force weights are proportional surrogates.";

fn format_time(elapsed_time: f64) -> String {
    if elapsed_time >= 60.0 {
        let minutes = (elapsed_time / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}m {:.1}s", minutes, seconds)
    } else {
        format!("{:.1}s", elapsed_time)
    }
}

fn format_altitude(altitude: f64) -> String {
    if altitude >= 1000.0 {
        format!("{:.2} km", altitude / 1000.0)
    } else {
        format!("{:.1} m", altitude)
    }
}

pub fn stability_report(analysis: &StabilityAnalysis) -> String {
    format!(
        "--- Stability ---\n\
         Total Mass: {:.1} g\n\
         CG: {:.1} cm\n\
         CP: {:.2} cm (nose {:.2} cm x{:.2}, fins {:.2} cm x{:.2})\n\
         Static Margin: {:.2} cal (CP-CG = {:.2} cm, D = {} cm) [{}]\n\
         Judgment: {}\n\
         {}\n\
         {}\n",
        analysis.mass.total_mass_g,
        analysis.mass.cg_cm,
        analysis.pressure.cp_cm,
        analysis.pressure.cp_nose_cm,
        analysis.pressure.weight_nose,
        analysis.pressure.cp_fin_cm,
        analysis.pressure.weight_fin,
        analysis.margin_cal,
        analysis.separation_cm(),
        analysis.body_d_cm,
        analysis.status.badge(),
        analysis.status.judgment(),
        analysis.status.tip(),
        MODEL_NOTE
    )
}

pub fn suggestions_report(suggestions: &[Suggestion]) -> String {
    let mut out = String::from("--- Suggestions ---\n");
    for (index, suggestion) in suggestions.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}\n   {}\n",
            index + 1,
            suggestion.title,
            suggestion.rationale
        ));
    }
    out
}

pub fn comparison_table(rows: &[RevisionComparison]) -> String {
    let mut out = format!(
        "{:<16} {:<12} {:>8} {:>8} {:>8}  {}\n",
        "Revision", "Created", "CG", "CP", "Margin", "Status"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<16} {:<12} {:>8.1} {:>8.2} {:>8.2}  {}\n",
            row.name,
            row.created_at.format("%Y-%m-%d").to_string(),
            row.cg_cm,
            row.cp_cm,
            row.margin_cal,
            row.status
        ));
    }
    out
}

pub fn flight_report(result: &SimulationResult) -> String {
    format!(
        "--- Simulation Summary ---\n\
         Max Altitude: {}\n\
         Burnout Velocity: {:.1} m/s\n\
         Flight Time: {}\n",
        format_altitude(result.max_alt_m),
        result.burnout_vel_ms,
        format_time(result.flight_time_s)
    )
}
