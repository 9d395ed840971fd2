//! Table and CSV rendering of evaluated paths and sweeps.

use clap::ValueEnum;
use pd_components::Station;
use pd_core::units::constants::{INCH, PSI};
use pd_path::FlowPath;

/// Pressure unit used for printed and exported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PressureUnit {
    #[default]
    Pa,
    Kpa,
    Psi,
}

impl PressureUnit {
    pub fn label(&self) -> &'static str {
        match self {
            PressureUnit::Pa => "Pa",
            PressureUnit::Kpa => "kPa",
            PressureUnit::Psi => "psi",
        }
    }

    /// Convert a value in pascal.
    pub fn from_pa(&self, value: f64) -> f64 {
        match self {
            PressureUnit::Pa => value,
            PressureUnit::Kpa => value / 1000.0,
            PressureUnit::Psi => value / PSI,
        }
    }
}

/// Per-element table with the running total.
pub fn path_table(path: &FlowPath, unit: PressureUnit) -> String {
    let mut out = format!(
        "{:<4} {:<16} {:>10} {:>10} {:>12} {:>8} {:>14} {:>14}\n",
        "#",
        "element",
        "length_m",
        "v_m_s",
        "Re",
        "K",
        format!("dp_{}", unit.label()),
        format!("total_{}", unit.label()),
    );
    for (i, ((name, _), (drop, point))) in path
        .breakdown()
        .into_iter()
        .zip(path.drops().iter().zip(path.cumulative_profile()))
        .enumerate()
    {
        let re = drop
            .reynolds
            .map(|re| format!("{re:.0}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<4} {:<16} {:>10.4} {:>10.3} {:>12} {:>8.4} {:>14.3} {:>14.3}\n",
            i,
            name,
            point.length.value,
            drop.velocity.value,
            re,
            drop.k_total,
            unit.from_pa(drop.delta_p.value),
            unit.from_pa(point.pressure_drop.value),
        ));
    }
    out
}

/// Cumulative profile as CSV.
pub fn path_csv(path: &FlowPath, unit: PressureUnit) -> String {
    let mut csv = format!(
        "element,length_m,dp_{u},cumulative_dp_{u}\n",
        u = unit.label().to_ascii_lowercase()
    );
    for ((name, dp), point) in path.breakdown().into_iter().zip(path.cumulative_profile()) {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            name,
            point.length.value,
            unit.from_pa(dp),
            unit.from_pa(point.pressure_drop.value)
        ));
    }
    csv
}

/// Diameter sweep as CSV, diameters in both metres and inches.
pub fn sweep_csv(stations: &[Station], unit: PressureUnit) -> String {
    let mut csv = format!(
        "diameter_m,diameter_in,reynolds,friction_factor,k_total,dp_{}\n",
        unit.label().to_ascii_lowercase()
    );
    for s in stations {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            s.diameter.value,
            s.diameter.value / INCH,
            s.drop.reynolds.unwrap_or(f64::NAN),
            s.drop.friction_factor.unwrap_or(f64::NAN),
            s.drop.k_total,
            unit.from_pa(s.drop.delta_p.value)
        ));
    }
    csv
}
