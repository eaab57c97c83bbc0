//! Text summaries of loaded definitions.

use std::fmt::Write;

use skyway_vehicles::{BankingState, LoadSummary, VehicleDefinition, VehicleRegistry};

/// One-block description of a definition.
#[must_use]
pub fn describe_definition(def: &VehicleDefinition) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) size {:.2} x {:.2} x {:.2}",
        def.name, def.vehicle_type, def.size.x, def.size.y, def.size.z
    );
    for banking in BankingState::ALL {
        let Some(set) = def.sprite_set(banking) else {
            continue;
        };
        let missing = set.values().filter(|s| s.is_none()).count();
        let projected = def.slots(banking).count();
        let _ = writeln!(
            out,
            "  {banking:<13} {:>2} sprites, {projected:>2} projected, {missing} missing",
            set.len()
        );
    }
    let voxels = def.voxel_map.size();
    let _ = writeln!(out, "  voxel map     {}x{}x{}", voxels.x, voxels.y, voxels.z);
    out
}

/// Description of every definition in the registry plus the load totals.
#[must_use]
pub fn describe_registry(registry: &VehicleRegistry, summary: LoadSummary) -> String {
    let mut out = String::new();
    for name in registry.names() {
        if let Some(def) = registry.get(name) {
            out.push_str(&describe_definition(def));
        }
    }
    let _ = writeln!(
        out,
        "{} defined, {} rejected, {} unreadable documents, {} diagnostics",
        summary.defined,
        summary.rejected,
        summary.failed_documents,
        registry.diagnostics().len()
    );
    out
}
