//! The ten capability-showcase platforms.

mod agentic_flow;
mod auto_vision;
mod edge_intel;
mod logi_smart;
mod med_scan;
mod multimodal_nexus;
mod quantum_mind;
mod robo_vision;
mod sovereign_shield;
mod trade_flow;

use crate::platform::Platform;

pub fn platforms() -> Vec<Platform> {
    vec![
        auto_vision::platform(),
        logi_smart::platform(),
        trade_flow::platform(),
        robo_vision::platform(),
        med_scan::platform(),
        agentic_flow::platform(),
        multimodal_nexus::platform(),
        edge_intel::platform(),
        quantum_mind::platform(),
        sovereign_shield::platform(),
    ]
}
