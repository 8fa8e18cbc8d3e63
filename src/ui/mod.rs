/// Presentation shell: a thin egui adapter over the data layer. Nothing in
/// here filters or aggregates; it forwards selector changes to the engine
/// and renders whatever specs come back.

pub mod charts;
pub mod panels;
