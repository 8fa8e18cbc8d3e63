use eframe::egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::Rgb;
use crate::data::engine::{ChartSpec, SeriesKind};

const CHART_HEIGHT: f32 = 260.0;

fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

// ---------------------------------------------------------------------------
// Chart slot
// ---------------------------------------------------------------------------

/// Render one chart slot from its spec. `slot` keeps egui ids distinct
/// across the four charts of a tab.
pub fn chart_slot(ui: &mut Ui, slot: usize, spec: &ChartSpec) {
    ui.add_space(14.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(spec.title).size(spec.font.size + 4.0).strong());
    });

    if spec.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(24.0);
            ui.weak("No data for the selected month.");
            ui.add_space(24.0);
        });
        return;
    }

    match spec.kind {
        SeriesKind::Bar => bar_chart(ui, slot, spec),
        SeriesKind::Pie => pie_chart(ui, spec),
    }
}

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

/// Bars at positions 0..n with category labels on the x axis, in the order
/// the engine produced them.
fn bar_chart(ui: &mut Ui, slot: usize, spec: &ChartSpec) {
    let color = spec
        .colors
        .first()
        .copied()
        .map(to_color32)
        .unwrap_or(Color32::LIGHT_BLUE);

    let bars: Vec<Bar> = spec
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Bar::new(i as f64, v)
                .width(0.7)
                .fill(color)
                .name(&spec.labels[i])
        })
        .collect();

    let labels = spec.labels.clone();
    Plot::new(("chart_slot", slot))
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 0.05 || rounded < 0.0 {
                return String::new();
            }
            labels.get(rounded as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Pie charts
// ---------------------------------------------------------------------------

/// egui_plot has no pie series, so slices are painted directly: one wedge
/// per label, clockwise from 12 o'clock, with a swatch legend underneath.
fn pie_chart(ui: &mut Ui, spec: &ChartSpec) {
    let total: f64 = spec.values.iter().sum();
    if total <= 0.0 {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.weak("No calls recorded for the selected month.");
        });
        return;
    }

    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), CHART_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.height() * 0.45;

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (i, &value) in spec.values.iter().enumerate() {
        let sweep = value / total * std::f64::consts::TAU;
        let color = spec
            .colors
            .get(i)
            .copied()
            .map(to_color32)
            .unwrap_or(Color32::GRAY);

        // Approximate the wedge with a fan of short segments.
        let steps = ((sweep / 0.05).ceil() as usize).max(2);
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for s in 0..=steps {
            let angle = start + sweep * s as f64 / steps as f64;
            points.push(Pos2::new(
                center.x + radius * angle.cos() as f32,
                center.y + radius * angle.sin() as f32,
            ));
        }
        painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        start += sweep;
    }

    // Legend: swatch, label, share of total.
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (i, label) in spec.labels.iter().enumerate() {
            let color = spec
                .colors
                .get(i)
                .copied()
                .map(to_color32)
                .unwrap_or(Color32::GRAY);
            let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2, color);

            let value = spec.values[i];
            let pct = value / total * 100.0;
            ui.label(format!("{label}: {value:.0} ({pct:.1}%)"));
            ui.add_space(12.0);
        }
    });
}
