use crate::api::models::Country;
use crate::domain::Metric;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::Frame;

/// Chart colors carried over from the dashboard comparison chart.
pub const COUNTRY_A_COLOR: Color = Color::Rgb(29, 78, 216);
pub const COUNTRY_B_COLOR: Color = Color::Rgb(5, 150, 105);

pub const fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::Geological => Color::Yellow,
        Metric::Political => Color::Cyan,
        Metric::Legal => Color::Magenta,
        Metric::Economic => Color::Green,
        Metric::MarketAccess => Color::Rgb(0, 0, 238),
        Metric::Security => Color::Red,
    }
}

/// Spoke direction for a metric: starts at the top, runs clockwise.
fn spoke_angle(index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let step = index as f64;
    std::f64::consts::FRAC_PI_2 - step * (2.0 * std::f64::consts::PI / 6.0)
}

/// Small animated radar for the dashboard title bar.
pub fn render_mini_radar(f: &mut Frame<'_>, area: Rect, animation: f64) {
    if area.width < 4 || area.height < 4 {
        return;
    }

    let size = area.width.min(area.height);
    let square = Rect {
        x: area.x + (area.width - size) / 2,
        y: area.y + (area.height - size) / 2,
        width: size,
        height: size,
    };

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                let width = f64::from(square.width);
                let height = f64::from(square.height);
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                let radius = width.min(height) / 2.0 * 0.8;

                for i in 1..=3 {
                    let ring_radius = radius * (f64::from(i) / 3.0);
                    ctx.draw(&Circle {
                        x: center_x,
                        y: center_y,
                        radius: ring_radius,
                        color: Color::DarkGray,
                    });
                }

                // One spoke per metric
                for (index, _) in Metric::ALL.iter().enumerate() {
                    let angle = spoke_angle(index);
                    ctx.draw(&CanvasLine {
                        x1: center_x,
                        y1: center_y,
                        x2: angle.cos().mul_add(radius, center_x),
                        y2: angle.sin().mul_add(radius, center_y),
                        color: Color::DarkGray,
                    });
                }

                let sweep = animation * 2.0 * std::f64::consts::PI;
                let sweep_x = sweep.cos().mul_add(radius, center_x);
                let sweep_y = sweep.sin().mul_add(radius, center_y);

                let ghost = sweep + (std::f64::consts::PI / 18.0);
                let ghost_x = ghost.cos().mul_add(radius * 0.92, center_x);
                let ghost_y = ghost.sin().mul_add(radius * 0.92, center_y);

                ctx.draw(&CanvasLine {
                    x1: center_x,
                    y1: center_y,
                    x2: ghost_x,
                    y2: ghost_y,
                    color: Color::LightCyan,
                });

                ctx.draw(&CanvasLine {
                    x1: center_x,
                    y1: center_y,
                    x2: sweep_x,
                    y2: sweep_y,
                    color: Color::Cyan,
                });

                ctx.draw(&Circle {
                    x: center_x,
                    y: center_y,
                    radius: radius * 0.08,
                    color: Color::Cyan,
                });
            })
            .x_bounds([0.0, f64::from(square.width)])
            .y_bounds([0.0, f64::from(square.height)]),
        square,
    );
}

/// Radar overlay of two countries on the six metric spokes, scale 0-10.
pub fn render_comparison_radar(f: &mut Frame<'_>, area: Rect, a: &Country, b: &Country) {
    if area.width < 8 || area.height < 6 {
        return;
    }

    let size = area.width.min(area.height);
    let square = Rect {
        x: area.x + (area.width - size) / 2,
        y: area.y + (area.height - size) / 2,
        width: size,
        height: size,
    };

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                let width = f64::from(square.width);
                let height = f64::from(square.height);
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                let max_radius = width.min(height) / 2.0 * 0.8;

                // Guide rings at 2.5, 5, 7.5 and 10
                for i in 1..=4 {
                    let ring_radius = max_radius * (f64::from(i) / 4.0);
                    ctx.draw(&Circle {
                        x: center_x,
                        y: center_y,
                        radius: ring_radius,
                        color: Color::DarkGray,
                    });
                }

                for (index, metric) in Metric::ALL.iter().enumerate() {
                    let angle = spoke_angle(index);
                    ctx.draw(&CanvasLine {
                        x1: center_x,
                        y1: center_y,
                        x2: angle.cos().mul_add(max_radius, center_x),
                        y2: angle.sin().mul_add(max_radius, center_y),
                        color: Color::DarkGray,
                    });

                    ctx.print(
                        angle.cos().mul_add(max_radius * 1.12, center_x),
                        angle.sin().mul_add(max_radius * 1.12, center_y),
                        TextLine::styled(metric.short_label(), Style::default().fg(Color::Gray)),
                    );
                }

                draw_polygon(ctx, center_x, center_y, max_radius, a, COUNTRY_A_COLOR);
                draw_polygon(ctx, center_x, center_y, max_radius, b, COUNTRY_B_COLOR);
            })
            .x_bounds([0.0, f64::from(square.width)])
            .y_bounds([0.0, f64::from(square.height)]),
        square,
    );
}

fn draw_polygon(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    center_x: f64,
    center_y: f64,
    max_radius: f64,
    country: &Country,
    color: Color,
) {
    let points: Vec<(f64, f64)> = Metric::ALL
        .iter()
        .enumerate()
        .map(|(index, metric)| {
            let angle = spoke_angle(index);
            let reach = (country.metric(*metric) / 10.0).clamp(0.0, 1.0) * max_radius;
            (
                angle.cos().mul_add(reach, center_x),
                angle.sin().mul_add(reach, center_y),
            )
        })
        .collect();

    for (index, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(index + 1) % points.len()];
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    for &(x, y) in &points {
        ctx.draw(&Circle {
            x,
            y,
            radius: max_radius * 0.03,
            color,
        });
    }
}
