use std::time::Instant;

use log::debug;

use mandelbrot_explorer::colour::{HistogramColouring, Palette};
use mandelbrot_explorer::render;
use mandelbrot_explorer::screen::Size;
use mandelbrot_explorer::session::ZoomSession;
use mandelbrot_explorer::viewport::PlaneBounds;
use mandelbrot_explorer::{Error, DEFAULT_MAX_STEPS};

fn main() -> Result<(), Error> {
    env_logger::init();

    let size = Size::new(96, 48);
    let mut session: ZoomSession<f64> = ZoomSession::new(PlaneBounds::full_set(), size);
    let palette = Palette::hue_sweep(64);
    let mut shading = HistogramColouring::new();

    draw_pass(&session, &palette, &mut shading)?;

    // A scripted drag in place of mouse input: zoom into the middle of the
    // view and render again against the replaced bounds.
    session.begin_selection(24.0, 12.0);
    session.drag_to(60.0, 36.0);
    if session.commit_selection()?.is_some() {
        draw_pass(&session, &palette, &mut shading)?;
    }

    Ok(())
}

/// Render one pass against the session's current bounds and display it as
/// ANSI background cells.
fn draw_pass(
    session: &ZoomSession<f64>,
    palette: &Palette,
    shading: &mut HistogramColouring,
) -> Result<(), Error> {
    let size = session.viewport();

    let started = Instant::now();
    let frame = render::render(session.bounds(), size, DEFAULT_MAX_STEPS)?;
    debug!("pass finished in {:?}", started.elapsed());

    shading.rebuild(&frame, DEFAULT_MAX_STEPS);

    let mut out = String::with_capacity(frame.counts().len() * 20);
    for y in 0..size.height {
        for x in 0..size.width {
            let count = frame.count_at(x, y);
            if count >= DEFAULT_MAX_STEPS {
                // Likely in the set: black.
                out.push_str("\x1b[48;2;0;0;0m ");
            } else {
                let shade = shading.shade(count).unwrap_or(1.0);
                let rgb = palette.colour_for(count).scaled(0.35 + 0.65 * shade);
                out.push_str(&format!("\x1b[48;2;{};{};{}m ", rgb.r, rgb.g, rgb.b));
            }
        }
        out.push_str("\x1b[0m\n");
    }
    print!("{out}");

    Ok(())
}
