//! Colouring algorithms.

use fnv::FnvHashMap;
use log::trace;

use crate::render::Frame;

/// An 8-bit colour as handed to the display layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Scale brightness by `factor` in [0, 1].
    pub fn scaled(self, factor: f32) -> Rgb {
        let factor = factor.clamp(0.0, 1.0);
        Rgb {
            r: (f32::from(self.r) * factor) as u8,
            g: (f32::from(self.g) * factor) as u8,
            b: (f32::from(self.b) * factor) as u8,
        }
    }
}

/// A colour table keyed by `iteration_count % len`.
///
/// Which colours go in the table is the display layer's business; the
/// lookup discipline is the only contract here.
pub struct Palette {
    table: Vec<Rgb>,
}

impl Palette {
    /// Panics if `table` is empty.
    pub fn new(table: Vec<Rgb>) -> Self {
        assert!(!table.is_empty(), "palette table must not be empty");
        Palette { table }
    }

    /// An evenly spaced hue sweep with `size` entries.
    pub fn hue_sweep(size: usize) -> Self {
        let table = (0..size.max(1))
            .map(|index| hsv_to_rgb(360.0 * index as f32 / size.max(1) as f32, 0.85, 0.9))
            .collect();
        Palette { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn colour_for(&self, iteration_count: u32) -> Rgb {
        self.table[iteration_count as usize % self.table.len()]
    }
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let c = v * s;
    let h_prime = (h / 60.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let (r1, g1, b1) = if (0.0..1.0).contains(&h_prime) {
        (c, x, 0.0)
    } else if (1.0..2.0).contains(&h_prime) {
        (x, c, 0.0)
    } else if (2.0..3.0).contains(&h_prime) {
        (0.0, c, x)
    } else if (3.0..4.0).contains(&h_prime) {
        (0.0, x, c)
    } else if (4.0..5.0).contains(&h_prime) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    let m = v - c;
    Rgb {
        r: ((r1 + m) * 255.0) as u8,
        g: ((g1 + m) * 255.0) as u8,
        b: ((b1 + m) * 255.0) as u8,
    }
}

/// Histogram-based colouring algorithm ([Wikipedia](https://en.wikipedia.org/wiki/Plotting_algorithms_for_the_Mandelbrot_set#Histogram_coloring)).
///
/// Escaped counts are ranked by how much of the frame escaped before them,
/// giving a [0, 1] shade per count that spreads contrast evenly however the
/// counts cluster. Points that exhausted the budget carry no weight.
pub struct HistogramColouring {
    total_samples: usize,
    bucket_labels: Vec<u32>,
    histogram: FnvHashMap<u32, u32>,
    shades: FnvHashMap<u32, f32>,
}

impl HistogramColouring {
    pub fn new() -> Self {
        Self {
            total_samples: 0,
            bucket_labels: Vec::new(),
            histogram: FnvHashMap::default(),
            shades: FnvHashMap::default(),
        }
    }

    pub fn reset(&mut self) {
        self.total_samples = 0;
        self.bucket_labels.clear();
        self.histogram.clear();
        self.shades.clear();
    }

    /// Rebuild the histogram from a completed pass.
    pub fn rebuild(&mut self, frame: &Frame, max_steps: u32) {
        trace!("begin histogram rebuild");
        self.reset();

        for &count in frame.counts() {
            debug_assert!(count <= max_steps);
            if count >= max_steps {
                continue;
            }
            let value = self.histogram.entry(count).or_insert_with(|| {
                self.bucket_labels.push(count);
                0
            });
            *value += 1;
            self.total_samples += 1;
        }

        self.bucket_labels.sort_unstable();

        let mut acc = 0u32;
        let total_samples = self.total_samples as f32;
        for bucket_label in &self.bucket_labels {
            self.shades.insert(*bucket_label, acc as f32 / total_samples);
            acc += self.histogram[bucket_label];
        }

        trace!("end histogram rebuild");
    }

    /// Shade in [0, 1] for an escaped count; `None` for counts that never
    /// escaped or did not occur in the rebuilt frame.
    pub fn shade(&self, iteration_count: u32) -> Option<f32> {
        self.shades.get(&iteration_count).copied()
    }
}

impl Default for HistogramColouring {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::screen::Size;
    use crate::viewport::PlaneBounds;

    #[test]
    fn palette_lookup_wraps_modulo_table_size() {
        let palette = Palette::new(vec![
            Rgb { r: 1, g: 0, b: 0 },
            Rgb { r: 0, g: 2, b: 0 },
            Rgb { r: 0, g: 0, b: 3 },
        ]);
        assert_eq!(palette.colour_for(0), palette.colour_for(3));
        assert_eq!(palette.colour_for(1), palette.colour_for(301));
        assert_eq!(palette.colour_for(2), Rgb { r: 0, g: 0, b: 3 });
    }

    #[test]
    fn hue_sweep_has_the_requested_size() {
        assert_eq!(Palette::hue_sweep(64).len(), 64);
        assert_eq!(Palette::hue_sweep(0).len(), 1);
    }

    #[test]
    fn shades_are_normalized_and_monotone_in_count() {
        let max_steps = 40;
        let frame = render(PlaneBounds::<f64>::full_set(), Size::new(48, 36), max_steps).unwrap();
        let mut colouring = HistogramColouring::new();
        colouring.rebuild(&frame, max_steps);

        let mut previous = -1.0f32;
        for count in 0..max_steps {
            if let Some(shade) = colouring.shade(count) {
                assert!((0.0..=1.0).contains(&shade));
                assert!(shade > previous, "shade not monotone at count {}", count);
                previous = shade;
            }
        }
    }

    #[test]
    fn exhausted_budget_counts_carry_no_weight() {
        let max_steps = 30;
        let frame = render(PlaneBounds::<f64>::full_set(), Size::new(48, 36), max_steps).unwrap();
        let mut colouring = HistogramColouring::new();
        colouring.rebuild(&frame, max_steps);
        assert_eq!(colouring.shade(max_steps), None);
    }
}
