use std::{io::Write, path::Path};

use anyhow::{Result, anyhow};
use geo::Coord;

use crate::{common::escape_html, io::svg::*};

use super::Choropleth;

/// Height of one legend row, in SVG units.
const LEGEND_ROW: f64 = 20.0;
const LEGEND_WIDTH: f64 = 160.0;
const SWATCH: f64 = 14.0;

impl Choropleth {
    /// Small wrapper with defaults.
    pub fn to_svg(&self, path: &Path) -> Result<()> {
        self.to_svg_with_size(path, 1200, 10)
    }

    /// Render every county under the current metric, with its legend, to an SVG file.
    pub fn to_svg_with_size(&self, path: &Path, width: i32, margin: i32) -> Result<()> {
        let mut writer = SvgWriter::new(path)?;
        self.write_svg(&mut writer, width as f64, margin as f64)?;
        writer.flush()?;
        Ok(())
    }

    /// Same as [`Choropleth::to_svg_with_size`], returning the markup.
    pub fn to_svg_string(&self, width: i32, margin: i32) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        self.write_svg(&mut writer, width as f64, margin as f64)?;
        writer.into_string()
    }

    fn write_svg(&self, writer: &mut impl Write, width: f64, margin: f64) -> Result<()> {
        let bounds = self.layer().bounds()
            .ok_or_else(|| anyhow!("[to_svg] No county geometry to draw."))?;

        // Degenerate (zero-width) extents still get a finite scale.
        let scale = if bounds.width() > 0.0 { (width - 2.0 * margin) / bounds.width() } else { 1.0 };
        let map_height = bounds.height() * scale + 2.0 * margin;

        let legend = self.legend();
        let legend_height = LEGEND_ROW * (legend.entries.len() + 1) as f64 + margin;
        let height = map_height + legend_height;

        // --- Map lon/lat -> SVG coords (preserve aspect, Y down) ---
        let project = move |coord: &Coord<f64>| -> (f64, f64) {
            let x = margin + (coord.x - bounds.min().x) * scale;
            let y = margin + (bounds.max().y - coord.y) * scale; // invert vertically
            (x, y)
        };

        write_svg_header(writer, width, height, margin, scale, &bounds)?;
        write_svg_styles(writer)?;

        writeln!(writer, r#"<g class="counties" fill-rule="evenodd">"#)?;
        for (county, style) in self.layer().iter().zip(self.styles()) {
            if county.geometry.0.is_empty() { continue }
            writeln!(writer,
                r#"<path class="cty" data-fips="{}" d="{}" style="fill:{};stroke:{};stroke-width:{};fill-opacity:{}"/>"#,
                escape_html(county.fips().unwrap_or("")),
                multipolygon_to_path(&county.geometry, &project),
                escape_html(&style.fill_color),
                escape_html(&style.stroke_color),
                style.stroke_weight,
                style.fill_opacity,
            )?;
        }
        writeln!(writer, "</g>")?;

        // --- Legend strip below the map, right-aligned ---
        let x0 = (width - margin - LEGEND_WIDTH).max(margin);
        writeln!(writer, r#"<g class="legend" transform="translate({x0:.1},{map_height:.1})">"#)?;
        writeln!(writer, r#"<text class="lgd lgd-title" x="0" y="{:.1}">{}</text>"#, SWATCH, escape_html(&legend.title()))?;
        for (i, entry) in legend.entries.iter().enumerate() {
            let y = LEGEND_ROW * (i + 1) as f64;
            writeln!(writer,
                r#"<rect x="0" y="{y:.1}" width="{SWATCH}" height="{SWATCH}" fill="{}" fill-opacity="{}"/>"#,
                escape_html(&entry.color),
                self.options().fill_opacity,
            )?;
            writeln!(writer,
                r#"<text class="lgd" x="{:.1}" y="{:.1}">{}</text>"#,
                SWATCH + 6.0,
                y + SWATCH - 2.0,
                escape_html(&entry.label),
            )?;
        }
        writeln!(writer, "</g>")?;

        write_svg_footer(writer)?;
        Ok(())
    }
}
