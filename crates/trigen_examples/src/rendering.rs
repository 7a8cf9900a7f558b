//! Shared helpers for the example binaries: tracing setup and a minimal
//! scene-to-SVG writer.
//!
//! SVG output is deliberately outside the trigen core; the library hands
//! over plain scene data and this module turns it into markup.
use std::path::Path;

use svg::node::element::{Definitions, LinearGradient, Polygon, Rectangle, Stop};
use svg::Document;
use trigen::prelude::*;

/// Installs a plain fmt subscriber for the demo binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt::init();
}

/// Renders a scene into an SVG document.
pub fn scene_to_svg(scene: &Scene) -> Document {
    let mut document = Document::new()
        .set("width", scene.width)
        .set("height", scene.height)
        .set("viewBox", (0.0, 0.0, scene.width, scene.height));

    if let Some(background) = scene.background {
        document = document.add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", background.to_hex()),
        );
    }

    let mut definitions = Definitions::new();
    let mut has_gradients = false;
    for (index, (_, paint)) in scene.triangles.iter().enumerate() {
        if let Paint::Gradient {
            start,
            stop,
            direction,
        } = paint
        {
            has_gradients = true;
            definitions = definitions.add(
                LinearGradient::new()
                    .set("id", gradient_id(index))
                    .set("x1", 0.0)
                    .set("y1", 0.0)
                    .set("x2", direction.x)
                    .set("y2", direction.y)
                    .add(
                        Stop::new()
                            .set("offset", "0%")
                            .set("stop-color", start.to_hex()),
                    )
                    .add(
                        Stop::new()
                            .set("offset", "100%")
                            .set("stop-color", stop.to_hex()),
                    ),
            );
        }
    }
    if has_gradients {
        document = document.add(definitions);
    }

    for (index, (triangle, paint)) in scene.triangles.iter().enumerate() {
        let points: String = triangle
            .vertices()
            .iter()
            .map(|v| format!("{},{}", v.x, v.y))
            .collect::<Vec<_>>()
            .join(" ");

        let fill = match paint {
            _ if scene.stroke_only => "none".to_owned(),
            Paint::Solid(color) => color.to_hex(),
            Paint::Gradient { .. } => format!("url(#{})", gradient_id(index)),
        };
        let stroke = scene
            .stroke_color
            .unwrap_or_else(|| paint.primary_color())
            .to_hex();

        document = document.add(
            Polygon::new()
                .set("points", points)
                .set("fill", fill)
                .set("stroke", stroke)
                .set("stroke-width", scene.stroke_width),
        );
    }

    document
}

/// Writes the scene as an SVG file.
pub fn write_svg(scene: &Scene, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let document = scene_to_svg(scene);
    svg::save(path, &document)?;
    Ok(())
}

fn gradient_id(index: usize) -> String {
    format!("tri-gradient-{index}")
}
