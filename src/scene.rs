//! Scene files: a canvas plus an ordered list of shapes, in YAML.
//!
//! ```yaml
//! canvas:
//!   width: 64
//!   height: 48
//!   format: P6
//!   background: "#000000"
//! shapes:
//!   - { kind: line, from: [0, 0], to: [63, 47], colour: "#FF0000" }
//!   - { kind: circle, center: [32, 24], radius: 10, colour: "#00F", filled: true }
//! ```

use std::path::Path;

use log::{debug, trace};
use serde::Deserialize;

use crate::error::{PnmError, Result};
use crate::types::{Colour, Format, PixelKind, Pixmap, Point, DEFAULT_MAX};

/// Deepest Koch refinement a scene may request. Each level multiplies the
/// segment count by four.
pub const MAX_KOCH_DEPTH: u32 = 8;

/// A parsed scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    pub canvas: Canvas,

    /// Shapes in drawing order; later shapes paint over earlier ones.
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// Canvas settings for a scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,

    #[serde(default = "default_max")]
    pub max: u8,

    /// Output format; must be a colour format.
    #[serde(default = "default_format")]
    pub format: Format,

    #[serde(default)]
    pub background: Option<Colour>,
}

fn default_max() -> u8 {
    DEFAULT_MAX
}

fn default_format() -> Format {
    Format::ColorText
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Line {
        from: Point,
        to: Point,
        #[serde(alias = "color")]
        colour: Colour,
    },
    Rect {
        at: Point,
        width: u32,
        height: u32,
        #[serde(alias = "color")]
        colour: Colour,
        #[serde(default)]
        filled: bool,
    },
    Circle {
        center: Point,
        radius: u32,
        #[serde(alias = "color")]
        colour: Colour,
        #[serde(default)]
        filled: bool,
    },
    Triangle {
        points: [Point; 3],
        #[serde(alias = "color")]
        colour: Colour,
        #[serde(default)]
        filled: bool,
    },
    Polygon {
        points: Vec<Point>,
        #[serde(alias = "color")]
        colour: Colour,
        #[serde(default)]
        filled: bool,
    },
    Koch {
        center: Point,
        radius: u32,
        depth: u32,
        #[serde(alias = "color")]
        colour: Colour,
    },
}

impl Scene {
    /// Load a scene from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PnmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read scene: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a scene from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let scene: Scene = serde_yaml::from_str(content).map_err(|e| PnmError::Parse {
            message: format!("Invalid scene: {}", e),
            help: Some("Colours are hex strings such as \"#FF8800\" or \"#F80\"".to_string()),
        })?;

        scene.validate()?;
        Ok(scene)
    }

    fn validate(&self) -> Result<()> {
        if self.canvas.format.kind() != PixelKind::Color {
            return Err(PnmError::Parse {
                message: format!("Invalid scene: canvas format {} is not a colour format", self.canvas.format),
                help: Some("Use P3, P6, color-text or color-binary".to_string()),
            });
        }
        if self.canvas.max == 0 {
            return Err(PnmError::Parse {
                message: "Invalid scene: canvas max must be at least 1".to_string(),
                help: None,
            });
        }
        for (i, shape) in self.shapes.iter().enumerate() {
            if let Shape::Koch { depth, .. } = shape {
                if *depth > MAX_KOCH_DEPTH {
                    return Err(PnmError::Parse {
                        message: format!("Invalid scene: shape {} has Koch depth {}", i, depth),
                        help: Some(format!("Depth may be at most {}", MAX_KOCH_DEPTH)),
                    });
                }
            }
        }
        Ok(())
    }

    /// Draw every shape onto a fresh canvas.
    pub fn render(&self) -> Result<Pixmap> {
        let canvas = &self.canvas;
        let mut pixmap = Pixmap::new(canvas.width, canvas.height, canvas.format.encoding());
        pixmap.set_format(canvas.format)?;
        pixmap.set_max(canvas.max)?;
        if let Some(background) = canvas.background {
            pixmap.fill(background);
        }

        for shape in &self.shapes {
            shape.draw(&mut pixmap);
        }

        debug!(
            "rendered {} shapes onto {}x{} canvas",
            self.shapes.len(),
            canvas.width,
            canvas.height
        );
        Ok(pixmap)
    }
}

impl Shape {
    /// Draw this shape onto a colour raster.
    pub fn draw(&self, pixmap: &mut Pixmap) {
        trace!("drawing {:?}", self);
        match *self {
            Shape::Line { from, to, colour } => pixmap.draw_line(from, to, colour),
            Shape::Rect { at, width, height, colour, filled } => {
                if filled {
                    pixmap.draw_filled_rectangle(at, width, height, colour);
                } else {
                    pixmap.draw_rectangle(at, width, height, colour);
                }
            }
            Shape::Circle { center, radius, colour, filled } => {
                if filled {
                    pixmap.draw_filled_circle(center, radius, colour);
                } else {
                    pixmap.draw_circle(center, radius, colour);
                }
            }
            Shape::Triangle { points: [a, b, c], colour, filled } => {
                if filled {
                    pixmap.draw_filled_triangle(a, b, c, colour);
                } else {
                    pixmap.draw_triangle(a, b, c, colour);
                }
            }
            Shape::Polygon { ref points, colour, filled } => {
                if filled {
                    pixmap.draw_filled_polygon(points, colour);
                } else {
                    pixmap.draw_polygon(points, colour);
                }
            }
            Shape::Koch { center, radius, depth, colour } => {
                pixmap.draw_koch_snowflake(center, radius, depth, colour);
            }
        }
    }
}
