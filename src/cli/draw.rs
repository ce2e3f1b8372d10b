//! Draw command implementation.
//!
//! Renders a scene file onto a colour canvas.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{dimensions, display_path, plural, Printer};
use crate::scene::Scene;

/// Render a YAML scene to a colour image
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Scene file (YAML)
    pub scene: PathBuf,

    /// Output image; the format comes from the scene's canvas
    pub output: PathBuf,
}

pub fn run(args: DrawArgs, printer: &Printer) -> Result<()> {
    printer.status("Loading", &display_path(&args.scene));
    let scene = Scene::load(&args.scene)?;

    let pixmap = scene.render()?;
    printer.info(
        "Drew",
        &format!(
            "{} on {}",
            plural(scene.shapes.len(), "shape", "shapes"),
            dimensions(pixmap.size())
        ),
    );

    pixmap.save(&args.output)?;
    printer.success("Wrote", &display_path(&args.output));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PnmError;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_draw_scene_file() {
        let dir = tempdir().unwrap();
        let scene = dir.path().join("scene.yaml");
        let output = dir.path().join("out.ppm");
        std::fs::write(
            &scene,
            r##"
canvas: { width: 3, height: 2, max: 1 }
shapes:
  - { kind: line, from: [0, 1], to: [2, 1], colour: "#FFFFFF" }
"##,
        )
        .unwrap();

        let args = DrawArgs {
            scene,
            output: output.clone(),
        };
        run(args, &Printer::plain()).unwrap();

        assert_eq!(
            String::from_utf8(std::fs::read(&output).unwrap()).unwrap(),
            "P3\n3 2\n1\n0 0 0 0 0 0 0 0 0\n1 1 1 1 1 1 1 1 1\n"
        );
    }

    #[test]
    fn test_draw_invalid_scene() {
        let dir = tempdir().unwrap();
        let scene = dir.path().join("scene.yaml");
        std::fs::write(&scene, "canvas: [not, a, map]").unwrap();

        let args = DrawArgs {
            scene,
            output: dir.path().join("out.ppm"),
        };
        assert!(matches!(
            run(args, &Printer::plain()),
            Err(PnmError::Parse { .. })
        ));
    }
}
