use anyhow::{Context, Result};
use glint_core::load_scene;
use glint_renderer::{render, save_image, RenderConfig};
use std::path::Path;
use std::time::Instant;

/// Output file, written to the working directory.
const OUTPUT_PATH: &str = "diffuse.ppm";

const USAGE: &str = "usage: glint <scene-file>";

/// Load the scene, render it and write the image.
fn run(scene_path: &Path, output_path: &Path) -> Result<()> {
    let start = Instant::now();
    let scene = load_scene(scene_path)
        .with_context(|| format!("Failed to load scene {}", scene_path.display()))?;
    log::info!("Scene loaded in {:?}", start.elapsed());

    if scene.is_empty() {
        log::warn!("Scene has no primitives; rendering background only");
    }

    let config = RenderConfig::default();

    let start = Instant::now();
    let image = render(&scene, &config);
    log::info!("Rendered in {:?}", start.elapsed());

    save_image(&image, output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    Ok(())
}

/// Extract the single scene path argument, if that is exactly what was given.
fn scene_path_from_args<I: IntoIterator<Item = String>>(args: I) -> Option<String> {
    let mut args = args.into_iter().skip(1);
    let path = args.next()?;
    if args.next().is_some() {
        return None;
    }
    Some(path)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let Some(scene_path) = scene_path_from_args(std::env::args()) else {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    };

    log::info!("Starting Glint");
    run(Path::new(&scene_path), Path::new(OUTPUT_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exactly_one_argument() {
        assert_eq!(
            scene_path_from_args(args(&["glint", "scene.txt"])),
            Some("scene.txt".to_string())
        );
    }

    #[test]
    fn test_wrong_argument_count() {
        assert_eq!(scene_path_from_args(args(&["glint"])), None);
        assert_eq!(scene_path_from_args(args(&["glint", "a.txt", "b.txt"])), None);
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = std::env::temp_dir();
        let scene_path = dir.join(format!("glint_cli_{}.txt", std::process::id()));
        let output_path = dir.join(format!("glint_cli_{}.ppm", std::process::id()));
        std::fs::write(
            &scene_path,
            "BackgroundColor 0 0 1\nSphere Center 0 0 -2 Radius 0.5 Material Diffuse 1 0 0 SpecularHighlight 0 0 0 PhongConstant 1\n",
        )
        .expect("write scene");

        run(&scene_path, &output_path).expect("render should succeed");

        let text = std::fs::read_to_string(&output_path).expect("read output");
        assert!(text.starts_with("P3\n514 513\n255\n"));
        // Corner pixel is the background
        assert_eq!(text.lines().nth(3), Some("0 0 255"));

        std::fs::remove_file(scene_path).ok();
        std::fs::remove_file(output_path).ok();
    }

    #[test]
    fn test_run_missing_scene_fails() {
        let output_path = std::env::temp_dir().join("glint_cli_missing.ppm");
        assert!(run(Path::new("/no/such/scene.txt"), &output_path).is_err());
    }
}
