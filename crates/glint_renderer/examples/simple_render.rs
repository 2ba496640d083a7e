//! Simple ray casting example.
//!
//! Builds a small scene in code (no scene file) and saves it to PPM.
//!
//! Run with: cargo run --example simple_render -p glint_renderer

use glint_renderer::{
    render, save_image, CameraAndColorInfo, Color, Material, RenderConfig, Scene, Sphere,
    Triangle, Vec3,
};

fn main() {
    println!("Glint Ray Caster - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig::default().with_resolution(400, 400);

    println!("Rendering {}x{}...", config.width, config.height);

    let start = std::time::Instant::now();
    let image = render(&scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_image(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::with_info(CameraAndColorInfo {
        camera_look_from: Vec3::new(0.0, 0.0, 1.0),
        field_of_view: 28.0,
        direction_to_light: Vec3::new(1.0, 1.0, 1.0).normalize(),
        light_color: Color::new(1.0, 1.0, 1.0),
        ambient_light: Color::new(0.1, 0.1, 0.1),
        background_color: Color::new(0.2, 0.2, 0.2),
        ..Default::default()
    });

    // Floor
    scene.add_triangle(Triangle::new(
        Vec3::new(-3.0, -0.5, 1.0),
        Vec3::new(3.0, -0.5, 1.0),
        Vec3::new(0.0, -0.5, -6.0),
        Material::new(Color::new(0.3, 0.3, 0.3), Color::ZERO, 1.0),
    ));

    // Three spheres
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 0.0, -1.5),
        0.5,
        Material::new(Color::new(1.0, 0.0, 1.0), Color::ONE, 32.0),
    ));

    scene.add_sphere(Sphere::new(
        Vec3::new(-0.9, -0.2, -2.0),
        0.3,
        Material::new(Color::new(0.0, 0.6, 1.0), Color::new(0.5, 0.5, 0.5), 8.0),
    ));

    scene.add_sphere(
        Sphere::new(
            Vec3::new(0.9, -0.1, -1.8),
            0.4,
            Material::new(Color::new(1.0, 0.8, 0.1), Color::ONE, 64.0),
        )
        .with_reflective(Color::new(0.5, 0.5, 0.5)),
    );

    println!("Created {} objects", scene.primitive_count());
    scene
}
