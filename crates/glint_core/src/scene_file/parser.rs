//! Scene description parser.
//!
//! Parsing is line by line. Two entry points share the same grammar:
//!
//! - [`parse_scene`] is lenient: it stops at the first malformed line and
//!   returns everything parsed before it. A primitive whose line is
//!   malformed is dropped entirely.
//! - [`parse_scene_strict`] returns the first malformed line as an error.

use std::str::SplitWhitespace;

use glint_math::Vec3;
use thiserror::Error;

use crate::scene::{Material, Scene, Sphere, Triangle};

/// Errors that can occur while parsing a scene description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Line {line}: `{directive}` ended early, expected {expected}")]
    UnexpectedEndOfLine {
        line: usize,
        directive: &'static str,
        expected: &'static str,
    },

    #[error("Line {line}: expected `{expected}`, found `{found}`")]
    UnexpectedKeyword {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("Line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },
}

impl ParseError {
    /// The 1-based line number the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedEndOfLine { line, .. }
            | ParseError::UnexpectedKeyword { line, .. }
            | ParseError::InvalidNumber { line, .. } => *line,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse a scene description, keeping everything before the first malformed line.
///
/// The stop is reported through `log::warn!`; the caller always gets a scene
/// (possibly empty, which renders as solid background).
pub fn parse_scene(content: &str) -> Scene {
    let mut parser = SceneParser::new(content);
    match parser.parse() {
        Ok(()) => {}
        Err(e) => log::warn!("Stopped parsing scene: {}", e),
    }
    parser.finish()
}

/// Parse a scene description, failing on the first malformed line.
pub fn parse_scene_strict(content: &str) -> ParseResult<Scene> {
    let mut parser = SceneParser::new(content);
    parser.parse()?;
    Ok(parser.finish())
}

/// Scene description parser.
///
/// Holds the scene under construction so a failed parse still yields the
/// directives that came before the failure.
pub struct SceneParser<'a> {
    content: &'a str,
    scene: Scene,
}

impl<'a> SceneParser<'a> {
    /// Create a new parser from file contents.
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            scene: Scene::new(),
        }
    }

    /// Parse every line, stopping at the first malformed one.
    pub fn parse(&mut self) -> ParseResult<()> {
        let content = self.content;
        for (index, line) in content.lines().enumerate() {
            self.parse_line(index + 1, line)?;
        }

        log::debug!(
            "Parsed {} spheres and {} triangles",
            self.scene.sphere_count(),
            self.scene.triangle_count()
        );
        Ok(())
    }

    /// Consume the parser and return the scene built so far.
    pub fn finish(self) -> Scene {
        self.scene
    }

    /// Parse a single directive line.
    fn parse_line(&mut self, line_num: usize, line: &str) -> ParseResult<()> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let mut tokens = Tokens::new(line_num, trimmed);
        let Some(directive) = tokens.next_word() else {
            return Ok(());
        };

        let info = &mut self.scene.info;
        match directive {
            "FieldOfView" => info.field_of_view = tokens.number("FieldOfView")?,
            "CameraLookAt" => info.camera_look_at = tokens.vec3("CameraLookAt")?,
            "CameraLookFrom" => info.camera_look_from = tokens.vec3("CameraLookFrom")?,
            "CameraLookUp" => info.camera_look_up = tokens.vec3("CameraLookUp")?,
            "DirectionToLight" => {
                let direction = tokens.vec3("DirectionToLight")?;
                tokens.keyword("DirectionToLight", "LightColor")?;
                let color = tokens.vec3("DirectionToLight")?;
                info.direction_to_light = direction;
                info.light_color = color;
            }
            "AmbientLight" => info.ambient_light = tokens.vec3("AmbientLight")?,
            "BackgroundColor" => info.background_color = tokens.vec3("BackgroundColor")?,
            "Sphere" => {
                let sphere = parse_sphere(&mut tokens)?;
                self.scene.add_sphere(sphere);
            }
            "Triangle" => {
                let triangle = parse_triangle(&mut tokens)?;
                self.scene.add_triangle(triangle);
            }
            other => {
                log::warn!("Line {}: skipping unknown directive `{}`", line_num, other);
            }
        }

        Ok(())
    }
}

/// `Sphere Center x y z Radius r Material ...`
fn parse_sphere(tokens: &mut Tokens<'_>) -> ParseResult<Sphere> {
    const DIRECTIVE: &str = "Sphere";

    tokens.keyword(DIRECTIVE, "Center")?;
    let center = tokens.vec3(DIRECTIVE)?;
    tokens.keyword(DIRECTIVE, "Radius")?;
    let radius = tokens.number(DIRECTIVE)?;
    if radius < 0.0 {
        log::warn!(
            "Line {}: negative sphere radius {}, using {}",
            tokens.line,
            radius,
            radius.abs()
        );
    }
    let material = parse_material(DIRECTIVE, tokens)?;

    let mut sphere = Sphere::new(center, radius, material);

    // Optional reserved properties, in any order
    while let Some(word) = tokens.next_word() {
        match word {
            "Reflective" => sphere = sphere.with_reflective(tokens.vec3(DIRECTIVE)?),
            "Transparency" => sphere = sphere.with_transparency(tokens.number(DIRECTIVE)?),
            other => {
                log::debug!(
                    "Line {}: ignoring trailing `{}` after sphere",
                    tokens.line,
                    other
                );
                break;
            }
        }
    }

    Ok(sphere)
}

/// `Triangle x y z x y z x y z Material ...`
fn parse_triangle(tokens: &mut Tokens<'_>) -> ParseResult<Triangle> {
    const DIRECTIVE: &str = "Triangle";

    let p1 = tokens.vec3(DIRECTIVE)?;
    let p2 = tokens.vec3(DIRECTIVE)?;
    let p3 = tokens.vec3(DIRECTIVE)?;
    let material = parse_material(DIRECTIVE, tokens)?;

    let triangle = Triangle::new(p1, p2, p3, material);
    if triangle.is_degenerate() {
        log::warn!("Line {}: triangle has zero area", tokens.line);
    }
    Ok(triangle)
}

/// `Material Diffuse r g b SpecularHighlight r g b PhongConstant p`
fn parse_material(directive: &'static str, tokens: &mut Tokens<'_>) -> ParseResult<Material> {
    tokens.keyword(directive, "Material")?;
    tokens.keyword(directive, "Diffuse")?;
    let diffuse = tokens.vec3(directive)?;
    tokens.keyword(directive, "SpecularHighlight")?;
    let specular_highlight = tokens.vec3(directive)?;
    tokens.keyword(directive, "PhongConstant")?;
    let phong_constant = tokens.number(directive)?;

    Ok(Material::new(diffuse, specular_highlight, phong_constant))
}

/// Whitespace tokenizer for one line that reports errors with the line number.
struct Tokens<'a> {
    line: usize,
    words: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: usize, text: &'a str) -> Self {
        Self {
            line,
            words: text.split_whitespace(),
        }
    }

    fn next_word(&mut self) -> Option<&'a str> {
        self.words.next()
    }

    fn require(&mut self, directive: &'static str, expected: &'static str) -> ParseResult<&'a str> {
        self.words.next().ok_or(ParseError::UnexpectedEndOfLine {
            line: self.line,
            directive,
            expected,
        })
    }

    fn keyword(&mut self, directive: &'static str, expected: &'static str) -> ParseResult<()> {
        let word = self.require(directive, expected)?;
        if word == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedKeyword {
                line: self.line,
                expected,
                found: word.to_string(),
            })
        }
    }

    fn number(&mut self, directive: &'static str) -> ParseResult<f32> {
        let token = self.require(directive, "a number")?;
        token.parse::<f32>().map_err(|_| ParseError::InvalidNumber {
            line: self.line,
            token: token.to_string(),
        })
    }

    fn vec3(&mut self, directive: &'static str) -> ParseResult<Vec3> {
        let x = self.number(directive)?;
        let y = self.number(directive)?;
        let z = self.number(directive)?;
        Ok(Vec3::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Color;

    const SCENE: &str = "\
CameraLookAt 0 0 0
CameraLookFrom 0 0 1
CameraLookUp 0 1 0
FieldOfView 28
DirectionToLight 0.0 1.0 0.0 LightColor 1.0 1.0 1.0
AmbientLight 0.1 0.1 0.1
BackgroundColor 0.2 0.2 0.2

# white sphere
Sphere Center 0 0 0 Radius 0.4 Material Diffuse 1.0 1.0 1.0 SpecularHighlight 1.0 1.0 1.0 PhongConstant 16
Triangle 0 -0.7 -0.5 1 0.4 -1 0 -0.7 -1.5 Material Diffuse 0.0 0.0 1.0 SpecularHighlight 1.0 1.0 1.0 PhongConstant 4
";

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_parse_full_scene() {
        init_logging();
        let scene = parse_scene_strict(SCENE).expect("scene should parse");

        assert_eq!(scene.info.camera_look_at, Vec3::ZERO);
        assert_eq!(scene.info.camera_look_from, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(scene.info.camera_look_up, Vec3::Y);
        assert_eq!(scene.info.field_of_view, 28.0);
        assert_eq!(scene.info.direction_to_light, Vec3::Y);
        assert_eq!(scene.info.light_color, Color::ONE);
        assert_eq!(scene.info.ambient_light, Color::splat(0.1));
        assert_eq!(scene.info.background_color, Color::splat(0.2));

        assert_eq!(scene.sphere_count(), 1);
        let sphere = &scene.spheres[0];
        assert_eq!(sphere.center(), Vec3::ZERO);
        assert_eq!(sphere.radius(), 0.4);
        assert_eq!(sphere.material().phong_constant, 16.0);

        assert_eq!(scene.triangle_count(), 1);
        let tri = &scene.triangles[0];
        assert_eq!(
            tri.vertices(),
            [
                Vec3::new(0.0, -0.7, -0.5),
                Vec3::new(1.0, 0.4, -1.0),
                Vec3::new(0.0, -0.7, -1.5),
            ]
        );
        assert_eq!(tri.material().diffuse, Color::new(0.0, 0.0, 1.0));
        assert_eq!(tri.material().phong_constant, 4.0);
    }

    #[test]
    fn test_sphere_optional_properties() {
        let scene = parse_scene_strict(
            "Sphere Center 1 2 3 Radius 1 Material Diffuse 1 0 0 SpecularHighlight 1 1 1 PhongConstant 8 Reflective 0.5 0.5 0.5 Transparency 0.25",
        )
        .expect("sphere should parse");

        let sphere = &scene.spheres[0];
        assert_eq!(sphere.reflective, Color::splat(0.5));
        assert_eq!(sphere.transparency, Some(0.25));
    }

    #[test]
    fn test_negative_radius_keeps_sphere() {
        init_logging();
        let scene = parse_scene_strict(
            "Sphere Center 0 0 -2 Radius -0.5 Material Diffuse 1 0 0 SpecularHighlight 0 0 0 PhongConstant 1",
        )
        .expect("negative radius is not a parse error");

        assert_eq!(scene.sphere_count(), 1);
        assert_eq!(scene.spheres[0].radius(), 0.5);
    }

    #[test]
    fn test_lenient_parse_stops_at_malformed_line() {
        init_logging();
        let content = "\
FieldOfView 45
Sphere Center 0 0 0 Radius 1 Material Diffuse 1 0 0 SpecularHighlight 1 1 1 PhongConstant 8
Sphere Center 0 0 0 Radius oops
BackgroundColor 1 1 1
";
        let scene = parse_scene(content);

        assert_eq!(scene.info.field_of_view, 45.0);
        // The malformed sphere is dropped and nothing after it is read
        assert_eq!(scene.sphere_count(), 1);
        assert_eq!(scene.info.background_color, Color::ZERO);
    }

    #[test]
    fn test_strict_parse_reports_line() {
        let content = "FieldOfView 45\nAmbientLight 0.1 0.1\n";
        let err = parse_scene_strict(content).unwrap_err();

        assert_eq!(err.line(), 2);
        assert!(matches!(
            err,
            ParseError::UnexpectedEndOfLine {
                directive: "AmbientLight",
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_keyword_is_malformed() {
        let err = parse_scene_strict("DirectionToLight 0 1 0 LightColour 1 1 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedKeyword {
                line: 1,
                expected: "LightColor",
                found: "LightColour".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_scene_strict("FieldOfView wide").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                line: 1,
                token: "wide".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_directive_is_skipped() {
        init_logging();
        let scene = parse_scene_strict("Fog 1 2 3\nFieldOfView 30\n").expect("should parse");
        assert_eq!(scene.info.field_of_view, 30.0);
    }

    #[test]
    fn test_empty_input_gives_empty_scene() {
        let scene = parse_scene("");
        assert!(scene.is_empty());
        assert_eq!(scene.info.field_of_view, 45.0);
    }

    #[test]
    fn test_scientific_notation() {
        let scene = parse_scene_strict("AmbientLight 1e-1 2.5E-1 0").expect("should parse");
        assert_eq!(scene.info.ambient_light, Color::new(0.1, 0.25, 0.0));
    }
}
