//! Decorative particle field.
//!
//! `ParticleOptions` is the configuration handed to the engine, and
//! `ParticleField` is the engine itself. Drawing goes through
//! [`ParticleRenderer`] so the field never touches a canvas directly.

use crate::theme::Theme;
use serde::Serialize;

const LIGHT_PARTICLE_COLOR: &str = "#000000";
const DARK_PARTICLE_COLOR: &str = "#ffffff";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleOptions {
    pub particles: ParticleSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleSettings {
    pub number: NumberSettings,
    pub color: ColorValue,
    pub shape: ShapeSettings,
    pub opacity: RandomizedValue,
    pub size: RandomizedValue,
    pub line_linked: LinkSettings,
    #[serde(rename = "move")]
    pub motion: MoveSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NumberSettings {
    pub value: usize,
    pub density: DensitySettings,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DensitySettings {
    pub enable: bool,
    pub value_area: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorValue {
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeSettings {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RandomizedValue {
    pub value: f64,
    pub random: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkSettings {
    pub enable: bool,
    pub distance: f64,
    pub color: &'static str,
    pub opacity: f64,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MoveSettings {
    pub enable: bool,
    pub speed: f64,
    pub direction: &'static str,
    pub random: bool,
    pub straight: bool,
    pub out_mode: &'static str,
    pub bounce: bool,
}

impl ParticleOptions {
    pub fn for_theme(theme: Theme, count: usize) -> Self {
        let color = if theme.is_dark() {
            DARK_PARTICLE_COLOR
        } else {
            LIGHT_PARTICLE_COLOR
        };

        Self {
            particles: ParticleSettings {
                number: NumberSettings {
                    value: count,
                    density: DensitySettings {
                        enable: true,
                        value_area: 800.0,
                    },
                },
                color: ColorValue { value: color },
                shape: ShapeSettings { kind: "circle" },
                opacity: RandomizedValue {
                    value: 0.5,
                    random: false,
                },
                size: RandomizedValue {
                    value: 3.0,
                    random: true,
                },
                line_linked: LinkSettings {
                    enable: true,
                    distance: 150.0,
                    color,
                    opacity: 0.4,
                    width: 1.0,
                },
                motion: MoveSettings {
                    enable: true,
                    speed: 6.0,
                    direction: "none",
                    random: false,
                    straight: false,
                    out_mode: "out",
                    bounce: false,
                },
            },
        }
    }

    /// Number of particles for a `width` x `height` area, scaled by density.
    pub fn spawn_count(&self, width: f64, height: f64) -> usize {
        let number = &self.particles.number;
        if !number.density.enable || number.density.value_area <= 0.0 {
            return number.value;
        }

        let area = (width.max(0.0) * height.max(0.0)) / 1_000.0;
        (number.value as f64 * area / number.density.value_area).round() as usize
    }
}

/// Backing bitmap size for a viewport of `width` x `height` CSS pixels.
pub fn canvas_extent(width: f64, height: f64) -> (u32, u32) {
    let side = |value: f64| value.round().max(1.0) as u32;
    (side(width), side(height))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub opacity: f64,
}

/// Visual-out seam for the particle engine.
pub trait ParticleRenderer {
    fn clear(&mut self, width: f64, height: f64);

    fn circle(&mut self, x: f64, y: f64, radius: f64, color: &str, opacity: f64);

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, opacity: f64, width: f64);
}

pub struct ParticleField {
    options: ParticleOptions,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn spawn(options: ParticleOptions, width: f64, height: f64, rng: &mut fastrand::Rng) -> Self {
        let count = options.spawn_count(width, height);
        let size = &options.particles.size;
        let particles = (0..count)
            .map(|_| {
                let radius = if size.random {
                    (rng.f64() * size.value).max(0.5)
                } else {
                    size.value
                };
                Particle {
                    x: rng.f64() * width,
                    y: rng.f64() * height,
                    vx: rng.f64() - 0.5,
                    vy: rng.f64() - 0.5,
                    radius,
                }
            })
            .collect();

        Self {
            options,
            width,
            height,
            particles,
        }
    }

    pub fn options(&self) -> &ParticleOptions {
        &self.options
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advances by `frames` nominal 60Hz frames.
    pub fn step(&mut self, frames: f64) {
        let motion = &self.options.particles.motion;
        if !motion.enable {
            return;
        }

        let distance = motion.speed / 2.0 * frames;
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.x += particle.vx * distance;
            particle.y += particle.vy * distance;

            let r = particle.radius;
            if particle.x - r > width {
                particle.x = -r;
            } else if particle.x + r < 0.0 {
                particle.x = width + r;
            }
            if particle.y - r > height {
                particle.y = -r;
            } else if particle.y + r < 0.0 {
                particle.y = height + r;
            }
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let settings = &self.options.particles.line_linked;
        if !settings.enable || settings.distance <= 0.0 {
            return Vec::new();
        }

        let mut links = Vec::new();
        for (from, a) in self.particles.iter().enumerate() {
            for (offset, b) in self.particles[from + 1..].iter().enumerate() {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance <= settings.distance {
                    links.push(Link {
                        from,
                        to: from + 1 + offset,
                        opacity: settings.opacity * (1.0 - distance / settings.distance),
                    });
                }
            }
        }
        links
    }

    pub fn render(&self, renderer: &mut impl ParticleRenderer) {
        let settings = &self.options.particles;
        renderer.clear(self.width, self.height);

        for link in self.links() {
            let a = self.particles[link.from];
            let b = self.particles[link.to];
            renderer.line(
                (a.x, a.y),
                (b.x, b.y),
                settings.line_linked.color,
                link.opacity,
                settings.line_linked.width,
            );
        }

        for particle in &self.particles {
            renderer.circle(
                particle.x,
                particle.y,
                particle.radius,
                settings.color.value,
                settings.opacity.value,
            );
        }
    }

    #[cfg(test)]
    fn with_particles(options: ParticleOptions, width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            options,
            width,
            height,
            particles,
        }
    }
}
