use glam::Vec3;

/// Ambient lighting and reflection parameters applied to every renderable
/// submitted while the environment is bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    ambient_color: Vec3,
    ambient_intensity: f32,
    reflection_intensity: f32,
}

impl Environment {
    /// Creates a new environment with the provided ambient color.
    pub fn new(ambient_color: Vec3) -> Self {
        Self {
            ambient_color,
            ambient_intensity: 1.0,
            reflection_intensity: 0.0,
        }
    }

    pub fn ambient_color(&self) -> Vec3 {
        self.ambient_color
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ambient_intensity
    }

    pub fn reflection_intensity(&self) -> f32 {
        self.reflection_intensity
    }

    /// Ambient color scaled by its intensity, as shaders consume it.
    pub fn ambient(&self) -> Vec3 {
        self.ambient_color * self.ambient_intensity
    }

    pub fn set_ambient_color(&mut self, color: Vec3) {
        self.ambient_color = color;
    }

    pub fn with_ambient_intensity(mut self, intensity: f32) -> Self {
        self.ambient_intensity = intensity.max(0.0);
        self
    }

    /// Negative values are clamped to zero, values above one to one.
    pub fn with_reflection_intensity(mut self, intensity: f32) -> Self {
        self.reflection_intensity = intensity.clamp(0.0, 1.0);
        self
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Vec3::new(0.231, 0.269, 0.338)).with_ambient_intensity(0.3)
    }
}
