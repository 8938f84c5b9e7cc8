use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Material {
    pub base_color: [u8; 4],
    pub flags: MaterialFlags,
    pub base_color_texture: u32,
    pub metallic_factor: u8,  // 0-255 -> 0.0-1.0
    pub roughness_factor: u8, // 0-255 -> 0.0-1.0
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MaterialFlags: u32 {
        const USE_BASE_COLOR_TEXTURE = 1 << 0;
        const ALPHA_BLEND = 1 << 1;
        const DOUBLE_SIDED = 1 << 2;
        const UNLIT = 1 << 3;
    }
}

impl Material {
    pub fn new(color: [u8; 4]) -> Self {
        Self {
            base_color: color,
            flags: MaterialFlags::empty(),
            base_color_texture: 0,
            metallic_factor: 0,
            roughness_factor: 255, // Default to rough
        }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new([r, g, b, 255])
    }

    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic_factor = (metallic.clamp(0.0, 1.0) * 255.0) as u8;
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness_factor = (roughness.clamp(0.0, 1.0) * 255.0) as u8;
        self
    }

    pub fn with_alpha(mut self) -> Self {
        self.flags |= MaterialFlags::ALPHA_BLEND;
        self
    }

    pub fn with_double_sided(mut self) -> Self {
        self.flags |= MaterialFlags::DOUBLE_SIDED;
        self
    }

    pub fn unlit(mut self) -> Self {
        self.flags |= MaterialFlags::UNLIT;
        self
    }

    pub fn with_texture(mut self, index: u32) -> Self {
        self.base_color_texture = index;
        self.flags |= MaterialFlags::USE_BASE_COLOR_TEXTURE;
        self
    }

    pub fn color_f32(&self) -> [f32; 4] {
        self.base_color.map(|c| c as f32 / 255.0)
    }

    pub fn is_unlit(&self) -> bool {
        self.flags.contains(MaterialFlags::UNLIT)
    }

    pub fn requires_alpha_blend(&self) -> bool {
        self.flags.contains(MaterialFlags::ALPHA_BLEND)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::white()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_flags() {
        let m = Material::rgb(10, 20, 30).with_alpha().unlit().with_texture(4);
        assert!(m.requires_alpha_blend());
        assert!(m.is_unlit());
        assert!(m.flags.contains(MaterialFlags::USE_BASE_COLOR_TEXTURE));
        assert!(!m.flags.contains(MaterialFlags::DOUBLE_SIDED));
        assert_eq!(m.base_color_texture, 4);
    }

    #[test]
    fn factors_are_quantized() {
        let m = Material::white().with_metallic(1.5).with_roughness(0.0);
        assert_eq!(m.metallic_factor, 255);
        assert_eq!(m.roughness_factor, 0);
        assert_eq!(m.color_f32(), [1.0; 4]);
    }
}
