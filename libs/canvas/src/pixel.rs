use bytemuck::{Pod, Zeroable};

pub trait Pixel: Pod + Sync + Send + Copy {
    type DATA: Pod + Default + Copy + Sync + Send;
    const CHANNELS: usize;

    fn from_slice(slice: &[Self::DATA]) -> &Self {
        assert_eq!(slice.len(), Self::CHANNELS);
        &bytemuck::cast_slice::<Self::DATA, Self>(slice)[0]
    }

    fn from_slice_mut(slice: &mut [Self::DATA]) -> &mut Self {
        assert_eq!(slice.len(), Self::CHANNELS);
        &mut bytemuck::cast_slice_mut::<Self::DATA, Self>(slice)[0]
    }
}

pub trait Compositable {
    /// Composites `fg_rgba` over `self` with src-over alpha blending.
    fn blend(self, fg_rgba: Self) -> Self;
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_rgb_hex(rgb: u32) -> Self {
        Self([
            (rgb >> 16 & 0xFF) as u8,
            (rgb >> 8 & 0xFF) as u8,
            (rgb & 0xFF) as u8,
            0xFF,
        ])
    }

    pub const fn alpha(self) -> u8 {
        self.0[3]
    }
}

impl Pixel for Rgba8 {
    type DATA = u8;
    const CHANNELS: usize = 4;
}

impl Compositable for Rgba8 {
    fn blend(self, fg_rgba: Self) -> Self {
        if fg_rgba.alpha() == u8::MAX {
            return fg_rgba;
        }

        // http://stackoverflow.com/questions/7438263/alpha-compositing-algorithm-blend-modes#answer-11163848
        let max_t = f32::from(u8::MAX);
        let [bg @ .., bg_a] = self.0.map(|v| f32::from(v) / max_t);
        let [fg @ .., fg_a] = fg_rgba.0.map(|v| f32::from(v) / max_t);

        let alpha_final = bg_a + fg_a - bg_a * fg_a;
        if alpha_final == 0.0 {
            return self;
        }

        // Premultiply, then src-over
        let bga = bg.map(|v| v * bg_a);
        let fga = fg.map(|v| v * fg_a);
        let outa = [0, 1, 2].map(|i| fga[i] + bga[i] * (1.0 - fg_a));

        let out = outa.map(|v| v / alpha_final);

        Self([
            (max_t * out[0]).round() as u8,
            (max_t * out[1]).round() as u8,
            (max_t * out[2]).round() as u8,
            (max_t * alpha_final).round() as u8,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_foreground_replaces_background() {
        let bg = Rgba8([10, 20, 30, 255]);
        let fg = Rgba8::from_rgb_hex(0xFF6F00);
        assert_eq!(bg.blend(fg), fg);
        assert_eq!(Rgba8::TRANSPARENT.blend(fg), fg);
    }

    #[test]
    fn transparent_foreground_keeps_background() {
        let bg = Rgba8([10, 20, 30, 255]);
        assert_eq!(bg.blend(Rgba8::TRANSPARENT), bg);
        assert_eq!(Rgba8::TRANSPARENT.blend(Rgba8::TRANSPARENT), Rgba8::TRANSPARENT);
    }

    #[test]
    fn translucent_foreground_mixes_channels() {
        let bg = Rgba8([0, 0, 0, 255]);
        let fg = Rgba8([255, 255, 255, 128]);
        let out = bg.blend(fg);
        assert_eq!(out.alpha(), 255);
        assert!((127..=128).contains(&out.0[0]));
    }

    #[test]
    fn hex_channels() {
        assert_eq!(Rgba8::from_rgb_hex(0x61CBF3), Rgba8([0x61, 0xCB, 0xF3, 0xFF]));
    }

    #[test]
    fn slice_casts_to_pixel() {
        let mut data = [1u8, 2, 3, 4];
        assert_eq!(*Rgba8::from_slice(&data), Rgba8([1, 2, 3, 4]));
        Rgba8::from_slice_mut(&mut data).0[3] = 9;
        assert_eq!(data, [1, 2, 3, 9]);
    }
}
