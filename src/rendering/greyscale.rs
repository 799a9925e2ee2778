//! Full-frame desaturation used for the game-over screen.

use macroquad::prelude::*;
use rayon::prelude::*;

use super::RenderError;

/// Rec. 601 luma weights
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32).round() as u8
}

/// Replace the colour channels of every RGBA pixel with its luma.
/// Alpha is left alone, as is a trailing partial pixel.
pub fn desaturate(rgba: &mut [u8]) {
    rgba.par_chunks_mut(4).for_each(|pixel| {
        if let [r, g, b, _] = pixel {
            let y = luma(*r, *g, *b);
            *r = y;
            *g = y;
            *b = y;
        }
    });
}

/// Grab what has been drawn so far this frame, grey it out and draw it back
pub fn desaturate_screen() -> Result<(), RenderError> {
    let mut frame = get_screen_data();
    if frame.bytes.is_empty() {
        return Err(RenderError::EmptyCapture);
    }
    desaturate(&mut frame.bytes);

    let texture = Texture2D::from_image(&frame);
    draw_texture_ex(
        &texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(screen_width(), screen_height())),
            // captures come back bottom-up
            flip_y: true,
            ..Default::default()
        },
    );
    Ok(())
}
