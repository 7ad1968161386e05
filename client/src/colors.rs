use crossterm::style::Color;

use snake_common::games::snake::{Rgb, TextColor};

pub fn to_terminal_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Terminals have no alpha, so translucent text is pre-blended over the
/// color it is drawn on.
pub fn blend_over(color: TextColor, background: Rgb) -> Rgb {
    let alpha = color.alpha.clamp(0.0, 1.0);
    let mix = |fg: u8, bg: u8| -> u8 {
        (fg as f32 * alpha + bg as f32 * (1.0 - alpha)).round() as u8
    };
    Rgb::new(
        mix(color.rgb.r, background.r),
        mix(color.rgb.g, background.g),
        mix(color.rgb.b, background.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        let opaque = TextColor { rgb: Rgb::BLACK, alpha: 1.0 };
        assert_eq!(blend_over(opaque, Rgb::WHITE), Rgb::BLACK);

        let transparent = TextColor { rgb: Rgb::BLACK, alpha: 0.0 };
        assert_eq!(blend_over(transparent, Rgb::LIGHT_GREY), Rgb::LIGHT_GREY);
    }

    #[test]
    fn test_score_color_over_grey() {
        let faint = TextColor { rgb: Rgb::BLACK, alpha: 0.2 };
        assert_eq!(blend_over(faint, Rgb::LIGHT_GREY), Rgb::new(169, 169, 169));
    }

    #[test]
    fn test_to_terminal_color() {
        assert_eq!(
            to_terminal_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
