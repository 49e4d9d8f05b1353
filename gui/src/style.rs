use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Secondary button framed by a thick border a few shades darker than its
/// fill, in the spirit of a grooved relief.
pub fn grooved(theme: &Theme, status: button::Status, border_width: f32) -> button::Style {
    let base = button::secondary(theme, status);
    let fill = match base.background {
        Some(Background::Color(color)) => color,
        _ => theme.palette().background,
    };

    button::Style {
        border: Border {
            color: darken(fill, 0.35),
            width: border_width,
            radius: 0.0.into(),
        },
        ..base
    }
}

fn darken(color: Color, amount: f32) -> Color {
    let keep = 1.0 - amount;
    Color {
        r: color.r * keep,
        g: color.g * keep,
        b: color.b * keep,
        a: color.a,
    }
}
