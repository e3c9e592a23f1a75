//! Modal animation effects for TUI overlays.

use ratatui::layout::Rect;

use roster_engine::ui::{ModalEffect, ModalEffectKind};

/// Apply a modal effect to transform the base rectangle.
#[must_use]
pub fn apply_modal_effect(effect: &ModalEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        ModalEffectKind::PopScale => {
            let t = ease_out_cubic(effect.progress());
            let scale = 0.6 + 0.4 * t;
            scale_rect(base, scale)
        }
        ModalEffectKind::Shake => {
            let t = effect.progress().clamp(0.0, 1.0);
            let decay = 1.0 - t;
            let oscillations = 4.0;
            let amplitude = 3.0;
            let offset = (f32::sin(t * std::f32::consts::TAU * oscillations) * amplitude * decay)
                .round() as i32;
            let viewport_left = i32::from(viewport.x);
            let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
            let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
            let x = (i32::from(base.x) + offset).clamp(viewport_left, max_x) as u16;
            Rect { x, ..base }
        }
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    Rect {
        x: base.x + (base.width.saturating_sub(width) / 2),
        y: base.y + (base.height.saturating_sub(height) / 2),
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };
    const BASE: Rect = Rect {
        x: 20,
        y: 6,
        width: 40,
        height: 12,
    };

    #[test]
    fn pop_scale_starts_small_and_ends_full_size() {
        let mut effect = ModalEffect::pop_scale(Duration::from_millis(100));
        let start = apply_modal_effect(&effect, BASE, VIEWPORT);
        assert!(start.width < BASE.width);
        assert!(start.height < BASE.height);

        effect.advance(Duration::from_millis(200));
        assert_eq!(apply_modal_effect(&effect, BASE, VIEWPORT), BASE);
    }

    #[test]
    fn shake_stays_inside_viewport() {
        let mut effect = ModalEffect::shake(Duration::from_millis(100));
        let edge = Rect { x: 0, ..BASE };
        for _ in 0..10 {
            let rect = apply_modal_effect(&effect, edge, VIEWPORT);
            assert!(rect.x + rect.width <= VIEWPORT.width);
            assert_eq!(rect.y, edge.y);
            effect.advance(Duration::from_millis(10));
        }
    }
}
