use std::time::Duration;

use proptest::prelude::*;

use sky_raid::compute::{boxes_overlap, init_state, tick};
use sky_raid::consts::BULLET_SPEED;
use sky_raid::entities::Bullet;

proptest! {
    // Boxes that share an edge exactly must never collide, on any side.
    #[test]
    fn touching_boxes_never_collide(
        x in 0.0f32..750.0,
        y in 0.0f32..550.0,
        w in 1.0f32..60.0,
        h in 1.0f32..60.0,
    ) {
        prop_assert!(!boxes_overlap(x, y, w, h, x + w, y, w, h));
        prop_assert!(!boxes_overlap(x + w, y, w, h, x, y, w, h));
        prop_assert!(!boxes_overlap(x, y, w, h, x, y + h, w, h));
        prop_assert!(!boxes_overlap(x, y + h, w, h, x, y, w, h));
    }

    #[test]
    fn overlap_is_symmetric(
        ax in 0.0f32..800.0, ay in 0.0f32..600.0,
        aw in 1.0f32..60.0, ah in 1.0f32..60.0,
        bx in 0.0f32..800.0, by in 0.0f32..600.0,
        bw in 1.0f32..60.0, bh in 1.0f32..60.0,
    ) {
        prop_assert_eq!(
            boxes_overlap(ax, ay, aw, ah, bx, by, bw, bh),
            boxes_overlap(bx, by, bw, bh, ax, ay, aw, ah)
        );
    }

    // A lone player bullet descends the screen linearly: after n ticks its
    // y equals the starting y minus speed × n, for as long as it stays in
    // the viewport.
    #[test]
    fn player_bullet_position_is_linear_in_ticks(
        y0 in 560.0f32..600.0,
        n in 0usize..=80,
    ) {
        let mut state = init_state();
        state.bullets.push(Bullet { x: 400.0, y: y0 });
        let now = Duration::from_secs(1);
        for _ in 0..n {
            state = tick(&state, now);
        }
        prop_assert_eq!(state.bullets.len(), 1);
        let expected = y0 - BULLET_SPEED * n as f32;
        prop_assert!((state.bullets[0].y - expected).abs() < 1e-3);
    }
}
