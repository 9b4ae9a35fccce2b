use std::time::Duration;

use sky_raid::entities::*;

#[test]
fn status_clone_and_eq() {
    // GameStatus derives PartialEq — equality comparisons must work
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::Running, GameStatus::PlayerHit);
    assert_ne!(GameStatus::PlayerHit, GameStatus::TimeExpired);

    // Clone must produce an equal value
    let status = GameStatus::TimeExpired;
    assert_eq!(status.clone(), GameStatus::TimeExpired);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            x: 375.0,
            y: 540.0,
            dx: 0.0,
        },
        bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        enemies: Vec::new(),
        kills: 0,
        status: GameStatus::Running,
        next_spawn: Duration::from_secs(2),
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.kills = 999;
    cloned.enemies.push(Enemy {
        x: 5.0,
        y: 5.0,
        next_fire: Duration::from_secs(5),
    });
    cloned.enemy_bullets.push(Bullet { x: 1.0, y: 1.0 });

    assert_eq!(original.player.x, 375.0);
    assert_eq!(original.kills, 0);
    assert!(original.enemies.is_empty());
    assert!(original.enemy_bullets.is_empty());
}
