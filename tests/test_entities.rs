use platform_shooter::config::GameConfig;
use platform_shooter::enemy::Enemy;
use platform_shooter::entities::*;
use platform_shooter::player::Player;

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(380, 277, 40, 45);
    assert_eq!(r.left(), 380);
    assert_eq!(r.right(), 420);
    assert_eq!(r.top(), 277);
    assert_eq!(r.bottom(), 322);
    assert_eq!(r.center_x(), 400);
    assert_eq!(r.center_y(), 299);
}

#[test]
fn rect_from_center_uses_floor_half_size() {
    let r = Rect::from_center(400, 299, 10, 5);
    assert_eq!((r.x, r.y), (395, 297));
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
}

#[test]
fn empty_rect_never_intersects() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(5, 5, 0, 3)));
}

#[test]
fn setters_move_the_rect_not_resize_it() {
    let mut r = Rect::new(0, 0, 35, 45);
    r.set_right(135);
    assert_eq!((r.x, r.w), (100, 35));
    r.set_bottom(550);
    assert_eq!((r.y, r.h), (505, 45));
}

#[test]
fn round_px_ties_to_even() {
    assert_eq!(round_px(2.5), 2);
    assert_eq!(round_px(3.5), 4);
    assert_eq!(round_px(277.8), 278);
    assert_eq!(round_px(-0.4), 0);
}

#[test]
fn facing_sign() {
    assert_eq!(Facing::Left.sign(), -1.0);
    assert_eq!(Facing::Right.sign(), 1.0);
}

#[test]
fn only_play_phases_are_simulated() {
    assert!(GamePhase::Playing.is_simulated());
    assert!(GamePhase::PlayerDying.is_simulated());
    assert!(!GamePhase::Menu.is_simulated());
    assert!(!GamePhase::GameOver.is_simulated());
    assert!(!GamePhase::Victory.is_simulated());
}

#[test]
fn world_counts_living_enemies() {
    let cfg = GameConfig::default();
    let mut dead = Enemy::new(0, 0, &cfg, 0);
    dead.take_damage(4);
    let world = World {
        player: Player::new(0, 0, &cfg, 0),
        enemies: vec![Enemy::new(100, 0, &cfg, 0), dead],
        platforms: Vec::new(),
        projectiles: Vec::new(),
    };
    assert_eq!(world.living_enemies(), 1);
}
