use platform_shooter::animation::{AnimationSet, Pose};
use platform_shooter::config::GameConfig;
use platform_shooter::entities::Facing;
use platform_shooter::input::{HeldKeys, InputEvent};
use platform_shooter::level::build_platforms;
use platform_shooter::player::{Lifecycle, Player};

const LEFT: HeldKeys = HeldKeys { left: true, right: false };
const RIGHT: HeldKeys = HeldKeys { left: false, right: true };
const BOTH: HeldKeys = HeldKeys { left: true, right: true };
const NONE: HeldKeys = HeldKeys { left: false, right: false };

fn cfg() -> GameConfig {
    GameConfig::default()
}

fn player() -> Player {
    Player::new(380, 277, &cfg(), 0)
}

// ── jump ──────────────────────────────────────────────────────────────────────

#[test]
fn jump_requires_ground() {
    let mut p = player();
    p.jump(&cfg());
    assert_eq!(p.body.vel_y, 0.0);
}

#[test]
fn jump_sets_impulse_once_until_landing() {
    let mut p = player();
    p.grounded = true;

    p.jump(&cfg());
    assert_eq!(p.body.vel_y, -15.0);
    assert!(!p.grounded);

    p.body.vel_y = -9.0;
    p.jump(&cfg());
    assert_eq!(p.body.vel_y, -9.0);
}

#[test]
fn player_lands_on_middle_platform() {
    let c = cfg();
    let platforms = build_platforms(&c);
    let mut p = player();
    let anims = AnimationSet::default();
    for t in 0..60 {
        p.update(&platforms, NONE, &anims, &c, t * 16);
    }
    assert!(p.grounded);
    assert_eq!(p.rect().bottom(), 430);
}

// ── horizontal movement ───────────────────────────────────────────────────────

#[test]
fn move_left_and_right() {
    let c = cfg();
    let mut p = player();
    p.move_horizontal(LEFT, &c);
    assert_eq!(p.body.pos.x, 375.0);
    assert_eq!(p.facing, Facing::Left);
    assert!(p.is_moving);

    p.move_horizontal(RIGHT, &c);
    assert_eq!(p.body.pos.x, 380.0);
    assert_eq!(p.facing, Facing::Right);
}

#[test]
fn left_wins_when_both_held() {
    let mut p = player();
    p.move_horizontal(BOTH, &cfg());
    assert_eq!(p.body.pos.x, 375.0);
    assert_eq!(p.facing, Facing::Left);
}

#[test]
fn no_direction_means_not_moving() {
    let mut p = player();
    p.move_horizontal(NONE, &cfg());
    assert_eq!(p.body.pos.x, 380.0);
    assert!(!p.is_moving);
}

#[test]
fn alive_player_is_clamped_to_screen() {
    let c = cfg();
    let anims = AnimationSet::default();

    let mut p = Player::new(2, 0, &c, 0);
    p.update(&[], LEFT, &anims, &c, 16);
    assert_eq!(p.body.pos.x, 0.0);
    assert_eq!(p.rect().x, 0);

    let mut p = Player::new(758, 0, &c, 0);
    p.update(&[], RIGHT, &anims, &c, 16);
    assert_eq!(p.body.pos.x, 760.0);
}

#[test]
fn dying_player_is_not_clamped() {
    let c = cfg();
    let mut p = player();
    p.body.pos.x = -20.0;
    p.die(&c, 0);
    p.update(&[], NONE, &AnimationSet::default(), &c, 16);
    assert_eq!(p.body.pos.x, -20.0);
    assert_eq!(p.rect().x, -20);
}

// ── input ─────────────────────────────────────────────────────────────────────

#[test]
fn shoot_spawns_centered_projectile_in_facing_direction() {
    let c = cfg();
    let mut p = player();

    let shot = p.handle_input(InputEvent::Shoot, &c).expect("shot");
    assert_eq!((shot.rect.x, shot.rect.y), (395, 297));
    assert_eq!(shot.vel_x, 10.0);

    p.facing = Facing::Left;
    let shot = p.shoot(&c);
    assert_eq!(shot.vel_x, -10.0);
}

#[test]
fn jump_event_jumps_and_returns_nothing() {
    let c = cfg();
    let mut p = player();
    p.grounded = true;
    assert!(p.handle_input(InputEvent::Jump, &c).is_none());
    assert_eq!(p.body.vel_y, -15.0);
}

#[test]
fn other_events_are_ignored() {
    let c = cfg();
    let mut p = player();
    assert!(p.handle_input(InputEvent::Confirm, &c).is_none());
    assert!(p.handle_input(InputEvent::Back, &c).is_none());
}

#[test]
fn dying_player_ignores_input() {
    let c = cfg();
    let mut p = player();
    p.grounded = true;
    p.die(&c, 0);
    let vel = p.body.vel_y;
    assert!(p.handle_input(InputEvent::Shoot, &c).is_none());
    assert!(p.handle_input(InputEvent::Jump, &c).is_none());
    assert_eq!(p.body.vel_y, vel);
}

// ── death ─────────────────────────────────────────────────────────────────────

#[test]
fn die_pops_upward_and_starts_dying() {
    let c = cfg();
    let mut p = player();
    p.die(&c, 500);
    assert_eq!(p.life, Lifecycle::Dying { finished: false });
    assert_eq!(p.body.vel_y, -7.5);
    assert_eq!(p.anim.frame, 0);
}

#[test]
fn die_is_idempotent() {
    let c = cfg();
    let mut p = player();
    p.die(&c, 0);
    p.body.vel_y = 3.0;
    p.die(&c, 100);
    assert_eq!(p.life, Lifecycle::Dying { finished: false });
    assert_eq!(p.body.vel_y, 3.0);
}

#[test]
fn death_animation_clamps_and_finishes() {
    let c = cfg();
    let anims = AnimationSet::new(4, 3);
    let mut p = player();
    p.die(&c, 0);

    p.update(&[], NONE, &anims, &c, 100);
    assert_eq!(p.anim.frame, 0);
    p.update(&[], NONE, &anims, &c, 151);
    assert_eq!(p.anim.frame, 1);
    p.update(&[], NONE, &anims, &c, 302);
    assert_eq!(p.anim.frame, 2);
    assert!(!p.death_finished());

    p.update(&[], NONE, &anims, &c, 453);
    assert_eq!(p.anim.frame, 2);
    assert!(p.death_finished());

    let frame = p.frame(&anims);
    assert_eq!(frame.pose, Pose::Death);
    assert_eq!(frame.index, 2);
}

#[test]
fn death_without_frames_finishes_on_first_interval() {
    let c = cfg();
    let anims = AnimationSet::new(0, 0);
    let mut p = player();
    p.die(&c, 0);
    p.update(&[], NONE, &anims, &c, 151);
    assert!(p.death_finished());
    assert_eq!(p.frame(&anims).index, 0);
}

// ── run animation ─────────────────────────────────────────────────────────────

#[test]
fn run_cycle_advances_only_while_moving() {
    let c = cfg();
    let anims = AnimationSet::new(4, 1);
    let mut p = player();

    p.update(&[], RIGHT, &anims, &c, 50);
    assert_eq!(p.anim.frame, 0);
    p.update(&[], RIGHT, &anims, &c, 91);
    assert_eq!(p.anim.frame, 1);
    assert_eq!(p.frame(&anims).pose, Pose::Run);

    p.update(&[], NONE, &anims, &c, 200);
    assert_eq!(p.anim.frame, 0);
    let frame = p.frame(&anims);
    assert_eq!(frame.pose, Pose::Idle);
    assert_eq!(frame.facing, Facing::Right);
}
