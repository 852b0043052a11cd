use std::collections::HashMap;
use std::path::Path;

use crossterm::style::Color;
use platform_shooter::animation::{FrameId, Pose};
use platform_shooter::assets::*;
use platform_shooter::config::AssetConfig;
use platform_shooter::entities::Facing;

/// In-memory sprite source keyed by sprite name.
#[derive(Default)]
struct MemorySource {
    sprites: HashMap<String, String>,
}

impl MemorySource {
    fn with(mut self, name: &str, text: &str) -> Self {
        self.sprites.insert(name.to_string(), text.to_string());
        self
    }
}

impl SpriteSource for MemorySource {
    fn load(&self, name: &str) -> Result<Sprite, AssetError> {
        match self.sprites.get(name) {
            Some(text) => Sprite::parse(name, text),
            None => Err(AssetError::NotFound(name.to_string())),
        }
    }
}

fn frame(pose: Pose, index: usize, facing: Facing) -> FrameId {
    FrameId { pose, index, facing }
}

// ── Sprite ────────────────────────────────────────────────────────────────────

#[test]
fn parse_pads_rows_and_drops_trailing_blank_lines() {
    let sprite = Sprite::parse("s", "ab\nabcd\n   \n").expect("parse");
    let Sprite::Glyphs(rows) = sprite else {
        panic!("expected glyphs");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!['a', 'b', ' ', ' ']);
    assert_eq!(rows[1].len(), 4);
}

#[test]
fn blank_sprite_is_an_error() {
    assert!(matches!(Sprite::parse("s", "  \n \n"), Err(AssetError::Empty(_))));
    assert!(matches!(Sprite::parse("s", ""), Err(AssetError::Empty(_))));
}

#[test]
fn mirroring_reverses_rows_and_flips_glyphs() {
    let sprite = Sprite::parse("s", " O>\n/| ").expect("parse");
    let Sprite::Glyphs(rows) = sprite.mirrored() else {
        panic!("expected glyphs");
    };
    assert_eq!(rows[0], vec!['<', 'O', ' ']);
    assert_eq!(rows[1], vec![' ', '|', '\\']);
}

#[test]
fn sampling_stretches_and_treats_space_as_transparent() {
    let sprite = Sprite::parse("s", "a b\ncde").expect("parse");
    // 3x2 art onto 6x2 cells: every glyph doubled horizontally
    assert_eq!(sprite.sample(0, 0, 6, 2), Some('a'));
    assert_eq!(sprite.sample(1, 0, 6, 2), Some('a'));
    assert_eq!(sprite.sample(2, 0, 6, 2), None);
    assert_eq!(sprite.sample(5, 1, 6, 2), Some('e'));
}

#[test]
fn placeholder_is_a_solid_block() {
    let sprite = Sprite::Placeholder(Color::Red);
    assert_eq!(sprite.sample(3, 1, 4, 2), Some('█'));
    assert_eq!(sprite.mirrored(), sprite);
}

// ── loading & fallback ────────────────────────────────────────────────────────

#[test]
fn missing_sprite_becomes_placeholder() {
    let source = MemorySource::default();
    let sprite = load_or_placeholder(&source, "john_stopped", Color::Blue);
    assert_eq!(sprite, Sprite::Placeholder(Color::Blue));
}

#[test]
fn manifest_declares_numbered_frames() {
    let config = AssetConfig::default();
    let player = SpriteManifest::player(&config);
    assert_eq!(player.idle, "john_stopped");
    assert_eq!(player.run, vec!["john_run1", "john_run2", "john_run3", "john_run4"]);
    assert_eq!(player.death.len(), 3);

    let zombie = SpriteManifest::zombie(&config);
    assert_eq!(zombie.run, vec!["zombie_walk1", "zombie_walk2"]);
    assert!(zombie.death.is_empty());
}

#[test]
fn empty_categories_fall_back_to_idle() {
    let source = MemorySource::default().with("zombie_idle", "Xx\n||");
    let manifest = SpriteManifest {
        idle: "zombie_idle".to_string(),
        run: Vec::new(),
        death: Vec::new(),
        fallback: Color::Red,
    };
    let sheet = SpriteSheet::load(&manifest, &source);
    let set = sheet.animation_set();
    assert_eq!(set.frame_count(Pose::Run), 1);
    assert_eq!(set.frame_count(Pose::Death), 1);

    let idle = sheet.sprite(frame(Pose::Idle, 0, Facing::Right)).clone();
    assert_eq!(sheet.sprite(frame(Pose::Run, 7, Facing::Right)), &idle);
    assert_eq!(sheet.sprite(frame(Pose::Death, 3, Facing::Right)), &idle);
}

#[test]
fn left_facing_frames_are_mirrored() {
    let source = MemorySource::default().with("idle", "a>");
    let manifest = SpriteManifest {
        idle: "idle".to_string(),
        run: Vec::new(),
        death: Vec::new(),
        fallback: Color::Blue,
    };
    let sheet = SpriteSheet::load(&manifest, &source);
    let right = sheet.sprite(frame(Pose::Idle, 0, Facing::Right));
    let left = sheet.sprite(frame(Pose::Idle, 0, Facing::Left));
    assert_eq!(left, &right.mirrored());
}

#[test]
fn atlas_without_any_art_is_all_placeholders() {
    let config = AssetConfig::default();
    let atlas = SpriteAtlas::load(&config, &MemorySource::default());

    assert_eq!(atlas.platform_tile, Sprite::Placeholder(Color::Green));
    assert_eq!(atlas.background, None);
    assert_eq!(
        atlas.player.sprite(frame(Pose::Run, 1, Facing::Left)),
        &Sprite::Placeholder(Color::Blue)
    );
    assert_eq!(
        atlas.zombie.sprite(frame(Pose::Idle, 0, Facing::Right)),
        &Sprite::Placeholder(Color::Red)
    );

    let anims = atlas.animations();
    assert_eq!(anims.player.frame_count(Pose::Run), 4);
    assert_eq!(anims.player.frame_count(Pose::Death), 3);
    assert_eq!(anims.zombie.frame_count(Pose::Run), 2);
}

#[test]
fn shipped_assets_load_from_disk() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let source = DirectorySource::new(&dir);
    assert!(matches!(source.load("john_stopped"), Ok(Sprite::Glyphs(_))));
    assert!(matches!(source.load("platform_tile"), Ok(Sprite::Glyphs(_))));
    assert!(matches!(source.load(BACKGROUND_TILE), Ok(Sprite::Glyphs(_))));
    assert!(matches!(source.load("no_such_sprite"), Err(AssetError::NotFound(_))));
}

#[test]
fn background_is_loaded_when_present() {
    let source = MemorySource::default().with(BACKGROUND_TILE, ". \n  .");
    let atlas = SpriteAtlas::load(&AssetConfig::default(), &source);
    assert!(matches!(atlas.background, Some(Sprite::Glyphs(_))));
}
