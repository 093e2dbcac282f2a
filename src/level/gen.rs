//! Level domain: deterministic course generation.
//!
//! `generate(seed)` is a pure function: identical seeds yield identical
//! `LevelData`, including every scattered prop. Randomness only varies
//! decoration; the platform sections themselves are hand-authored and laid
//! out by a running z cursor so sections never overlap and every gap is an
//! intentional pit.

use bevy::prelude::*;
use rand::Rng;

use crate::level::data::{
    BossGate, Checkpoint, Crystal, CrystalHue, Decor, DecorKind, GROUND_HALF_WIDTH, GROUND_TOP_Y,
    GroundSegment, LevelData, LightKind, LightMarker, Pit, PitPart, Platform, PlatformKind, Target,
    TargetKind, Volume,
};
use crate::level::rng::LevelRng;

/// Nominal forward length of the course.
pub const LEVEL_LENGTH: f32 = 200.0;

/// Platforms whose top is at or above this height get a punishing pit
/// auto-inserted beneath and slightly in front of them.
pub const HIGH_PLATFORM_TOP: f32 = 1.5;

/// Minimum pit half-width after lane alignment (full width >= 3).
pub const MIN_PIT_HALF_WIDTH: f32 = 1.5;

/// Crystals needed to open the boss gate. Matches the number of crystals the
/// authored sections place.
pub const REQUIRED_CRYSTALS: u32 = 3;

const SEGMENT_LENGTH: f32 = 20.0;
const SEGMENT_OVERLAP: f32 = 0.5;
const TORCH_SPACING: f32 = 12.0;
const WALL_X: f32 = 5.0;

/// Everything below is authored against these ledge dimensions.
const LEDGE_HALF: Vec3 = Vec3::new(1.5, 0.3, 1.5);
const STONE_HALF: Vec3 = Vec3::new(0.9, 0.25, 0.9);

pub fn generate(seed: u64) -> LevelData {
    let mut rng = LevelRng::new(seed);

    let mut platforms = Vec::new();
    let mut pits = Vec::new();
    let mut crystals = Vec::new();
    let mut targets = Vec::new();
    let mut checkpoints = Vec::new();
    let mut lights = Vec::new();

    // ------------------------------------------------------------------
    // Authored platform sections, advanced by a running z cursor.
    // ------------------------------------------------------------------

    // Start zone.
    checkpoints.push(checkpoint(1, 2.0));

    // Teaching pit: the first hazard, early and narrow enough that a plain
    // running jump clears it.
    push_pit(&mut pits, 15.0, 1.75);

    // Staggered ledges, rising then falling.
    for (i, top) in [0.8, 1.6, 2.4, 1.6, 0.8].into_iter().enumerate() {
        platforms.push(ledge(24.0 + i as f32 * 4.0, top, LEDGE_HALF));
    }
    crystals.push(Crystal {
        id: 1,
        position: Vec3::new(0.0, 3.4, 32.0),
        hue: CrystalHue::Azure,
        hidden: false,
        requires_target: None,
    });

    checkpoints.push(checkpoint(2, 45.0));

    // Chasm-and-recovery pairs: a gap, then a low platform to regroup on.
    push_pit(&mut pits, 52.0, 2.0);
    platforms.push(ledge(56.0, 0.6, LEDGE_HALF));
    push_pit(&mut pits, 62.0, 2.0);
    platforms.push(ledge(66.0, 0.6, LEDGE_HALF));

    // Floating stepping-stone run, with a geode shot by simply running
    // through it.
    for i in 0..5 {
        platforms.push(ledge(72.0 + i as f32 * 4.0, 1.0, STONE_HALF));
    }
    targets.push(Target {
        id: 2,
        position: Vec3::new(0.0, 1.2, 80.0),
        kind: TargetKind::Geode,
        reveals_crystal: None,
        camera_focus: false,
    });

    // Target puzzle: a focus-flagged target reveals a hidden crystal just
    // past it.
    checkpoints.push(checkpoint(3, 94.0));
    targets.push(Target {
        id: 1,
        position: Vec3::new(0.0, 2.5, 98.0),
        kind: TargetKind::Bat,
        reveals_crystal: Some(2),
        camera_focus: true,
    });
    crystals.push(Crystal {
        id: 2,
        position: Vec3::new(0.0, 1.2, 100.0),
        hue: CrystalHue::Amber,
        hidden: true,
        requires_target: Some(1),
    });

    // Straight climbing run.
    for (i, top) in [0.8, 1.4, 2.0, 2.6, 3.2].into_iter().enumerate() {
        platforms.push(ledge(106.0 + i as f32 * 4.0, top, LEDGE_HALF));
    }

    // One oscillating platform flanked by pits on both sides.
    push_pit(&mut pits, 130.0, 2.0);
    platforms.push(Platform {
        volume: Volume::new(Vec3::new(0.0, 1.0 - 0.3, 134.0), Vec3::new(1.2, 0.3, 1.2)),
        kind: PlatformKind::Moving {
            direction: Vec3::Z,
            distance: 2.5,
            angular_speed: 1.2,
        },
    });
    push_pit(&mut pits, 138.0, 2.0);

    // Vertical crystal chase on progressively higher ledges.
    for (i, top) in [1.0, 1.8, 2.6, 3.4].into_iter().enumerate() {
        platforms.push(ledge(146.0 + i as f32 * 4.0, top, LEDGE_HALF));
    }
    crystals.push(Crystal {
        id: 3,
        position: Vec3::new(0.0, 4.2, 158.0),
        hue: CrystalHue::Violet,
        hidden: false,
        requires_target: None,
    });

    checkpoints.push(checkpoint(4, 166.0));

    // Final approach platform leading into the gate and arena.
    platforms.push(Platform {
        volume: Volume::new(Vec3::new(0.0, 0.8 - 0.3, 172.0), Vec3::new(2.0, 0.3, 3.0)),
        kind: PlatformKind::Static,
    });

    let boss_gate = BossGate {
        position: Vec3::new(0.0, GROUND_TOP_Y, 180.0),
        required_crystals: REQUIRED_CRYSTALS,
    };

    // ------------------------------------------------------------------
    // Post-process: every high platform gets a pit beneath and slightly in
    // front, so a missed jump falls into a hazard instead of silently
    // succeeding on invisible ground.
    // ------------------------------------------------------------------
    let high_pits: Vec<(f32, f32)> = platforms
        .iter()
        .filter(|p| p.volume.top() >= HIGH_PLATFORM_TOP)
        .map(|p| (p.volume.center.z + p.volume.half_extents.z + 1.2, 1.5))
        .collect();
    for (z, half_depth) in high_pits {
        push_pit(&mut pits, z, half_depth);
    }

    // Post-process: force every pit onto the single travel lane regardless of
    // how it was authored, with enough width that the character cannot skirt
    // around it.
    for pit in &mut pits {
        pit.volume.center.x = 0.0;
        pit.volume.half_extents.x = pit.volume.half_extents.x.max(MIN_PIT_HALF_WIDTH);
    }

    // ------------------------------------------------------------------
    // Ground segmentation: contiguous tiles with slight overlap. One extra
    // trailing segment is always allocated; slight overlap is harmless, a
    // coverage gap is not.
    // ------------------------------------------------------------------
    let stride = SEGMENT_LENGTH - SEGMENT_OVERLAP;
    let count = (LEVEL_LENGTH / stride).ceil() as usize + 1;
    let mut ground = Vec::with_capacity(count);
    let mut decor = Vec::new();
    for i in 0..count {
        let segment = GroundSegment {
            center_z: i as f32 * stride + SEGMENT_LENGTH / 2.0,
            length: SEGMENT_LENGTH,
        };
        scatter_segment_decor(&mut decor, &segment, &mut rng);
        ground.push(segment);
    }

    // Background tiling and lighting along the full length.
    emit_background(&mut decor, count as f32 * stride + SEGMENT_LENGTH);
    emit_lighting(&mut lights, &checkpoints, &crystals, &boss_gate, &mut rng);

    let level = LevelData {
        seed,
        length: LEVEL_LENGTH,
        ground,
        platforms,
        pits,
        crystals,
        targets,
        checkpoints,
        boss_gate,
        decor,
        lights,
    };

    debug!(
        "generated level: seed={} platforms={} pits={} crystals={} targets={}",
        seed,
        level.platforms.len(),
        level.pits.len(),
        level.crystals.len(),
        level.targets.len(),
    );

    level
}

fn checkpoint(id: u32, z: f32) -> Checkpoint {
    Checkpoint {
        id,
        position: Vec3::new(0.0, GROUND_TOP_Y, z),
        width: 4.0,
        depth: 3.0,
    }
}

/// Static ledge whose top surface sits at `top`.
fn ledge(z: f32, top: f32, half: Vec3) -> Platform {
    Platform {
        volume: Volume::new(Vec3::new(0.0, top - half.y, z), half),
        kind: PlatformKind::Static,
    }
}

/// Emit the deck/cavity pair for one logical pit centered at `z`.
///
/// The deck is a thin volume matching the walkable surface extents; the
/// cavity reaches from just above the surface down into the void and is what
/// the hazard sensor tests against.
fn push_pit(pits: &mut Vec<Pit>, z: f32, half_depth: f32) {
    pits.push(Pit {
        volume: Volume::new(
            Vec3::new(0.0, 0.0, z),
            Vec3::new(MIN_PIT_HALF_WIDTH, GROUND_TOP_Y, half_depth),
        ),
        part: PitPart::Deck,
    });
    pits.push(Pit {
        volume: Volume::new(
            Vec3::new(0.0, -2.0, z),
            Vec3::new(MIN_PIT_HALF_WIDTH, 2.5, half_depth),
        ),
        part: PitPart::Cavity,
    });
}

/// Rock/dirt layers plus scattered mineral and bone props for one ground
/// segment. All decorative; the dirt volume and everything inside it stays
/// strictly below the collidable surface extents.
fn scatter_segment_decor(decor: &mut Vec<Decor>, segment: &GroundSegment, rng: &mut LevelRng) {
    let half_len = segment.length / 2.0;
    decor.push(Decor {
        kind: DecorKind::RockLayer,
        volume: Volume::new(
            Vec3::new(0.0, 0.0, segment.center_z),
            Vec3::new(GROUND_HALF_WIDTH, GROUND_TOP_Y, half_len),
        ),
    });
    let dirt = Volume::new(
        Vec3::new(0.0, -1.6, segment.center_z),
        Vec3::new(GROUND_HALF_WIDTH, 1.3, half_len),
    );
    decor.push(Decor {
        kind: DecorKind::DirtLayer,
        volume: dirt,
    });

    for _ in 0..3 {
        let x = rng.random_range(-3.5..3.5);
        let y = rng.random_range(-2.6..-0.6);
        let z = rng.random_range((segment.center_z - half_len)..(segment.center_z + half_len));
        let kind = if rng.random_bool(0.6) {
            DecorKind::Mineral
        } else {
            DecorKind::Bone
        };
        decor.push(Decor {
            kind,
            volume: Volume::new(Vec3::new(x, y, z), Vec3::splat(0.2)),
        });
    }
}

/// Side walls, floor, and ceiling tiles along the whole covered length.
fn emit_background(decor: &mut Vec<Decor>, covered_length: f32) {
    let tile_len = 10.0;
    let tiles = (covered_length / tile_len).ceil() as usize;
    for i in 0..tiles {
        let z = i as f32 * tile_len + tile_len / 2.0;
        for side in [-1.0, 1.0] {
            decor.push(Decor {
                kind: DecorKind::WallTile,
                volume: Volume::new(
                    Vec3::new(side * WALL_X, 2.0, z),
                    Vec3::new(0.3, 4.0, tile_len / 2.0),
                ),
            });
        }
        decor.push(Decor {
            kind: DecorKind::FloorTile,
            volume: Volume::new(
                Vec3::new(0.0, -3.2, z),
                Vec3::new(WALL_X, 0.3, tile_len / 2.0),
            ),
        });
        decor.push(Decor {
            kind: DecorKind::CeilingTile,
            volume: Volume::new(
                Vec3::new(0.0, 6.0, z),
                Vec3::new(WALL_X, 0.3, tile_len / 2.0),
            ),
        });
    }
}

/// Wall torches at a fixed spacing, mushrooms and crystal glow near gameplay
/// beats, and extra torches inside the boss arena.
fn emit_lighting(
    lights: &mut Vec<LightMarker>,
    checkpoints: &[Checkpoint],
    crystals: &[Crystal],
    boss_gate: &BossGate,
    rng: &mut LevelRng,
) {
    let torches = (LEVEL_LENGTH / TORCH_SPACING).ceil() as usize;
    for i in 0..torches {
        let z = i as f32 * TORCH_SPACING;
        for side in [-1.0, 1.0] {
            lights.push(LightMarker {
                kind: LightKind::Torch,
                position: Vec3::new(side * (WALL_X - 0.4), 2.8, z),
            });
        }
    }

    for cp in checkpoints {
        let x = rng.random_range(-1.5..1.5);
        lights.push(LightMarker {
            kind: LightKind::Mushroom,
            position: Vec3::new(x, GROUND_TOP_Y, cp.position.z + 1.0),
        });
    }

    for crystal in crystals {
        lights.push(LightMarker {
            kind: LightKind::CrystalGlow,
            position: crystal.position + Vec3::new(0.0, 0.4, 0.0),
        });
    }

    // Boss arena torches, past the gate.
    for i in 0..4 {
        let z = boss_gate.position.z + 4.0 + i as f32 * 4.0;
        for side in [-1.0, 1.0] {
            lights.push(LightMarker {
                kind: LightKind::Torch,
                position: Vec3::new(side * 3.0, 2.2, z),
            });
        }
    }
}
