//! Level domain: plain data types produced by the generator.
//!
//! Coordinates are level-local: X lateral, Y vertical, Z forward progress.
//! The render-space transform (negated X/Z) is applied by whoever consumes
//! this data and never leaks into the simulation.

use bevy::prelude::*;

/// Axis-aligned volume, the shared primitive for platforms, pits, and ground
/// segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Volume {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Y coordinate of the top surface.
    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    /// True when the given lateral/forward footprint overlaps this volume's
    /// footprint.
    pub fn overlaps_footprint(&self, x: f32, z: f32, half_w: f32, half_d: f32) -> bool {
        (x - self.center.x).abs() <= self.half_extents.x + half_w
            && (z - self.center.z).abs() <= self.half_extents.z + half_d
    }

    /// True when a point's (x, z) falls inside the footprint.
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        self.overlaps_footprint(x, z, 0.0, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformKind {
    /// Fixed ledge or stepping stone. Walkable terrain is not a platform;
    /// it lives in `GroundSegment`.
    Static,
    /// Oscillates sinusoidally about its start point; position is a pure
    /// function of elapsed time.
    Moving {
        direction: Vec3,
        distance: f32,
        angular_speed: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub volume: Volume,
    pub kind: PlatformKind,
}

impl Platform {
    /// Center position at the given elapsed session time. Moving platforms
    /// oscillate sinusoidally about their generated start point; there is no
    /// persisted velocity state, only time.
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        match self.kind {
            PlatformKind::Static => self.volume.center,
            PlatformKind::Moving {
                direction,
                distance,
                angular_speed,
            } => self.volume.center + direction * (distance * (angular_speed * elapsed).sin()),
        }
    }
}

/// Which half of a deck/cavity pit pair a record represents.
///
/// Each logical pit is encoded as two stacked volumes: a thin `Deck` at
/// walking height matching the visible surface, and a deep `Cavity` used only
/// for death-by-position sensing. Neither is a solid collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitPart {
    Deck,
    Cavity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pit {
    pub volume: Volume,
    pub part: PitPart,
}

/// Cosmetic tint tag; carries no gameplay meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrystalHue {
    Azure,
    Amber,
    Violet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Crystal {
    pub id: u32,
    pub position: Vec3,
    pub hue: CrystalHue,
    /// Starts invisible; revealed when `requires_target` is shot.
    pub hidden: bool,
    pub requires_target: Option<u32>,
}

/// Cosmetic target shape tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Bat,
    Geode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: u32,
    pub position: Vec3,
    pub kind: TargetKind,
    pub reveals_crystal: Option<u32>,
    /// Requires the aim-and-fire protocol instead of ambient proximity.
    pub camera_focus: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub id: u32,
    pub position: Vec3,
    pub width: f32,
    pub depth: f32,
}

impl Checkpoint {
    /// Vertical slack above the surface; enough for resting on it, not for
    /// a jump arcing over it.
    const STANDING_EPS: f32 = 0.1;

    /// Entered when (x, z) falls within the footprint and y is at or below
    /// the checkpoint surface.
    pub fn contains(&self, position: Vec3) -> bool {
        (position.x - self.position.x).abs() <= self.width / 2.0
            && (position.z - self.position.z).abs() <= self.depth / 2.0
            && position.y <= self.position.y + Self::STANDING_EPS
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BossGate {
    pub position: Vec3,
    pub required_crystals: u32,
}

/// Purely decorative props scattered by the generator. Never collidable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorKind {
    RockLayer,
    DirtLayer,
    Mineral,
    Bone,
    WallTile,
    FloorTile,
    CeilingTile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decor {
    pub kind: DecorKind,
    pub volume: Volume,
}

/// Ambient light placement markers; no collision semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Torch,
    Mushroom,
    CrystalGlow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightMarker {
    pub kind: LightKind,
    pub position: Vec3,
}

/// One tiled walkable ground segment. Segments overlap slightly so seams
/// can never open a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundSegment {
    pub center_z: f32,
    pub length: f32,
}

impl GroundSegment {
    /// Collidable volume for the segment's walkable rock layer.
    pub fn volume(&self) -> Volume {
        Volume::new(
            Vec3::new(0.0, 0.0, self.center_z),
            Vec3::new(GROUND_HALF_WIDTH, GROUND_TOP_Y, self.length / 2.0),
        )
    }
}

/// Height of the walkable ground surface. The character at rest on ground
/// stands with its collision-box bottom at this Y.
pub const GROUND_TOP_Y: f32 = 0.2;

/// Lateral half-width of walkable ground.
pub const GROUND_HALF_WIDTH: f32 = 4.0;

/// Immutable output of `level::gen::generate`. Everything downstream reads
/// this as plain data; only moving-platform positions (time-parameterized)
/// and the boss gate's open marker change during a session.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LevelData {
    pub seed: u64,
    /// Nominal forward length of the course in level units.
    pub length: f32,
    pub ground: Vec<GroundSegment>,
    pub platforms: Vec<Platform>,
    pub pits: Vec<Pit>,
    pub crystals: Vec<Crystal>,
    pub targets: Vec<Target>,
    pub checkpoints: Vec<Checkpoint>,
    pub boss_gate: BossGate,
    pub decor: Vec<Decor>,
    pub lights: Vec<LightMarker>,
}

impl LevelData {
    /// First checkpoint in authored order; the respawn anchor before any
    /// checkpoint has been entered.
    pub fn first_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.iter().min_by_key(|c| c.id)
    }

    pub fn checkpoint(&self, id: u32) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|c| c.id == id)
    }
}
