//! Data definitions for RON content files.
//!
//! Coordinates are screen space in pixels: origin at the top-left of the
//! level, y grows downward.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Serializable point.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

impl From<PointDef> for Vec2 {
    fn from(p: PointDef) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// Serializable axis-aligned box, top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectDef {
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }
}

/// Kind of static level geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum TerrainKind {
    #[default]
    Ground,
    Wall,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TerrainDef {
    pub rect: RectDef,
    #[serde(default)]
    pub kind: TerrainKind,
}

/// One level file (`assets/levels/<name>.ron`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub name: String,
    /// Top-left corner of the player's body at spawn.
    pub spawn: PointDef,
    pub terrain: Vec<TerrainDef>,
    #[serde(default)]
    pub boars: Vec<PointDef>,
    #[serde(default)]
    pub piglets: Vec<PointDef>,
    #[serde(default)]
    pub balls: Vec<PointDef>,
}
